//! DOM abstraction shared by every controller.
//!
//! Controllers never query the document themselves: the composition root
//! hands them the elements they own. `web` binds these traits to `web-sys`,
//! `fake` (tests only) to an in-memory tree.

#[cfg(test)]
pub mod fake;
pub mod web;

/// A single element of the page.
///
/// Handles are cheap to clone and refer to the same underlying node.
pub trait UiElement: Clone + 'static {
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    fn has_class(&self, class: &str) -> bool;

    fn attribute(&self, name: &str) -> Option<String>;
    fn set_attribute(&self, name: &str, value: &str);
    fn remove_attribute(&self, name: &str);

    fn set_text(&self, text: &str);
    fn set_style(&self, property: &str, value: &str);
    fn focus(&self);

    /// Append a `<div class="{class}">{text}</div>` child.
    fn append_text_child(&self, class: &str, text: &str);

    /// Destination of the first link inside this element.
    fn link_href(&self) -> Option<String>;

    /// Descendants matching `selector`, in document order.
    fn query_all(&self, selector: &str) -> Vec<Self>;

    /// Nearest ancestor-or-self matching `selector`.
    fn closest(&self, selector: &str) -> Option<Self>;

    /// Node identity, not structural equality.
    fn is_same(&self, other: &Self) -> bool;

    /// Value of the `data-{key}` attribute
    fn data(&self, key: &str) -> Option<String> {
        self.attribute(&format!("data-{key}"))
    }

    fn set_disabled(&self, disabled: bool) {
        if disabled {
            self.set_attribute("disabled", "");
        } else {
            self.remove_attribute("disabled");
        }
    }

    fn toggle_class(&self, class: &str, on: bool) {
        if on {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }
}

/// Document-level lookups used once by the composition root.
pub trait UiDocument {
    type Element: UiElement;

    fn body(&self) -> Option<Self::Element>;
    fn query(&self, selector: &str) -> Option<Self::Element>;
    fn query_all(&self, selector: &str) -> Vec<Self::Element>;
}

/// Durable key/value storage surviving page reloads.
pub trait PreferenceStore {
    /// Read failures are reported as `None`.
    fn get(&self, key: &str) -> Option<String>;
    /// Write failures are logged and swallowed.
    fn set(&self, key: &str, value: &str);
}

//! `web-sys` bindings for the DOM abstraction.

use super::{PreferenceStore, UiDocument, UiElement};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlAnchorElement, HtmlElement, Node, NodeList, Storage};

#[derive(Clone, Debug)]
pub struct WebElement(HtmlElement);

impl WebElement {
    /// `None` for non-HTML elements (e.g. SVG).
    pub fn from_element(element: Element) -> Option<Self> {
        element.dyn_into::<HtmlElement>().ok().map(Self)
    }

    pub fn html(&self) -> &HtmlElement {
        &self.0
    }
}

fn collect(list: Result<NodeList, JsValue>) -> Vec<WebElement> {
    let Ok(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .map(WebElement)
        .collect()
}

impl UiElement for WebElement {
    fn add_class(&self, class: &str) {
        let _ = self.0.class_list().add_1(class);
    }

    fn remove_class(&self, class: &str) {
        let _ = self.0.class_list().remove_1(class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) {
        let _ = self.0.set_attribute(name, value);
    }

    fn remove_attribute(&self, name: &str) {
        let _ = self.0.remove_attribute(name);
    }

    fn set_text(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }

    fn set_style(&self, property: &str, value: &str) {
        let _ = self.0.style().set_property(property, value);
    }

    fn focus(&self) {
        let _ = self.0.focus();
    }

    fn append_text_child(&self, class: &str, text: &str) {
        let Some(document) = self.0.owner_document() else {
            return;
        };
        let Ok(child) = document.create_element("div") else {
            return;
        };
        child.set_class_name(class);
        child.set_text_content(Some(text));
        let _ = self.0.append_child(&child);
    }

    fn link_href(&self) -> Option<String> {
        self.0
            .query_selector("a")
            .ok()
            .flatten()
            .and_then(|link| link.dyn_into::<HtmlAnchorElement>().ok())
            .map(|link| link.href())
    }

    fn query_all(&self, selector: &str) -> Vec<Self> {
        collect(self.0.query_selector_all(selector))
    }

    fn closest(&self, selector: &str) -> Option<Self> {
        self.0
            .closest(selector)
            .ok()
            .flatten()
            .and_then(WebElement::from_element)
    }

    fn is_same(&self, other: &Self) -> bool {
        let other: &Node = &other.0;
        self.0.is_same_node(Some(other))
    }
}

#[derive(Clone, Debug)]
pub struct WebDocument(Document);

impl WebDocument {
    /// The document of the current window, if running in a browser.
    pub fn current() -> Option<Self> {
        web_sys::window().and_then(|w| w.document()).map(Self)
    }

    pub fn inner(&self) -> &Document {
        &self.0
    }

    pub fn by_id(&self, id: &str) -> Option<Element> {
        self.0.get_element_by_id(id)
    }
}

impl UiDocument for WebDocument {
    type Element = WebElement;

    fn body(&self) -> Option<WebElement> {
        self.0.body().map(WebElement)
    }

    fn query(&self, selector: &str) -> Option<WebElement> {
        self.0
            .query_selector(selector)
            .ok()
            .flatten()
            .and_then(WebElement::from_element)
    }

    fn query_all(&self, selector: &str) -> Vec<WebElement> {
        collect(self.0.query_selector_all(selector))
    }
}

/// `window.localStorage`
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

fn local_storage() -> Option<Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        match local_storage() {
            Some(storage) => {
                if let Err(err) = storage.set_item(key, value) {
                    log::warn!("Failed to persist '{}': {:?}", key, err);
                }
            }
            None => log::warn!("localStorage unavailable, '{}' not persisted", key),
        }
    }
}

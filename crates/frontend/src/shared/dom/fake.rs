//! In-memory DOM used by unit tests.

use super::{PreferenceStore, UiDocument, UiElement};
use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::rc::Rc;

#[derive(Debug, Default)]
struct FakeNode {
    classes: BTreeSet<String>,
    attributes: BTreeMap<String, String>,
    text: String,
    styles: BTreeMap<String, String>,
    children: Vec<(String, String)>,
    descendants: HashMap<String, Vec<FakeElement>>,
    ancestors: HashMap<String, FakeElement>,
    link: Option<String>,
    focused: bool,
}

#[derive(Clone, Debug, Default)]
pub struct FakeElement(Rc<RefCell<FakeNode>>);

impl FakeElement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data(self, key: &str, value: &str) -> Self {
        self.set_attribute(&format!("data-{key}"), value);
        self
    }

    pub fn with_link(self, href: &str) -> Self {
        self.0.borrow_mut().link = Some(href.to_string());
        self
    }

    pub fn with_descendants(self, selector: &str, elements: Vec<FakeElement>) -> Self {
        self.0
            .borrow_mut()
            .descendants
            .insert(selector.to_string(), elements);
        self
    }

    /// What `closest(selector)` resolves to for this element.
    pub fn with_ancestor(self, selector: &str, ancestor: &FakeElement) -> Self {
        self.0
            .borrow_mut()
            .ancestors
            .insert(selector.to_string(), ancestor.clone());
        self
    }

    pub fn classes(&self) -> Vec<String> {
        self.0.borrow().classes.iter().cloned().collect()
    }

    pub fn text(&self) -> String {
        self.0.borrow().text.clone()
    }

    pub fn style(&self, property: &str) -> Option<String> {
        self.0.borrow().styles.get(property).cloned()
    }

    /// Texts of appended children, in order
    pub fn children(&self) -> Vec<String> {
        self.0
            .borrow()
            .children
            .iter()
            .map(|(_, text)| text.clone())
            .collect()
    }

    pub fn child_classes(&self) -> Vec<String> {
        self.0
            .borrow()
            .children
            .iter()
            .map(|(class, _)| class.clone())
            .collect()
    }

    pub fn is_disabled(&self) -> bool {
        self.0.borrow().attributes.contains_key("disabled")
    }

    pub fn is_focused(&self) -> bool {
        self.0.borrow().focused
    }
}

impl UiElement for FakeElement {
    fn add_class(&self, class: &str) {
        self.0.borrow_mut().classes.insert(class.to_string());
    }

    fn remove_class(&self, class: &str) {
        self.0.borrow_mut().classes.remove(class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.borrow().classes.contains(class)
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.borrow().attributes.get(name).cloned()
    }

    fn set_attribute(&self, name: &str, value: &str) {
        self.0
            .borrow_mut()
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    fn remove_attribute(&self, name: &str) {
        self.0.borrow_mut().attributes.remove(name);
    }

    fn set_text(&self, text: &str) {
        self.0.borrow_mut().text = text.to_string();
    }

    fn set_style(&self, property: &str, value: &str) {
        self.0
            .borrow_mut()
            .styles
            .insert(property.to_string(), value.to_string());
    }

    fn focus(&self) {
        self.0.borrow_mut().focused = true;
    }

    fn append_text_child(&self, class: &str, text: &str) {
        self.0
            .borrow_mut()
            .children
            .push((class.to_string(), text.to_string()));
    }

    fn link_href(&self) -> Option<String> {
        self.0.borrow().link.clone()
    }

    fn query_all(&self, selector: &str) -> Vec<Self> {
        self.0
            .borrow()
            .descendants
            .get(selector)
            .cloned()
            .unwrap_or_default()
    }

    fn closest(&self, selector: &str) -> Option<Self> {
        self.0.borrow().ancestors.get(selector).cloned()
    }

    fn is_same(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[derive(Default)]
pub struct FakeDocument {
    body: Option<FakeElement>,
    selectors: HashMap<String, Vec<FakeElement>>,
}

impl FakeDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_body(mut self, body: FakeElement) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with(mut self, selector: &str, elements: Vec<FakeElement>) -> Self {
        self.selectors.insert(selector.to_string(), elements);
        self
    }
}

impl UiDocument for FakeDocument {
    type Element = FakeElement;

    fn body(&self) -> Option<FakeElement> {
        self.body.clone()
    }

    fn query(&self, selector: &str) -> Option<FakeElement> {
        self.selectors
            .get(selector)
            .and_then(|elements| elements.first().cloned())
    }

    fn query_all(&self, selector: &str) -> Vec<FakeElement> {
        self.selectors.get(selector).cloned().unwrap_or_default()
    }
}

/// Shared between clones, so a second controller sees what the first one wrote.
#[derive(Clone, Default)]
pub struct MemoryStore(Rc<RefCell<HashMap<String, String>>>);

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(self, key: &str, value: &str) -> Self {
        self.set(key, value);
        self
    }

    pub fn value(&self, key: &str) -> Option<String> {
        self.0.borrow().get(key).cloned()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.value(key)
    }

    fn set(&self, key: &str, value: &str) {
        self.0
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

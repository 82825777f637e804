//! Reveal-on-scroll bookkeeping.
//!
//! The browser side (IntersectionObserver) reports crossings; this type
//! decides which elements get the reveal class. Reveals are one-shot.

use crate::shared::dom::UiElement;
use crate::shared::events::Listeners;
use std::cell::RefCell;

pub const REVEALED_CLASS: &str = "fade-in";

struct ViewportEntry<E> {
    element: E,
    revealed: bool,
}

pub struct ViewportObserver<E: UiElement> {
    threshold: f64,
    entries: RefCell<Vec<ViewportEntry<E>>>,
    listeners: Listeners<E>,
    watch_hooks: Listeners<E>,
}

impl<E: UiElement> ViewportObserver<E> {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            entries: RefCell::new(Vec::new()),
            listeners: Listeners::new(),
            watch_hooks: Listeners::new(),
        }
    }

    /// Fraction of an element that must be visible to count as "in view"
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Register elements; already watched ones are skipped. Returns how many were added.
    ///
    /// Every newly added element is passed to the `on_watch` hooks, which hand
    /// it to the browser observer.
    pub fn watch(&self, elements: impl IntoIterator<Item = E>) -> usize {
        let added: Vec<E> = {
            let mut entries = self.entries.borrow_mut();
            let mut added = Vec::new();
            for element in elements {
                if entries.iter().any(|e| e.element.is_same(&element)) {
                    continue;
                }
                entries.push(ViewportEntry {
                    element: element.clone(),
                    revealed: false,
                });
                added.push(element);
            }
            added
        };
        for element in &added {
            self.watch_hooks.emit(element);
        }
        added.len()
    }

    /// Called for each element registered by later `watch` calls.
    pub fn on_watch(&self, hook: impl Fn(&E) + 'static) {
        self.watch_hooks.subscribe(hook);
    }

    /// Intersection callback. Returns `true` when `target` was revealed just now.
    pub fn on_intersection(&self, target: &E, is_intersecting: bool) -> bool {
        if !is_intersecting {
            return false;
        }
        let revealed = {
            let mut entries = self.entries.borrow_mut();
            match entries.iter_mut().find(|e| e.element.is_same(target)) {
                Some(entry) if !entry.revealed => {
                    entry.revealed = true;
                    entry.element.add_class(REVEALED_CLASS);
                    true
                }
                _ => false,
            }
        };
        if revealed {
            self.listeners.emit(target);
        }
        revealed
    }

    pub fn is_revealed(&self, element: &E) -> bool {
        self.entries
            .borrow()
            .iter()
            .any(|e| e.revealed && e.element.is_same(element))
    }

    pub fn revealed_count(&self) -> usize {
        self.entries.borrow().iter().filter(|e| e.revealed).count()
    }

    /// Watched elements, in registration order
    pub fn watched(&self) -> Vec<E> {
        self.entries
            .borrow()
            .iter()
            .map(|e| e.element.clone())
            .collect()
    }

    pub fn watched_count(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn subscribe(&self, handler: impl Fn(&E) + 'static) {
        self.listeners.subscribe(handler);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::dom::fake::FakeElement;

    #[test]
    fn test_reveal_is_monotonic() {
        let observer = ViewportObserver::new(0.1);
        let section = FakeElement::new();
        observer.watch([section.clone()]);

        assert!(!observer.on_intersection(&section, false));
        assert!(!section.has_class(REVEALED_CLASS));

        assert!(observer.on_intersection(&section, true));
        assert!(section.has_class(REVEALED_CLASS));

        assert!(!observer.on_intersection(&section, false));
        assert!(!observer.on_intersection(&section, true));
        assert!(section.has_class(REVEALED_CLASS));
        assert!(observer.is_revealed(&section));
        assert_eq!(observer.revealed_count(), 1);
    }

    #[test]
    fn test_subscribers_see_each_reveal_once() {
        let observer = ViewportObserver::new(0.1);
        let elements = vec![FakeElement::new(), FakeElement::new()];
        observer.watch(elements.clone());
        let count = std::rc::Rc::new(std::cell::Cell::new(0));
        let sink = count.clone();
        observer.subscribe(move |_| sink.set(sink.get() + 1));
        for element in elements.iter().chain(elements.iter()) {
            observer.on_intersection(element, true);
        }
        assert_eq!(count.get(), 2);
        assert_eq!(observer.watched().len(), 2);
    }

    #[test]
    fn test_late_watch_reaches_observe_hook() {
        let observer = ViewportObserver::new(0.1);
        let early = FakeElement::new();
        observer.watch([early.clone()]);

        let observed = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
        let sink = observed.clone();
        observer.on_watch(move |el: &FakeElement| sink.borrow_mut().push(el.clone()));

        let late = FakeElement::new();
        assert_eq!(observer.watch([early.clone(), late.clone()]), 1);
        assert_eq!(observed.borrow().len(), 1);
        assert!(observed.borrow()[0].is_same(&late));

        assert!(observer.on_intersection(&late, true));
        assert!(late.has_class(REVEALED_CLASS));
    }

    #[test]
    fn test_unwatched_elements_are_ignored() {
        let observer = ViewportObserver::new(0.1);
        let stranger = FakeElement::new();
        assert!(!observer.on_intersection(&stranger, true));
        assert!(!stranger.has_class(REVEALED_CLASS));
    }

    #[test]
    fn test_watch_skips_duplicates() {
        let observer = ViewportObserver::new(0.1);
        let a = FakeElement::new();
        let b = FakeElement::new();
        assert_eq!(observer.watch([a.clone(), b.clone(), a.clone()]), 2);
        assert_eq!(observer.watch([b]), 0);
        assert_eq!(observer.watched_count(), 2);
        assert_eq!(observer.threshold(), 0.1);
    }
}

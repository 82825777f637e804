//! Mutually exclusive tab groups.
//!
//! Buttons and panels are paired by document order. Every transition goes
//! through `set_active`, so exactly one pair carries the active class once
//! the group is initialized.

use crate::shared::dom::UiElement;
use crate::shared::events::Listeners;
use contracts::TabDirection;
use std::cell::Cell;

pub const ACTIVE_CLASS: &str = "active";

pub struct TabGroupController<E: UiElement> {
    pairs: Vec<(E, E)>,
    active: Cell<Option<usize>>,
    listeners: Listeners<usize>,
}

impl<E: UiElement> TabGroupController<E> {
    pub fn new(buttons: Vec<E>, panels: Vec<E>) -> Self {
        if buttons.len() != panels.len() {
            log::warn!(
                "Tab group has {} buttons and {} panels, unpaired ones are ignored",
                buttons.len(),
                panels.len()
            );
        }
        Self {
            pairs: buttons.into_iter().zip(panels).collect(),
            active: Cell::new(None),
            listeners: Listeners::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// An empty group ignores every operation.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn initialize(&self) {
        if self.is_empty() {
            return;
        }
        self.set_active(0);
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active.get()
    }

    /// Make pair `index` the only active one. Out-of-range indices are ignored.
    pub fn activate(&self, index: usize) -> bool {
        if index >= self.len() {
            log::debug!("Tab index {} out of range (0..{})", index, self.len());
            return false;
        }
        let changed = self.active.get() != Some(index);
        self.set_active(index);
        if changed {
            self.listeners.emit(&index);
        }
        true
    }

    /// Keyboard navigation: activate the neighbour of `from` and focus its button.
    pub fn advance(&self, direction: TabDirection, from: usize) -> Option<usize> {
        let next = direction.step(from, self.len())?;
        self.activate(next);
        self.pairs[next].0.focus();
        Some(next)
    }

    /// Position of `button` in this group, if it belongs here.
    pub fn index_of(&self, button: &E) -> Option<usize> {
        self.pairs.iter().position(|(b, _)| b.is_same(button))
    }

    pub fn buttons(&self) -> impl Iterator<Item = &E> {
        self.pairs.iter().map(|(button, _)| button)
    }

    pub fn subscribe(&self, handler: impl Fn(&usize) + 'static) {
        self.listeners.subscribe(handler);
    }

    fn set_active(&self, index: usize) {
        for (i, (button, panel)) in self.pairs.iter().enumerate() {
            let on = i == index;
            button.toggle_class(ACTIVE_CLASS, on);
            button.set_attribute("aria-selected", if on { "true" } else { "false" });
            panel.toggle_class(ACTIVE_CLASS, on);
        }
        self.active.set(Some(index));
    }
}

//! Chat panel toggle.
//!
//! The chat is a static placeholder: the first time the panel opens it is
//! filled with a fixed list of greeting messages, never again afterwards.

use crate::shared::dom::UiElement;
use crate::shared::events::Listeners;
use contracts::shared::site_config::ChatConfig;
use contracts::PanelState;
use std::cell::Cell;

pub const OPEN_CLASS: &str = "active";

pub struct PanelToggleController<E: UiElement> {
    toggle: E,
    panel: E,
    config: ChatConfig,
    state: Cell<PanelState>,
    populated: Cell<bool>,
    listeners: Listeners<PanelState>,
}

impl<E: UiElement> PanelToggleController<E> {
    /// Starts closed; the toggle label is synchronized immediately.
    pub fn new(toggle: E, panel: E, config: ChatConfig) -> Self {
        let ctrl = Self {
            toggle,
            panel,
            config,
            state: Cell::new(PanelState::Closed),
            populated: Cell::new(false),
            listeners: Listeners::new(),
        };
        ctrl.render();
        ctrl
    }

    pub fn state(&self) -> PanelState {
        self.state.get()
    }

    pub fn is_open(&self) -> bool {
        self.state.get().is_open()
    }

    pub fn toggle(&self) -> PanelState {
        let next = self.state.get().toggled();
        if next.is_open() && !self.populated.get() {
            self.populate();
        }
        self.state.set(next);
        self.render();
        log::debug!("Chat panel {:?}", next);
        self.listeners.emit(&next);
        next
    }

    /// No-op when already open.
    pub fn open(&self) -> bool {
        if self.is_open() {
            return false;
        }
        self.toggle();
        true
    }

    /// No-op when already closed. Used by Escape.
    pub fn close(&self) -> bool {
        if !self.is_open() {
            return false;
        }
        self.toggle();
        true
    }

    pub fn toggle_element(&self) -> &E {
        &self.toggle
    }

    pub fn subscribe(&self, handler: impl Fn(&PanelState) + 'static) {
        self.listeners.subscribe(handler);
    }

    fn populate(&self) {
        for message in &self.config.placeholder_messages {
            self.panel
                .append_text_child(&self.config.message_class, message);
        }
        self.populated.set(true);
    }

    fn render(&self) {
        let state = self.state.get();
        self.panel.toggle_class(OPEN_CLASS, state.is_open());
        let label = if state.is_open() {
            &self.config.open_label
        } else {
            &self.config.closed_label
        };
        self.toggle.set_text(label);
        self.toggle.set_attribute("aria-label", label);
        self.toggle
            .set_attribute("aria-expanded", state.aria_expanded());
    }
}

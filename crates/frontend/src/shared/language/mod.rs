//! Language switching.
//!
//! Active language is mirrored on the root element as a `lang-*` class
//! (styles show or hide bilingual copy by it) and persisted in the
//! preference store.

use crate::shared::dom::{PreferenceStore, UiElement};
use crate::shared::events::Listeners;
use contracts::Language;
use std::cell::Cell;

/// Class of the selector control for the active language.
pub const SELECTED_CLASS: &str = "active";

pub struct LanguageController<E: UiElement, S: PreferenceStore> {
    root: E,
    buttons: Vec<E>,
    store: S,
    storage_key: String,
    active: Cell<Option<Language>>,
    listeners: Listeners<Language>,
}

impl<E: UiElement, S: PreferenceStore> LanguageController<E, S> {
    pub fn new(root: E, buttons: Vec<E>, store: S, storage_key: impl Into<String>) -> Self {
        Self {
            root,
            buttons,
            store,
            storage_key: storage_key.into(),
            active: Cell::new(None),
            listeners: Listeners::new(),
        }
    }

    /// Restore the persisted language (primary if absent or unknown) and paint it.
    pub fn initialize(&self) -> Language {
        let stored = self.store.get(&self.storage_key);
        let language = Language::from_stored(stored.as_deref());
        if stored.is_some() && stored.as_deref() != Some(language.code()) {
            log::warn!(
                "Ignoring stored language {:?}, using {}",
                stored.unwrap_or_default(),
                language
            );
        }
        self.apply(language);
        self.active.set(Some(language));
        log::debug!("Language initialized: {}", language);
        language
    }

    pub fn active(&self) -> Language {
        self.active.get().unwrap_or_default()
    }

    /// Switch to `language`. Returns `false` if it was already active.
    pub fn select(&self, language: Language) -> bool {
        if self.active.get() == Some(language) {
            return false;
        }
        self.apply(language);
        self.store.set(&self.storage_key, language.code());
        self.active.set(Some(language));
        log::debug!("Language switched to {}", language);
        self.listeners.emit(&language);
        true
    }

    /// Entry point for click handlers and the page API. Unknown codes are ignored.
    pub fn select_code(&self, code: &str) -> bool {
        match Language::from_code(code) {
            Some(language) => self.select(language),
            None => {
                log::warn!("Unsupported language code {:?} ignored", code);
                false
            }
        }
    }

    pub fn buttons(&self) -> &[E] {
        &self.buttons
    }

    pub fn subscribe(&self, handler: impl Fn(&Language) + 'static) {
        self.listeners.subscribe(handler);
    }

    fn apply(&self, language: Language) {
        for other in Language::all() {
            if other != language {
                self.root.remove_class(other.marker_class());
            }
        }
        self.root.add_class(language.marker_class());

        for button in &self.buttons {
            let selected = button.data("lang").as_deref() == Some(language.code());
            button.toggle_class(SELECTED_CLASS, selected);
            button.set_disabled(selected);
            button.set_attribute("aria-pressed", if selected { "true" } else { "false" });
        }
    }
}

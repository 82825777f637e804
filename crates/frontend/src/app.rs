//! Composition root.
//!
//! `Site` looks up every element once, hands each controller the subtree it
//! owns and runs the initialization sequence. Browser listeners are attached
//! separately in `app_shell`.

use crate::layout::location_cards::LocationCards;
use crate::layout::nav_menu::NavMenuController;
use crate::layout::page_fade::PageFadeIn;
use crate::shared::chat::PanelToggleController;
use crate::shared::dom::{PreferenceStore, UiDocument, UiElement};
use crate::shared::keyboard::{self, KeyCommand};
use crate::shared::language::LanguageController;
use crate::shared::tabs::TabGroupController;
use crate::shared::viewport::ViewportObserver;
use contracts::shared::date_format;
use contracts::shared::site_config::Selectors;
use contracts::{SiteConfig, UiSnapshot};

pub struct Site<E: UiElement, S: PreferenceStore> {
    pub config: SiteConfig,
    pub body: E,
    pub language: LanguageController<E, S>,
    pub tab_groups: Vec<TabGroupController<E>>,
    pub chat: Option<PanelToggleController<E>>,
    pub viewport: ViewportObserver<E>,
    pub cards: LocationCards<E>,
    pub nav: NavMenuController<E>,
    pub fade: PageFadeIn,
}

impl<E: UiElement, S: PreferenceStore> Site<E, S> {
    /// Build and initialize every controller. `None` if the page has no body.
    pub fn build<D>(document: &D, store: S, config: SiteConfig) -> Option<Self>
    where
        D: UiDocument<Element = E>,
    {
        let body = document.body()?;
        let selectors = &config.selectors;

        let language = LanguageController::new(
            body.clone(),
            document.query_all(&selectors.language_button),
            store,
            config.storage_key.clone(),
        );
        language.initialize();

        let tab_groups = discover_tab_groups(document, selectors);
        for group in &tab_groups {
            group.initialize();
        }

        let chat = match (
            document.query(&selectors.chat_toggle),
            document.query(&selectors.chat_window),
        ) {
            (Some(toggle), Some(panel)) => {
                Some(PanelToggleController::new(toggle, panel, config.chat.clone()))
            }
            _ => {
                log::debug!("No chat toggle/window on this page");
                None
            }
        };

        let viewport = ViewportObserver::new(config.reveal_threshold);
        viewport.watch(document.query_all(&selectors.animated));

        let cards = LocationCards::new(document.query_all(&selectors.location_card));
        let nav = NavMenuController::new(document.query(&selectors.nav), config.mobile_breakpoint_px);
        let fade = PageFadeIn::new(config.fade_in_delay_ms, config.fade_in_transition());

        log::info!(
            "Site ready: language={}, tab groups={}, chat={}, animated={}, cards={}",
            language.active(),
            tab_groups.len(),
            chat.is_some(),
            viewport.watched_count(),
            cards.cards().len()
        );

        Some(Self {
            config,
            body,
            language,
            tab_groups,
            chat,
            viewport,
            cards,
            nav,
            fade,
        })
    }

    pub fn switch_language(&self, code: &str) -> bool {
        self.language.select_code(code)
    }

    /// Activate a tab of the first group on the page.
    pub fn open_tab(&self, index: usize) -> bool {
        self.tab_groups
            .first()
            .is_some_and(|group| group.activate(index))
    }

    pub fn toggle_mobile_menu(&self) -> bool {
        self.nav.toggle()
    }

    pub fn chat_open(&self) -> bool {
        self.chat.as_ref().is_some_and(|chat| chat.is_open())
    }

    /// `(group, index)` of a tab button, if `target` is one.
    pub fn locate_tab(&self, target: &E) -> Option<(usize, usize)> {
        self.tab_groups
            .iter()
            .enumerate()
            .find_map(|(g, group)| group.index_of(target).map(|i| (g, i)))
    }

    /// Route a document keydown. Returns `true` when the default action must be suppressed.
    pub fn handle_key(&self, key: &str, shift: bool, target: Option<&E>) -> bool {
        let focused_tab = target.and_then(|t| self.locate_tab(t));
        let Some(command) = keyboard::resolve(key, shift, self.chat_open(), focused_tab) else {
            return false;
        };
        match command {
            KeyCommand::ClosePanel => {
                if let Some(chat) = &self.chat {
                    chat.close();
                }
            }
            KeyCommand::CycleTab {
                group,
                from,
                direction,
            } => {
                self.tab_groups[group].advance(direction, from);
            }
        }
        command.prevents_default()
    }

    pub fn format_date(&self, date: &str) -> String {
        date_format::format_date(date, self.language.active())
    }

    pub fn snapshot(&self) -> UiSnapshot {
        UiSnapshot {
            language: self.language.active(),
            active_tab: self.tab_groups.first().and_then(|g| g.active_index()),
            chat_open: self.chat_open(),
            revealed: self.viewport.revealed_count(),
        }
    }
}

/// One group per container; without containers the whole page is one group.
///
/// A container only owns buttons and panels whose nearest container is
/// itself, so nested groups stay disjoint.
fn discover_tab_groups<D: UiDocument>(
    document: &D,
    selectors: &Selectors,
) -> Vec<TabGroupController<D::Element>> {
    let containers = document.query_all(&selectors.tab_group);
    if containers.is_empty() {
        let buttons = document.query_all(&selectors.tab_button);
        if buttons.is_empty() {
            return Vec::new();
        }
        return vec![TabGroupController::new(
            buttons,
            document.query_all(&selectors.tab_panel),
        )];
    }
    containers
        .iter()
        .map(|container| {
            let owned = |selector: &str| {
                container
                    .query_all(selector)
                    .into_iter()
                    .filter(|el| {
                        el.closest(&selectors.tab_group)
                            .is_some_and(|owner| owner.is_same(container))
                    })
                    .collect::<Vec<_>>()
            };
            TabGroupController::new(owned(&selectors.tab_button), owned(&selectors.tab_panel))
        })
        .collect()
}

//! Mobile navigation menu.

use crate::shared::dom::UiElement;

pub const MOBILE_ACTIVE_CLASS: &str = "mobile-active";

/// Mobile navigation menu. Inert when the page has no navigation element.
pub struct NavMenuController<E: UiElement> {
    nav: Option<E>,
    breakpoint_px: f64,
}

impl<E: UiElement> NavMenuController<E> {
    pub fn new(nav: Option<E>, breakpoint_px: f64) -> Self {
        Self { nav, breakpoint_px }
    }

    pub fn is_open(&self) -> bool {
        self.nav
            .as_ref()
            .is_some_and(|nav| nav.has_class(MOBILE_ACTIVE_CLASS))
    }

    /// Returns the new open state.
    pub fn toggle(&self) -> bool {
        let Some(nav) = &self.nav else {
            return false;
        };
        let open = !self.is_open();
        nav.toggle_class(MOBILE_ACTIVE_CLASS, open);
        open
    }

    /// Growing past the breakpoint closes the mobile menu.
    pub fn on_resize(&self, width_px: f64) {
        if width_px > self.breakpoint_px {
            if let Some(nav) = &self.nav {
                nav.remove_class(MOBILE_ACTIVE_CLASS);
            }
        }
    }
}

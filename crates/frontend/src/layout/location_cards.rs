//! Location cards: the whole card acts as its link, with a hover lift.
//!
//! The lift is a transient inline style and is not part of any state model.

use crate::shared::dom::UiElement;

pub const HOVER_TRANSFORM: &str = "translateY(-5px) scale(1.02)";
pub const REST_TRANSFORM: &str = "translateY(0) scale(1)";

pub struct LocationCards<E: UiElement> {
    cards: Vec<E>,
}

impl<E: UiElement> LocationCards<E> {
    pub fn new(cards: Vec<E>) -> Self {
        Self { cards }
    }

    pub fn cards(&self) -> &[E] {
        &self.cards
    }

    /// Where activating `card` navigates to; `None` if it has no link.
    pub fn destination(&self, card: &E) -> Option<String> {
        card.link_href()
    }

    pub fn hover(&self, card: &E, entered: bool) {
        let transform = if entered {
            HOVER_TRANSFORM
        } else {
            REST_TRANSFORM
        };
        card.set_style("transform", transform);
    }
}

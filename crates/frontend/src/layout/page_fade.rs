//! Initial page paint: the body starts hidden, then fades in.

use crate::shared::dom::UiElement;

pub struct PageFadeIn {
    pub delay_ms: u32,
    transition: String,
}

impl PageFadeIn {
    pub fn new(delay_ms: u32, transition: String) -> Self {
        Self {
            delay_ms,
            transition,
        }
    }

    pub fn hide<E: UiElement>(&self, body: &E) {
        body.set_style("opacity", "0");
    }

    pub fn show<E: UiElement>(&self, body: &E) {
        body.set_style("transition", &self.transition);
        body.set_style("opacity", "1");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::dom::fake::FakeElement;

    #[test]
    fn test_hide_then_show() {
        let body = FakeElement::new();
        let fade = PageFadeIn::new(100, "opacity 0.5s ease-in".to_string());
        fade.hide(&body);
        assert_eq!(body.style("opacity").as_deref(), Some("0"));
        assert_eq!(body.style("transition"), None);
        fade.show(&body);
        assert_eq!(body.style("opacity").as_deref(), Some("1"));
        assert_eq!(body.style("transition").as_deref(), Some("opacity 0.5s ease-in"));
    }
}

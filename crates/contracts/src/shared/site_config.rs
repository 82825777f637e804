//! Page configuration.
//!
//! Defaults match the site markup. A page may override any field with a
//! JSON block in `<script id="site-config">`.

use anyhow::{ensure, Context};
use serde::{Deserialize, Serialize};

/// Page-wide settings consumed by the composition root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// localStorage key holding the active language code
    pub storage_key: String,
    pub selectors: Selectors,
    pub chat: ChatConfig,
    /// Fraction of an element that must be visible before it is revealed
    pub reveal_threshold: f64,
    /// Viewport width above which the mobile menu is closed
    pub mobile_breakpoint_px: f64,
    pub fade_in_delay_ms: u32,
    pub fade_in_duration_ms: u32,
}

/// CSS selectors the controllers bind to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub language_button: String,
    pub tab_group: String,
    pub tab_button: String,
    pub tab_panel: String,
    pub chat_toggle: String,
    pub chat_window: String,
    pub anchor_link: String,
    pub animated: String,
    pub location_card: String,
    pub nav: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    pub open_label: String,
    pub closed_label: String,
    pub message_class: String,
    pub placeholder_messages: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            storage_key: "language".to_string(),
            selectors: Selectors::default(),
            chat: ChatConfig::default(),
            reveal_threshold: 0.1,
            mobile_breakpoint_px: 768.0,
            fade_in_delay_ms: 100,
            fade_in_duration_ms: 500,
        }
    }
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            language_button: ".lang-btn".to_string(),
            tab_group: "[data-tab-group]".to_string(),
            tab_button: ".tab-btn".to_string(),
            tab_panel: ".tab-content".to_string(),
            chat_toggle: ".chat-toggle".to_string(),
            chat_window: ".chat-window".to_string(),
            anchor_link: "a[href^=\"#\"]".to_string(),
            animated: ".section, .location-card, .tab-content".to_string(),
            location_card: ".location-card".to_string(),
            nav: ".nav".to_string(),
        }
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            open_label: "Закрыть чат / Close Chat".to_string(),
            closed_label: "Чат для публики / Public Chat".to_string(),
            message_class: "chat-message".to_string(),
            placeholder_messages: vec![
                "Добро пожаловать в чат Рок Кафе!".to_string(),
                "Welcome to Rock Cafe chat!".to_string(),
                "Здесь можно обсудить воспоминания о кафе".to_string(),
                "Share your memories about the cafe here".to_string(),
            ],
        }
    }
}

impl SiteConfig {
    /// Parse a (possibly partial) JSON override; missing fields keep their defaults.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let config: SiteConfig =
            serde_json::from_str(json).context("site config is not valid JSON")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(
            (0.0..=1.0).contains(&self.reveal_threshold),
            "reveal_threshold must be within [0, 1], got {}",
            self.reveal_threshold
        );
        ensure!(
            self.mobile_breakpoint_px > 0.0,
            "mobile_breakpoint_px must be positive, got {}",
            self.mobile_breakpoint_px
        );
        ensure!(!self.storage_key.is_empty(), "storage_key must not be empty");
        Ok(())
    }

    /// CSS `transition` value for the initial page fade-in
    pub fn fade_in_transition(&self) -> String {
        format!(
            "opacity {}s ease-in",
            f64::from(self.fade_in_duration_ms) / 1000.0
        )
    }
}

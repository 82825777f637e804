use crate::enums::language::Language;
use serde::{Deserialize, Serialize};

/// Read-only view of the page state handed to external scripts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiSnapshot {
    pub language: Language,
    /// Active index of the first tab group, if the page has one
    pub active_tab: Option<usize>,
    pub chat_open: bool,
    /// Number of elements already revealed on scroll
    pub revealed: usize,
}

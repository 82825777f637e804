use serde::{Deserialize, Serialize};
use std::fmt;

/// Site languages
///
/// Exactly one is active at a time. `Ru` is the primary language, used when
/// the stored value is missing or corrupt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Ru,
    En,
}

impl Language {
    pub const PRIMARY: Language = Language::Ru;

    /// Language code (the `data-lang` value and the persisted preference)
    pub fn code(&self) -> &'static str {
        match self {
            Language::Ru => "ru",
            Language::En => "en",
        }
    }

    /// Class on the root element that styles use to show the matching copy
    pub fn marker_class(&self) -> &'static str {
        match self {
            Language::Ru => "lang-ru",
            Language::En => "lang-en",
        }
    }

    pub fn all() -> [Language; 2] {
        [Language::Ru, Language::En]
    }

    /// Parse a language code. Unknown codes are rejected.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ru" => Some(Language::Ru),
            "en" => Some(Language::En),
            _ => None,
        }
    }

    /// Resolve a persisted value: absent or unrecognized falls back to the primary language.
    pub fn from_stored(value: Option<&str>) -> Self {
        value.and_then(Self::from_code).unwrap_or(Self::PRIMARY)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

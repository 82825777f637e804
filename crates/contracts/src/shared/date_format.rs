//! Date formatting for the active language.
//!
//! Dates use the long form of the language's locale: `15 марта 2024 г.` / `March 15, 2024`.

use crate::enums::language::Language;
use chrono::{Datelike, NaiveDate};

const MONTHS_RU: [&str; 12] = [
    "января", "февраля", "марта", "апреля", "мая", "июня", "июля", "августа", "сентября",
    "октября", "ноября", "декабря",
];

const MONTHS_EN: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

/// Format an ISO date (`2024-03-15` or `2024-03-15T14:02:26Z`) for `language`.
///
/// Input that does not parse is returned unchanged.
pub fn format_date(date_str: &str, language: Language) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str).trim();
    let Ok(date) = NaiveDate::parse_from_str(date_part, "%Y-%m-%d") else {
        return date_str.to_string();
    };
    let month = date.month0() as usize;
    match language {
        Language::Ru => format!("{} {} {} г.", date.day(), MONTHS_RU[month], date.year()),
        Language::En => format!("{} {}, {}", MONTHS_EN[month], date.day(), date.year()),
    }
}

pub mod app;
pub mod app_shell;
pub mod layout;
pub mod shared;

use app_shell::with_site;
use contracts::shared::date_format;
use wasm_bindgen::prelude::*;

/// Page API: switch the site language (`"ru"` / `"en"`). Unknown codes are ignored.
#[wasm_bindgen(js_name = switchLanguage)]
pub fn switch_language(lang: &str) -> bool {
    with_site(|site| site.switch_language(lang)).unwrap_or(false)
}

/// Page API: activate a tab of the first tab group.
///
/// Takes the raw JS number so that `undefined`, `NaN` and fractions are
/// rejected instead of truncated. Out-of-range indices are ignored.
#[wasm_bindgen(js_name = openTab)]
pub fn open_tab(index: f64) -> bool {
    let Some(index) = tab_index(index) else {
        log::debug!("openTab: invalid index {}", index);
        return false;
    };
    with_site(|site| site.open_tab(index)).unwrap_or(false)
}

/// A JS number that is a valid array index, as `usize`.
fn tab_index(value: f64) -> Option<usize> {
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 || value > u32::MAX as f64 {
        return None;
    }
    Some(value as usize)
}

#[wasm_bindgen(js_name = toggleMobileMenu)]
pub fn toggle_mobile_menu() -> bool {
    with_site(|site| site.toggle_mobile_menu()).unwrap_or(false)
}

/// Format an ISO date in the active language.
#[wasm_bindgen(js_name = formatDate)]
pub fn format_date(date: &str) -> String {
    let language = with_site(|site| site.language.active()).unwrap_or_default();
    date_format::format_date(date, language)
}

/// `{ language, activeTab, chatOpen, revealed }`, or `null` before mount.
#[wasm_bindgen(js_name = uiState)]
pub fn ui_state() -> JsValue {
    with_site(|site| site.snapshot())
        .and_then(|snapshot| serde_wasm_bindgen::to_value(&snapshot).ok())
        .unwrap_or(JsValue::NULL)
}

#[wasm_bindgen(start)]
pub fn start() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    app_shell::run();
}

pub mod date_format;
pub mod site_config;
pub mod ui_snapshot;

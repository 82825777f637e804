pub mod enums;
pub mod shared;

pub use enums::language::Language;
pub use enums::panel_state::PanelState;
pub use enums::tab_direction::TabDirection;
pub use shared::site_config::SiteConfig;
pub use shared::ui_snapshot::UiSnapshot;

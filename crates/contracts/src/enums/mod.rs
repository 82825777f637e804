pub mod language;
pub mod panel_state;
pub mod tab_direction;

pub mod location_cards;
pub mod nav_menu;
pub mod page_fade;

pub mod chat;
pub mod dom;
pub mod events;
pub mod keyboard;
pub mod language;
pub mod scroll;
pub mod tabs;
pub mod viewport;

//! Widgets composing the terminal UI.

pub mod console;
pub mod header;
pub mod map;
pub mod unit_info;
pub mod village_menu;

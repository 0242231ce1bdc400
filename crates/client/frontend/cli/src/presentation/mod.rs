//! Rendering: terminal setup, layout, and widgets.

pub mod terminal;
pub mod ui;
pub mod widgets;

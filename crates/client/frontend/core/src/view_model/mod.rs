//! Presentation-optimized views built from a session snapshot.
//!
//! Views are rebuilt wholesale whenever the snapshot changes; they carry no
//! state of their own.
mod map;
mod panels;
mod village;

pub use map::{MapView, OccupantView, TileCell};
pub use panels::{ResourceView, UnitInfoView};
pub use village::{ConstructionOption, construction_options};

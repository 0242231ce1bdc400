//! Cross-frontend primitives for presenting the game.
//!
//! Houses message logging, event handling, and view-model types that both the
//! terminal client and future graphical clients can reuse.
pub mod config;
pub mod event;
pub mod frontend;
pub mod message;
pub mod view_model;

pub use config::FrontendConfig;
pub use event::{EventConsumer, EventImpact};
pub use frontend::Frontend;
pub use message::{MessageEntry, MessageLevel, MessageLog};
pub use view_model::{
    ConstructionOption, MapView, OccupantView, ResourceView, TileCell, UnitInfoView,
    construction_options,
};

//! Terminal frontend: ratatui rendering and crossterm input over the
//! session runtime.
mod app;
pub mod config;
mod event;
mod input;
pub mod logging;
mod presentation;
mod state;

pub use app::CliFrontend;
pub use config::CliConfig;

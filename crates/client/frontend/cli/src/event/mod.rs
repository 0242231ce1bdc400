//! Event handling for the terminal frontend.
//!
//! The event loop multiplexes session events, terminal input, and redraw
//! ticks; the consumer turns session events into console messages.

mod consumer;
mod r#loop;

pub use consumer::CliEventConsumer;
pub use r#loop::EventLoop;

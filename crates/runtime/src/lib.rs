//! Client session runtime.
//!
//! Owns the tactical grid engine plus session metadata (resources, turn,
//! submission state) behind a single worker task. Frontends interact through
//! a cloneable [`RuntimeHandle`]: commands go in over an mpsc channel, and
//! [`GameEvent`]s come back over a broadcast channel. The worker is the one
//! logical writer; it talks to the external program, then replaces engine
//! state wholesale from the fetched accounts.
mod config;
mod error;
mod events;
mod handle;
pub mod mapgen;
mod snapshot;
mod worker;

pub use config::RuntimeConfig;
pub use error::RuntimeError;
pub use events::GameEvent;
pub use handle::RuntimeHandle;
pub use snapshot::{SessionSnapshot, SubmissionState};
pub use worker::Runtime;

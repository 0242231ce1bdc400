//! Trait describing a runnable client front-end.
use anyhow::Result;
use async_trait::async_trait;
use runtime::RuntimeHandle;

/// Frontend abstraction for UI layers.
///
/// Frontends communicate with the session via [`RuntimeHandle`]:
/// - subscribe to events,
/// - report tile clicks and turn ends,
/// - query the current snapshot.
///
/// Frontends do NOT own the runtime; they receive a handle for communication
/// only.
#[async_trait]
pub trait Frontend: Send {
    /// Run the frontend event loop. Blocks until the user quits.
    async fn run(&mut self, handle: RuntimeHandle) -> Result<()>;
}

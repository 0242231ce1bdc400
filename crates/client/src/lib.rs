//! Top-level client container wiring the session runtime to a frontend.
//!
//! ```text
//! Client
//!   ├─→ Runtime   (session worker: engine, program calls, events)
//!   └─→ Frontend  (UI layer, talks to the worker via RuntimeHandle)
//! ```
//!
//! The frontend never owns the runtime; it receives a [`RuntimeHandle`] and
//! observes state through snapshots and events.

mod builder;

pub use builder::ClientBuilder;
pub use client_frontend_core::Frontend;

use anyhow::Result;
use runtime::RuntimeHandle;

/// Composition root: owns the runtime worker and the frontend.
pub struct Client {
    runtime: runtime::Runtime,
    frontend: Box<dyn Frontend>,
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Run until the frontend exits.
    ///
    /// The runtime worker runs in a background task; the frontend blocks
    /// this future. On frontend exit the worker is aborted.
    pub async fn run(self) -> Result<()> {
        let mut runtime = self.runtime;
        let handle: RuntimeHandle = runtime.handle();

        let runtime_task = tokio::spawn(async move {
            if let Err(error) = runtime.run().await {
                tracing::error!(%error, "runtime worker failed");
            }
        });

        let mut frontend = self.frontend;
        let frontend_result = frontend.run(handle).await;

        runtime_task.abort();
        let _ = runtime_task.await;

        frontend_result
    }
}

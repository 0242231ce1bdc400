//! Client builder with fail-fast validation.

use anyhow::{Context, Result};

use crate::{Client, Frontend};

/// Builder for [`Client`]. Runtime and frontend are both required.
#[derive(Default)]
pub struct ClientBuilder {
    runtime: Option<runtime::Runtime>,
    frontend: Option<Box<dyn Frontend>>,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the session runtime (required).
    pub fn runtime(mut self, runtime: runtime::Runtime) -> Self {
        self.runtime = Some(runtime);
        self
    }

    /// Set the frontend (required).
    pub fn frontend(mut self, frontend: impl Frontend + 'static) -> Self {
        self.frontend = Some(Box::new(frontend));
        self
    }

    pub fn build(self) -> Result<Client> {
        let runtime = self
            .runtime
            .context("runtime is required; use .runtime() to set it")?;
        let frontend = self
            .frontend
            .context("frontend is required; use .frontend() to set it")?;

        Ok(Client { runtime, frontend })
    }
}

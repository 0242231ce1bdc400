//! Terminal frontend wiring: terminal lifecycle around the event loop.
use anyhow::Result;
use async_trait::async_trait;

use runtime::RuntimeHandle;

use crate::config::CliConfig;
use crate::event::{CliEventConsumer, EventLoop};
use crate::presentation::terminal;
use client_frontend_core::{Frontend, FrontendConfig, MessageLog};

pub struct CliFrontend {
    frontend_config: FrontendConfig,
    cli_config: CliConfig,
}

impl CliFrontend {
    pub fn new(frontend_config: FrontendConfig, cli_config: CliConfig) -> Self {
        Self {
            frontend_config,
            cli_config,
        }
    }
}

#[async_trait]
impl Frontend for CliFrontend {
    async fn run(&mut self, handle: RuntimeHandle) -> Result<()> {
        // Snapshot before touching the terminal so startup errors still
        // print normally.
        let initial_snapshot = handle.snapshot().await?;

        let mut messages = MessageLog::new(self.frontend_config.message_capacity);
        messages.info(format!("Welcome, settler. Turn {}.", initial_snapshot.turn));
        let consumer = CliEventConsumer::new(messages);

        let event_loop = EventLoop::new(
            handle,
            consumer,
            initial_snapshot,
            self.cli_config.clone(),
        );

        let mut terminal = terminal::init()?;
        let _guard = terminal::TerminalGuard;

        let result = event_loop.run(&mut terminal).await;

        terminal::restore()?;
        tracing::info!("terminal frontend exiting");

        result.map(|_consumer| ())
    }
}

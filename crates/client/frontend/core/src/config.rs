//! Cross-frontend configuration.
use std::env;

/// Configuration shared by every frontend implementation.
#[derive(Clone, Debug)]
pub struct FrontendConfig {
    /// Console message buffer capacity.
    pub message_capacity: usize,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            message_capacity: 64,
        }
    }
}

impl FrontendConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `GRIDCIV_MESSAGE_CAPACITY` - console buffer size (default: 64)
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(capacity) = env::var("GRIDCIV_MESSAGE_CAPACITY")
            .ok()
            .and_then(|value| value.parse::<usize>().ok())
        {
            config.message_capacity = capacity.max(1);
        }
        config
    }
}

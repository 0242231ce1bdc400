//! Runtime configuration structures and loaders.
use std::env;

/// Configuration required to bootstrap a client session runtime.
#[derive(Clone, Debug)]
pub struct RuntimeConfig {
    /// Command queue size between frontend and worker.
    pub command_buffer: usize,
    /// Broadcast capacity for game events.
    pub event_capacity: usize,
    /// Create the game account (with a freshly generated map) when the
    /// program reports it missing.
    pub auto_initialize: bool,
    /// Seed for map generation; random when unset.
    pub map_seed: Option<u64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            command_buffer: 16,
            event_capacity: 64,
            auto_initialize: true,
            map_seed: None,
        }
    }
}

impl RuntimeConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `GRIDCIV_COMMAND_BUFFER` - command queue size (default: 16)
    /// - `GRIDCIV_EVENT_CAPACITY` - event broadcast capacity (default: 64)
    /// - `GRIDCIV_AUTO_INITIALIZE` - create a missing game account (default: true)
    /// - `GRIDCIV_MAP_SEED` - deterministic map seed (default: random)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(buffer) = read_env::<usize>("GRIDCIV_COMMAND_BUFFER") {
            config.command_buffer = buffer.max(1);
        }
        if let Some(capacity) = read_env::<usize>("GRIDCIV_EVENT_CAPACITY") {
            config.event_capacity = capacity.max(1);
        }
        if let Some(auto) = read_env::<bool>("GRIDCIV_AUTO_INITIALIZE") {
            config.auto_initialize = auto;
        }
        config.map_seed = read_env::<u64>("GRIDCIV_MAP_SEED");

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

//! CLI-specific configuration for the terminal UI.
use std::env;
use std::path::PathBuf;

/// Terminal UI configuration, separate from cross-frontend settings.
#[derive(Clone, Debug)]
pub struct CliConfig {
    /// Height of the console panel in lines (including borders).
    pub console_height: u16,
    /// Frame interval for redraw ticks, in milliseconds.
    pub frame_interval_ms: u64,
    /// Directory for tracing log files (stdout belongs to the TUI).
    pub log_dir: PathBuf,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            console_height: 8,
            frame_interval_ms: 33,
            log_dir: PathBuf::from("logs"),
        }
    }
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `GRIDCIV_CONSOLE_HEIGHT` - console panel height in lines (default: 8)
    /// - `GRIDCIV_FRAME_INTERVAL_MS` - redraw tick in milliseconds (default: 33)
    /// - `GRIDCIV_LOG_DIR` - log file directory (default: `logs`)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(height) = read_env::<u16>("GRIDCIV_CONSOLE_HEIGHT") {
            config.console_height = height.max(3);
        }
        if let Some(interval) = read_env::<u64>("GRIDCIV_FRAME_INTERVAL_MS") {
            config.frame_interval_ms = interval.max(10);
        }
        if let Ok(dir) = env::var("GRIDCIV_LOG_DIR") {
            config.log_dir = PathBuf::from(dir);
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

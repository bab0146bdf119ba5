use crate::error::CoreError;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::Level;

pub const CONFIG_FILE: &str = "duskswitch.toml";
pub const ENV_PREFIX: &str = "DUSKSWITCH_";

/// Runtime configuration. The theme is not part of it: every run starts light.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    /// Input poll timeout in milliseconds
    pub tick_rate_ms: u64,
    pub log_level: String,
    /// Logging is off unless a file is given; stdout belongs to the UI.
    pub log_file: Option<PathBuf>,
    pub mouse: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_rate_ms: 50,
            log_level: "info".to_string(),
            log_file: None,
            mouse: true,
        }
    }
}

impl Settings {
    /// Load defaults, then `duskswitch.toml` from the working directory, then
    /// `DUSKSWITCH_*` environment variables.
    pub fn new() -> Result<Self, CoreError> {
        Self::load_from(CONFIG_FILE)
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let settings = Self::figment(path.as_ref()).extract()?;
        Ok(settings)
    }

    fn figment(path: &Path) -> Figment {
        Figment::from(Serialized::defaults(Settings::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    pub fn log_level(&self) -> Result<Level, CoreError> {
        self.log_level
            .parse()
            .map_err(|_| CoreError::InvalidLogLevel(self.log_level.clone()))
    }
}

use thiserror::Error;

/// Errors from the configuration layer. Theme operations themselves never fail.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("failed to load settings: {0}")]
    Settings(#[from] figment::Error),

    #[error("invalid log level `{0}` (expected trace, debug, info, warn or error)")]
    InvalidLogLevel(String),
}

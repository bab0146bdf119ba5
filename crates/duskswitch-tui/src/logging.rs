use anyhow::{anyhow, Context, Result};
use duskswitch_core::settings::Settings;
use std::fs::OpenOptions;
use std::sync::Mutex;

/// Install the global subscriber. Without a `log_file` nothing is installed,
/// since the terminal is owned by the UI.
pub fn init(settings: &Settings) -> Result<()> {
    let Some(path) = settings.log_file.as_ref() else {
        return Ok(());
    };
    let level = settings.log_level()?;

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|err| anyhow!("failed to install log subscriber: {err}"))?;

    Ok(())
}

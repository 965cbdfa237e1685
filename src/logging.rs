use anyhow::{Context, Result, anyhow};
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing::Level;

/// Send `tracing` output to a file
///
/// The terminal belongs to the renderer while a program runs, so without a
/// log file no subscriber is installed and events are discarded.
pub fn init(log_file: Option<&Path>, level: Level) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {:?}", path))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(level)
        .try_init()
        .map_err(|err| anyhow!("Failed to install log subscriber: {err}"))
}

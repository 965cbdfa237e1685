use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::path::Path;

/// Read a JSON config, falling back to defaults when no path is given
///
/// Keys missing from the file keep their default values.
pub fn load_or_default<T>(path: Option<&Path>) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    let Some(path) = path else {
        return Ok(T::default());
    };

    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {:?}", path))?;
    serde_json::from_str(&json).with_context(|| format!("Failed to parse config {:?}", path))
}

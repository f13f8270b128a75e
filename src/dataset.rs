//! Reading and writing JSON dataset files.
//!
//! A dataset file is a single JSON document whose top level is an array of
//! objects. Shape violations are fatal before any translation begins.

use crate::engine::Record;
use crate::error::{Result, YadtError};
use serde_json::Value;
use std::path::Path;
use tracing::debug;

/// Load dataset records from a JSON file.
pub fn load_items(path: &Path) -> Result<Vec<Record>> {
    if !path.exists() {
        return Err(YadtError::FileNotFound(path.display().to_string()));
    }

    debug!("Loading dataset from {}", path.display());
    let contents = std::fs::read_to_string(path)?;
    let data: Value = serde_json::from_str(&contents)?;

    let items = match data {
        Value::Array(items) => items,
        _ => {
            return Err(YadtError::InvalidInput(
                "Input data must be a JSON array of objects".to_string(),
            ))
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(idx, item)| match item {
            Value::Object(record) => Ok(record),
            other => Err(YadtError::InvalidInput(format!(
                "Element {} is not a JSON object: {}",
                idx, other
            ))),
        })
        .collect()
}

/// Write dataset records as pretty-printed JSON, creating parent
/// directories as needed.
pub fn write_items(path: &Path, items: &[Record]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating directories for {}", parent.display());
            std::fs::create_dir_all(parent)?;
        }
    }

    debug!("Writing {} records to {}", items.len(), path.display());
    let json = serde_json::to_string_pretty(items)?;
    std::fs::write(path, json)?;
    Ok(())
}

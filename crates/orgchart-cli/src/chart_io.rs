//! Loading and saving charts and command scripts
//!
//! Files ending in `.yaml` or `.yml` are read as YAML; everything else as
//! JSON. Charts are always written as pretty JSON.

use orgchart_core::errors::{ExError, ExErrorKind};
use orgchart_core::{Chart, Command};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

pub fn load_chart(path: &Path) -> Result<Chart, ExError> {
    load(path)
}

pub fn load_script(path: &Path) -> Result<Vec<Command>, ExError> {
    load(path)
}

pub fn save_chart(path: &Path, chart: &Chart) -> Result<(), ExError> {
    let json = serde_json::to_string_pretty(chart).map_err(|e| {
        ExError::new(ExErrorKind::Serialization)
            .with_message(format!("Failed to encode chart: {}", e))
    })?;
    fs::write(path, json + "\n").map_err(|e| io_error(path, e))
}

fn load<T: DeserializeOwned>(path: &Path) -> Result<T, ExError> {
    let content = fs::read_to_string(path).map_err(|e| io_error(path, e))?;

    let parsed = if is_yaml(path) {
        serde_yaml::from_str(&content).map_err(|e| e.to_string())
    } else {
        serde_json::from_str(&content).map_err(|e| e.to_string())
    };

    parsed.map_err(|message| {
        ExError::new(ExErrorKind::Serialization)
            .with_message(format!("Failed to parse {}: {}", path.display(), message))
    })
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yaml") | Some("yml")
    )
}

fn io_error(path: &Path, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io).with_message(format!("{}: {}", path.display(), err))
}

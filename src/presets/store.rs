//! Preset store document.
//!
//! The durable form of the preset collection: a JSON array of
//! `{ name, localeKey?, blocks }` entries. Entries carrying a `localeKey`
//! load as built-ins; the rest as user presets. Saving writes the user
//! subset only, replacing the file wholesale so a failed write never leaves
//! a half-updated store.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{MapartError, Result};
use crate::selection::SelectionState;

use super::Preset;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PresetDoc {
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    locale_key: Option<String>,
    blocks: SelectionState,
}

/// Load presets from a store file. A missing file is an empty store.
pub fn load_presets(path: &Path) -> Result<Vec<Preset>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = std::fs::read_to_string(path).map_err(|e| MapartError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read preset store: {}", e),
    })?;

    parse_presets(&content)
}

/// Parse a preset store document.
pub fn parse_presets(source: &str) -> Result<Vec<Preset>> {
    let docs: Vec<PresetDoc> = serde_json::from_str(source).map_err(|e| MapartError::Parse {
        message: format!("Invalid preset store: {}", e),
        help: Some("Expected a JSON array of { name, blocks } entries".to_string()),
    })?;

    Ok(docs
        .into_iter()
        .map(|doc| match doc.locale_key {
            Some(key) => Preset::built_in(doc.name, key, doc.blocks),
            None => Preset::user(doc.name, doc.blocks),
        })
        .collect())
}

/// Write the user subset of a preset collection to a store file.
pub fn save_presets<'a>(
    path: &Path,
    presets: impl IntoIterator<Item = &'a Preset>,
) -> Result<()> {
    let docs: Vec<PresetDoc> = presets
        .into_iter()
        .filter(|p| !p.is_built_in())
        .map(|p| PresetDoc {
            name: p.name().to_string(),
            locale_key: None,
            blocks: p.selection().clone(),
        })
        .collect();

    let content = serde_json::to_string_pretty(&docs).map_err(|e| MapartError::Parse {
        message: format!("Failed to serialize preset store: {}", e),
        help: None,
    })?;

    std::fs::write(path, content).map_err(|e| MapartError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write preset store: {}", e),
    })
}

//! Supported-versions document parsing.
//!
//! Parses the supported-versions JSON (`versions.json`) into a
//! `VersionCatalog`. The document is keyed by a numeric index that defines
//! the oldest-to-newest ordering:
//!
//! ```json
//! { "0": { "MCVersion": "1.12.2" }, "1": { "MCVersion": "1.16.5" } }
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::{MapartError, Result};
use crate::types::VersionCatalog;

#[derive(Debug, Deserialize)]
struct VersionDoc {
    #[serde(rename = "MCVersion")]
    mc_version: String,
}

/// Load the supported-versions document from a file.
pub fn load_versions(path: &Path) -> Result<VersionCatalog> {
    let content = std::fs::read_to_string(path).map_err(|e| MapartError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read versions document: {}", e),
    })?;

    parse_versions(&content)
}

/// Parse the supported-versions document from a JSON string.
pub fn parse_versions(source: &str) -> Result<VersionCatalog> {
    let doc: HashMap<String, VersionDoc> =
        serde_json::from_str(source).map_err(|e| MapartError::Parse {
            message: format!("Invalid versions document: {}", e),
            help: Some("Expected a JSON object keyed by ordering index".to_string()),
        })?;

    let mut entries: Vec<(u64, String)> = doc
        .into_iter()
        .map(|(key, v)| {
            let index = key.parse::<u64>().map_err(|_| MapartError::Parse {
                message: format!("Version index '{}' is not a number", key),
                help: Some("Index keys define the oldest-to-newest order".to_string()),
            })?;
            Ok((index, v.mc_version))
        })
        .collect::<Result<_>>()?;
    entries.sort_by_key(|(index, _)| *index);

    Ok(VersionCatalog::new(
        entries.into_iter().map(|(_, v)| v).collect(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_orders_by_index() {
        // Object key order is not trusted; the index is.
        let doc = r#"{
            "2": { "MCVersion": "1.16.5" },
            "0": { "MCVersion": "1.12.2" },
            "1": { "MCVersion": "1.13.2" }
        }"#;

        let catalog = parse_versions(doc).unwrap();
        let versions: Vec<&str> = catalog.iter().collect();
        assert_eq!(versions, vec!["1.12.2", "1.13.2", "1.16.5"]);
        assert_eq!(catalog.latest(), Some("1.16.5"));
    }

    #[test]
    fn test_parse_rejects_non_numeric_index() {
        let doc = r#"{ "first": { "MCVersion": "1.12.2" } }"#;
        let err = parse_versions(doc).unwrap_err();
        assert!(matches!(err, MapartError::Parse { .. }));
    }

    #[test]
    fn test_parse_empty_document() {
        let catalog = parse_versions("{}").unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.latest(), None);
    }
}

//! Colours document parsing.
//!
//! Parses the colour-set catalog JSON (`colours.json`) into a
//! `PaletteCatalog`. The document is keyed by colour-set id; block maps are
//! keyed by block id. Ids are kept as strings but displayed in numeric
//! order, matching the source document's numbering.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::{MapartError, Result};
use crate::types::{
    id_sort_key, BlockVariant, ColourName, ColourSet, PaletteCatalog, ToneSet, VariantTraits,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ColourSetDoc {
    #[serde(default)]
    colour_name: Option<String>,
    #[serde(default)]
    locale_key: Option<String>,
    #[serde(rename = "tonesRGB")]
    tones_rgb: ToneSet,
    blocks: HashMap<String, BlockDoc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BlockDoc {
    display_name: String,
    valid_versions: HashMap<String, VariantTraits>,
}

/// Load the colours document from a file.
pub fn load_colours(path: &Path) -> Result<PaletteCatalog> {
    let content = std::fs::read_to_string(path).map_err(|e| MapartError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read colours document: {}", e),
    })?;

    parse_colours(&content)
}

/// Parse the colours document from a JSON string.
pub fn parse_colours(source: &str) -> Result<PaletteCatalog> {
    let doc: HashMap<String, ColourSetDoc> =
        serde_json::from_str(source).map_err(|e| MapartError::Parse {
            message: format!("Invalid colours document: {}", e),
            help: Some("Expected a JSON object keyed by colour-set id".to_string()),
        })?;

    let mut sets: Vec<ColourSet> = doc
        .into_iter()
        .map(|(id, set)| build_set(id, set))
        .collect::<Result<_>>()?;
    sets.sort_by_key(|s| id_sort_key(&s.id));

    Ok(PaletteCatalog::new(sets))
}

fn build_set(id: String, doc: ColourSetDoc) -> Result<ColourSet> {
    let name = match (doc.colour_name, doc.locale_key) {
        (Some(literal), _) => ColourName::Literal(literal),
        (None, Some(key)) => ColourName::LocaleKey(key),
        (None, None) => {
            return Err(MapartError::Parse {
                message: format!("Colour set '{}' has neither colourName nor localeKey", id),
                help: None,
            })
        }
    };

    let mut blocks: Vec<BlockVariant> = doc
        .blocks
        .into_iter()
        .map(|(block_id, b)| BlockVariant::new(block_id, b.display_name, b.valid_versions))
        .collect();
    blocks.sort_by_key(|b| id_sort_key(&b.id));

    Ok(ColourSet::new(id, name, doc.tones_rgb, blocks))
}

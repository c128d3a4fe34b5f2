//! Shareable selection tokens.
//!
//! A share token is a compact, copy-pasteable encoding of a selection:
//! `mapart1:` followed by `set.block` pairs joined with `;`, sorted by
//! colour-set id. Decoding is the exact inverse; a token that decodes must
//! reconstruct an equal selection.

use crate::error::{MapartError, Result};
use crate::selection::{BlockChoice, SelectionState};

/// Token format marker, bumped if the payload shape ever changes.
const TOKEN_PREFIX: &str = "mapart1:";

/// Encode a selection as a share token.
pub fn encode(selection: &SelectionState) -> String {
    let pairs: Vec<String> = selection
        .sorted_entries()
        .iter()
        .map(|(set, block)| format!("{}.{}", set, block))
        .collect();

    format!("{}{}", TOKEN_PREFIX, pairs.join(";"))
}

/// Decode a share token back into a selection.
pub fn decode(token: &str) -> Result<SelectionState> {
    let payload = token
        .trim()
        .strip_prefix(TOKEN_PREFIX)
        .ok_or_else(|| MapartError::MalformedShareToken {
            message: format!("missing '{}' prefix", TOKEN_PREFIX),
            help: Some("Share tokens look like mapart1:0.1;5.0".to_string()),
        })?;

    let mut selection = SelectionState::new();
    if payload.is_empty() {
        return Ok(selection);
    }

    for pair in payload.split(';') {
        let (set, block) = pair.split_once('.').ok_or_else(|| {
            MapartError::MalformedShareToken {
                message: format!("entry '{}' is not a set.block pair", pair),
                help: None,
            }
        })?;

        if set.is_empty() || block.is_empty() {
            return Err(MapartError::MalformedShareToken {
                message: format!("entry '{}' has an empty id", pair),
                help: None,
            });
        }

        if matches!(selection.get(set), BlockChoice::Selected(_)) {
            return Err(MapartError::MalformedShareToken {
                message: format!("colour set '{}' is listed twice", set),
                help: None,
            });
        }

        selection.insert_unchecked(set.to_string(), block.to_string());
    }

    Ok(selection)
}

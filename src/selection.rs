//! Live block selection state.
//!
//! One selection state per editing session: colour-set id -> chosen block
//! variant. "No selection" is an explicit [`BlockChoice::None`] rather than
//! a reserved id, so real block ids can never collide with it. Writes are
//! validated against the eligible view before the map is touched, which
//! makes every mutation all-or-nothing.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{MapartError, Result};
use crate::resolve::EligibleCatalog;
use crate::types::id_sort_key;

/// The chosen block for one colour set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockChoice {
    Selected(String),
    None,
}

impl BlockChoice {
    /// The chosen block id, if any.
    pub fn block_id(&self) -> Option<&str> {
        match self {
            BlockChoice::Selected(id) => Some(id),
            BlockChoice::None => None,
        }
    }
}

/// Mapping from colour-set id to chosen block variant.
///
/// A plain value: cloning it snapshots the whole selection, which is how
/// presets capture and restore it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionState {
    chosen: HashMap<String, String>,
}

impl SelectionState {
    /// An empty selection: every colour set reads as [`BlockChoice::None`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a choice for a colour set.
    ///
    /// Succeeds iff the choice is `None` or names a block present in the
    /// eligible view for that set; otherwise fails with
    /// `IneligibleSelection` and leaves the state unchanged. Staleness of a
    /// previously valid entry never retroactively invalidates it.
    pub fn select(
        &mut self,
        colour_set_id: &str,
        choice: BlockChoice,
        eligible: &EligibleCatalog<'_>,
    ) -> Result<()> {
        match choice {
            BlockChoice::None => {
                self.chosen.remove(colour_set_id);
                Ok(())
            }
            BlockChoice::Selected(block_id) => {
                if !eligible.allows(colour_set_id, &block_id) {
                    return Err(MapartError::IneligibleSelection {
                        colour_set: colour_set_id.to_string(),
                        block: block_id,
                        version: eligible.version().to_string(),
                    });
                }
                self.chosen.insert(colour_set_id.to_string(), block_id);
                Ok(())
            }
        }
    }

    /// Read the choice for a colour set. Total: absent entries read as
    /// [`BlockChoice::None`].
    pub fn get(&self, colour_set_id: &str) -> BlockChoice {
        match self.chosen.get(colour_set_id) {
            Some(id) => BlockChoice::Selected(id.clone()),
            None => BlockChoice::None,
        }
    }

    /// Drop the choice for a colour set. Always succeeds.
    pub fn clear(&mut self, colour_set_id: &str) {
        self.chosen.remove(colour_set_id);
    }

    /// Iterate the non-`None` entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.chosen.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Non-`None` entries sorted by colour-set id (numeric ids first), for
    /// deterministic share tokens and exports.
    pub fn sorted_entries(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<(&str, &str)> = self.iter().collect();
        entries.sort_by_key(|(id, _)| id_sort_key(id));
        entries
    }

    /// Number of colour sets with a real selection.
    pub fn len(&self) -> usize {
        self.chosen.len()
    }

    /// Check if no colour set has a selection.
    pub fn is_empty(&self) -> bool {
        self.chosen.is_empty()
    }

    pub(crate) fn insert_unchecked(&mut self, colour_set_id: String, block_id: String) {
        self.chosen.insert(colour_set_id, block_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::resolve;
    use crate::types::{
        BlockVariant, Colour, ColourName, ColourSet, PaletteCatalog, ToneSet, VariantTraits,
    };

    fn versions(keys: &[&str]) -> HashMap<String, VariantTraits> {
        keys.iter()
            .map(|k| (k.to_string(), VariantTraits::default()))
            .collect()
    }

    fn catalog() -> PaletteCatalog {
        let tones = ToneSet {
            dark: Colour::rgb(90, 90, 90),
            normal: Colour::rgb(128, 128, 128),
            light: Colour::rgb(170, 170, 170),
            unobtainable: Colour::rgb(50, 50, 50),
        };
        PaletteCatalog::new(vec![ColourSet::new(
            "0",
            ColourName::Literal("Grass".to_string()),
            tones,
            vec![
                BlockVariant::new("0", "Grass Block", versions(&["1.12", "1.16"])),
                BlockVariant::new("1", "Slime Block", versions(&["1.16"])),
            ],
        )])
    }

    #[test]
    fn test_select_then_get_round_trips() {
        let catalog = catalog();
        let eligible = resolve(&catalog, "1.16");
        let mut state = SelectionState::new();

        state
            .select("0", BlockChoice::Selected("1".to_string()), &eligible)
            .unwrap();
        assert_eq!(state.get("0"), BlockChoice::Selected("1".to_string()));

        state.select("0", BlockChoice::None, &eligible).unwrap();
        assert_eq!(state.get("0"), BlockChoice::None);
    }

    #[test]
    fn test_ineligible_selection_leaves_state_unchanged() {
        let catalog = catalog();
        let old = resolve(&catalog, "1.12");
        let mut state = SelectionState::new();
        state
            .select("0", BlockChoice::Selected("0".to_string()), &old)
            .unwrap();

        // Slime Block is not eligible under 1.12.
        let err = state
            .select("0", BlockChoice::Selected("1".to_string()), &old)
            .unwrap_err();
        assert!(matches!(err, MapartError::IneligibleSelection { .. }));
        assert_eq!(state.get("0"), BlockChoice::Selected("0".to_string()));
    }

    #[test]
    fn test_select_unknown_set_is_ineligible() {
        let catalog = catalog();
        let eligible = resolve(&catalog, "1.16");
        let mut state = SelectionState::new();
        let err = state
            .select("7", BlockChoice::Selected("0".to_string()), &eligible)
            .unwrap_err();
        assert!(matches!(err, MapartError::IneligibleSelection { .. }));
        assert!(state.is_empty());
    }

    #[test]
    fn test_get_is_total() {
        let state = SelectionState::new();
        assert_eq!(state.get("42"), BlockChoice::None);
    }

    #[test]
    fn test_clear_always_succeeds() {
        let mut state = SelectionState::new();
        state.clear("0");
        assert!(state.is_empty());

        let catalog = catalog();
        let eligible = resolve(&catalog, "1.16");
        state
            .select("0", BlockChoice::Selected("0".to_string()), &eligible)
            .unwrap();
        state.clear("0");
        assert_eq!(state.get("0"), BlockChoice::None);
    }

    #[test]
    fn test_sorted_entries_numeric_order() {
        let mut state = SelectionState::new();
        state.insert_unchecked("10".to_string(), "0".to_string());
        state.insert_unchecked("2".to_string(), "1".to_string());
        state.insert_unchecked("0".to_string(), "3".to_string());

        let ids: Vec<&str> = state.sorted_entries().iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, vec!["0", "2", "10"]);
    }

    #[test]
    fn test_serde_round_trip() {
        let mut state = SelectionState::new();
        state.insert_unchecked("0".to_string(), "2".to_string());

        let json = serde_json::to_string(&state).unwrap();
        let back: SelectionState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}

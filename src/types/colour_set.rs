//! Colour set and block variant catalog types.
//!
//! A colour set is one palette entry of the map-art colour table: four tone
//! triples plus the placeable block variants that realize the colour. Block
//! variant ids are only unique within their owning set. The catalog is built
//! once from the colours document and read-only afterwards, except for
//! custom variants appended by the host session.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{MapartError, Result};

use super::Colour;

/// One of the four tones a colour set renders at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Dark,
    Normal,
    Light,
    Unobtainable,
}

/// The four tone triples of a colour set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToneSet {
    pub dark: Colour,
    pub normal: Colour,
    pub light: Colour,
    pub unobtainable: Colour,
}

impl ToneSet {
    /// Look up the triple for a tone.
    pub fn get(&self, tone: Tone) -> Colour {
        match tone {
            Tone::Dark => self.dark,
            Tone::Normal => self.normal,
            Tone::Light => self.light,
            Tone::Unobtainable => self.unobtainable,
        }
    }
}

/// Per-version traits of a block variant.
///
/// The version keys of `BlockVariant::valid_versions` decide eligibility;
/// these values carry the placement traits the document records alongside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VariantTraits {
    pub flammable: bool,
    pub needs_support: bool,
}

/// A placeable block realizing a colour set's tones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockVariant {
    /// Id unique within the owning colour set only.
    pub id: String,
    pub display_name: String,
    /// Version -> traits. The key set defines the versions in which this
    /// variant may legally be selected. Never empty in a valid catalog.
    pub valid_versions: HashMap<String, VariantTraits>,
}

impl BlockVariant {
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        valid_versions: HashMap<String, VariantTraits>,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            valid_versions,
        }
    }

    /// Whether the variant may be selected under a version.
    pub fn supports(&self, version: &str) -> bool {
        self.valid_versions.contains_key(version)
    }

    /// Traits of the variant under a version, if supported there.
    pub fn traits_for(&self, version: &str) -> Option<&VariantTraits> {
        self.valid_versions.get(version)
    }
}

/// Display name of a colour set: a literal string, or a locale key the host
/// resolves through its string table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColourName {
    Literal(String),
    LocaleKey(String),
}

impl ColourName {
    /// The raw label: the literal text, or the unresolved locale key.
    pub fn as_str(&self) -> &str {
        match self {
            ColourName::Literal(s) | ColourName::LocaleKey(s) => s,
        }
    }

    pub fn is_locale_key(&self) -> bool {
        matches!(self, ColourName::LocaleKey(_))
    }
}

/// A named palette entry with its tone triples and block variants.
#[derive(Debug, Clone, PartialEq)]
pub struct ColourSet {
    /// Stable string id, also the display-order key (numeric ids sort
    /// numerically, anything else after).
    pub id: String,
    pub name: ColourName,
    pub tones: ToneSet,
    blocks: Vec<BlockVariant>,
}

impl ColourSet {
    /// Create a colour set. Blocks are kept in the order given.
    pub fn new(
        id: impl Into<String>,
        name: ColourName,
        tones: ToneSet,
        blocks: Vec<BlockVariant>,
    ) -> Self {
        Self {
            id: id.into(),
            name,
            tones,
            blocks,
        }
    }

    /// Get a block variant by id.
    pub fn block(&self, id: &str) -> Option<&BlockVariant> {
        self.blocks.iter().find(|b| b.id == id)
    }

    /// All block variants, in display order.
    pub fn blocks(&self) -> &[BlockVariant] {
        &self.blocks
    }

    /// Number of block variants.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// A colour set with no variants violates the catalog invariant; the
    /// validation checks report it.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub(crate) fn push_block(&mut self, block: BlockVariant) {
        self.blocks.push(block);
    }
}

/// The full colour-set catalog, in display order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaletteCatalog {
    sets: Vec<ColourSet>,
}

impl PaletteCatalog {
    /// Build a catalog from colour sets already in display order.
    pub fn new(sets: Vec<ColourSet>) -> Self {
        Self { sets }
    }

    /// Get a colour set by id.
    pub fn get(&self, id: &str) -> Option<&ColourSet> {
        self.sets.iter().find(|s| s.id == id)
    }

    /// All colour sets, in display order.
    pub fn sets(&self) -> &[ColourSet] {
        &self.sets
    }

    /// Number of colour sets.
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Append a custom block variant to an existing colour set.
    ///
    /// The new variant gets the next free numeric id within the set and the
    /// same traits for every listed version. Block-name syntax is the
    /// caller's business; an empty version list is rejected because it
    /// would break the non-empty `valid_versions` invariant.
    pub fn insert_custom(
        &mut self,
        colour_set_id: &str,
        display_name: impl Into<String>,
        traits: VariantTraits,
        versions: &[String],
    ) -> Result<String> {
        if versions.is_empty() {
            return Err(MapartError::Validation {
                message: "a custom block needs at least one valid version".to_string(),
                help: Some("Tick at least one game version for the new block".to_string()),
            });
        }

        let set = self
            .sets
            .iter_mut()
            .find(|s| s.id == colour_set_id)
            .ok_or_else(|| MapartError::UnknownColourSet {
                id: colour_set_id.to_string(),
            })?;

        let next_id = set
            .blocks
            .iter()
            .filter_map(|b| b.id.parse::<u64>().ok())
            .max()
            .map_or(0, |n| n + 1)
            .to_string();

        let valid_versions: HashMap<String, VariantTraits> =
            versions.iter().map(|v| (v.clone(), traits)).collect();

        set.push_block(BlockVariant::new(next_id.clone(), display_name, valid_versions));
        Ok(next_id)
    }
}

/// Sort key placing numeric ids first in numeric order, the rest after in
/// lexicographic order.
pub(crate) fn id_sort_key(id: &str) -> (u64, String) {
    match id.parse::<u64>() {
        Ok(n) => (n, String::new()),
        Err(_) => (u64::MAX, id.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn versions(keys: &[&str]) -> HashMap<String, VariantTraits> {
        keys.iter()
            .map(|k| (k.to_string(), VariantTraits::default()))
            .collect()
    }

    fn white_set() -> ColourSet {
        ColourSet::new(
            "8",
            ColourName::Literal("White".to_string()),
            ToneSet {
                dark: Colour::rgb(180, 180, 180),
                normal: Colour::rgb(220, 220, 220),
                light: Colour::rgb(255, 255, 255),
                unobtainable: Colour::rgb(110, 110, 110),
            },
            vec![
                BlockVariant::new("0", "White Wool", versions(&["1.12.2", "1.16.5"])),
                BlockVariant::new("1", "White Concrete", versions(&["1.16.5"])),
            ],
        )
    }

    #[test]
    fn test_tone_lookup() {
        let set = white_set();
        assert_eq!(set.tones.get(Tone::Light), Colour::WHITE);
        assert_eq!(set.tones.get(Tone::Dark), Colour::rgb(180, 180, 180));
    }

    #[test]
    fn test_block_lookup() {
        let set = white_set();
        assert_eq!(set.block("1").unwrap().display_name, "White Concrete");
        assert!(set.block("9").is_none());
    }

    #[test]
    fn test_variant_supports() {
        let set = white_set();
        let wool = set.block("0").unwrap();
        assert!(wool.supports("1.12.2"));
        assert!(!wool.supports("1.8.9"));
    }

    #[test]
    fn test_traits_parse_defaults() {
        let t: VariantTraits = serde_json::from_str("{}").unwrap();
        assert!(!t.flammable);
        assert!(!t.needs_support);

        let t: VariantTraits =
            serde_json::from_str(r#"{"flammable": true, "needsSupport": true}"#).unwrap();
        assert!(t.flammable);
        assert!(t.needs_support);
    }

    #[test]
    fn test_insert_custom_assigns_next_id() {
        let mut catalog = PaletteCatalog::new(vec![white_set()]);
        let traits = VariantTraits {
            flammable: false,
            needs_support: true,
        };

        let id = catalog
            .insert_custom("8", "minecraft:snow", traits, &["1.16.5".to_string()])
            .unwrap();
        assert_eq!(id, "2");

        let block = catalog.get("8").unwrap().block("2").unwrap();
        assert_eq!(block.display_name, "minecraft:snow");
        assert_eq!(block.traits_for("1.16.5"), Some(&traits));
    }

    #[test]
    fn test_insert_custom_unknown_set() {
        let mut catalog = PaletteCatalog::new(vec![white_set()]);
        let err = catalog
            .insert_custom("99", "x", VariantTraits::default(), &["1.16.5".to_string()])
            .unwrap_err();
        assert!(matches!(err, MapartError::UnknownColourSet { .. }));
    }

    #[test]
    fn test_insert_custom_rejects_empty_versions() {
        let mut catalog = PaletteCatalog::new(vec![white_set()]);
        let err = catalog
            .insert_custom("8", "x", VariantTraits::default(), &[])
            .unwrap_err();
        assert!(matches!(err, MapartError::Validation { .. }));
        // Nothing was appended on failure.
        assert_eq!(catalog.get("8").unwrap().len(), 2);
    }

    #[test]
    fn test_id_sort_key_numeric_first() {
        let mut ids = vec!["10", "2", "custom", "0"];
        ids.sort_by_key(|id| id_sort_key(id));
        assert_eq!(ids, vec!["0", "2", "10", "custom"]);
    }
}

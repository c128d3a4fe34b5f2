//! Version compatibility resolution.
//!
//! Filters the colour-set catalog down to what may legally be selected under
//! a target game version. The result is a borrowed view over the catalog,
//! recomputed whenever the target version changes and never mutated in
//! place.

use crate::types::{BlockVariant, ColourSet, PaletteCatalog};

/// One colour set of an [`EligibleCatalog`], with only its qualifying
/// variants.
#[derive(Debug, Clone)]
pub struct EligibleSet<'a> {
    pub colour_set: &'a ColourSet,
    pub blocks: Vec<&'a BlockVariant>,
}

/// The subset of the catalog selectable under one target version.
#[derive(Debug, Clone)]
pub struct EligibleCatalog<'a> {
    version: String,
    sets: Vec<EligibleSet<'a>>,
}

impl<'a> EligibleCatalog<'a> {
    /// The target version this view was resolved for.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Eligible colour sets, in catalog display order.
    pub fn sets(&self) -> &[EligibleSet<'a>] {
        &self.sets
    }

    /// Get the eligible view of one colour set.
    pub fn get(&self, colour_set_id: &str) -> Option<&EligibleSet<'a>> {
        self.sets.iter().find(|s| s.colour_set.id == colour_set_id)
    }

    /// Whether a (colour set, block) pair may be selected under this view.
    pub fn allows(&self, colour_set_id: &str, block_id: &str) -> bool {
        self.get(colour_set_id)
            .is_some_and(|s| s.blocks.iter().any(|b| b.id == block_id))
    }

    /// Number of eligible colour sets.
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// An unknown target version resolves to an empty view; that is a
    /// presentation concern, not an error.
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}

/// Resolve the eligible view of the catalog for a target version.
///
/// A colour set is kept iff at least one of its variants lists the target
/// version; kept sets retain exactly the variants passing that same test.
pub fn resolve<'a>(catalog: &'a PaletteCatalog, target_version: &str) -> EligibleCatalog<'a> {
    let sets = catalog
        .sets()
        .iter()
        .filter_map(|set| {
            let blocks: Vec<&BlockVariant> = set
                .blocks()
                .iter()
                .filter(|b| b.supports(target_version))
                .collect();
            if blocks.is_empty() {
                None
            } else {
                Some(EligibleSet {
                    colour_set: set,
                    blocks,
                })
            }
        })
        .collect();

    EligibleCatalog {
        version: target_version.to_string(),
        sets,
    }
}

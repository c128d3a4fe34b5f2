//! Stale-selection detection.
//!
//! A chosen block variant is "stale" when the catalog's newest version is
//! not among its valid versions. The result only drives an informational
//! warning badge; it never blocks or rewrites a selection.

use crate::types::{BlockVariant, VersionCatalog};

/// Check whether a variant misses the newest catalog version.
///
/// Returns `None` when the variant is valid in the newest version, and
/// `Some(version)` with the newest catalog version the variant *is* valid
/// for otherwise. Versions are compared by catalog order, not by the
/// document order of `valid_versions` keys. A variant whose versions are
/// all unknown to the catalog also reports `None`; the validation checks
/// flag such catalogs.
pub fn unsupported_after<'a>(
    variant: &BlockVariant,
    versions: &'a VersionCatalog,
) -> Option<&'a str> {
    let latest = versions.latest()?;
    if variant.supports(latest) {
        return None;
    }

    versions.iter_newest_first().find(|v| variant.supports(v))
}

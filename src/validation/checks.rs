//! Validation checks for the loaded catalogs.
//!
//! Each check takes the catalog pair and returns a `ValidationResult`.
//! Errors mark documents the engine cannot reason about reliably (they
//! break the invariants staleness and eligibility depend on); warnings mark
//! oddities the engine tolerates.

use super::warning::{Diagnostic, ValidationResult};
use crate::types::{PaletteCatalog, VersionCatalog};

/// A colour set must have at least one block variant.
pub fn check_empty_sets(palette: &PaletteCatalog) -> ValidationResult {
    let mut result = ValidationResult::new();

    for set in palette.sets() {
        if set.is_empty() {
            result.push(
                Diagnostic::error(
                    "mapart::validate::empty-set",
                    format!("Colour set '{}' has no block variants", set.id),
                )
                .with_help("Every colour set needs at least one block"),
            );
        }
    }

    result
}

/// Every block variant must list at least one valid version.
pub fn check_empty_valid_versions(palette: &PaletteCatalog) -> ValidationResult {
    let mut result = ValidationResult::new();

    for set in palette.sets() {
        for block in set.blocks() {
            if block.valid_versions.is_empty() {
                result.push(Diagnostic::error(
                    "mapart::validate::no-versions",
                    format!(
                        "Block '{}' of colour set '{}' lists no valid versions",
                        block.id, set.id
                    ),
                ));
            }
        }
    }

    result
}

/// Version keys should all be known to the version catalog; staleness
/// ordering is undefined for the ones that are not.
pub fn check_unknown_versions(
    palette: &PaletteCatalog,
    versions: &VersionCatalog,
) -> ValidationResult {
    let mut result = ValidationResult::new();

    for set in palette.sets() {
        for block in set.blocks() {
            for version in block.valid_versions.keys() {
                if !versions.contains(version) {
                    result.push(
                        Diagnostic::warning(
                            "mapart::validate::unknown-version",
                            format!(
                                "Block '{}' of colour set '{}' lists version '{}' \
                                 not in the version catalog",
                                block.id, set.id, version
                            ),
                        )
                        .with_help("Add the version to the versions document or drop the key"),
                    );
                }
            }
        }
    }

    result
}

/// An empty version catalog leaves "latest" undefined.
pub fn check_version_catalog(versions: &VersionCatalog) -> ValidationResult {
    let mut result = ValidationResult::new();

    if versions.is_empty() {
        result.push(Diagnostic::error(
            "mapart::validate::no-catalog-versions",
            "The version catalog is empty",
        ));
    }

    result
}

/// Non-numeric colour-set ids sort after all numeric ones; usually a typo.
pub fn check_non_numeric_ids(palette: &PaletteCatalog) -> ValidationResult {
    let mut result = ValidationResult::new();

    for set in palette.sets() {
        if set.id.parse::<u64>().is_err() {
            result.push(Diagnostic::warning(
                "mapart::validate::non-numeric-id",
                format!("Colour set id '{}' is not numeric", set.id),
            ));
        }
    }

    result
}

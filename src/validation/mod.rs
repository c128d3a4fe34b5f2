//! Validation system for the loaded catalogs.
//!
//! Runs a suite of checks against the colour-set and version catalogs and
//! reports errors and warnings. Used by `mapart validate` and by hosts that
//! want to reject a document pair before opening a session on it.

mod checks;
mod warning;

pub use warning::{Diagnostic, Severity, ValidationResult};

use crate::types::{PaletteCatalog, VersionCatalog};

/// Run all validation checks against a catalog pair.
pub fn validate_catalogs(palette: &PaletteCatalog, versions: &VersionCatalog) -> ValidationResult {
    let mut result = ValidationResult::new();

    result.merge(checks::check_version_catalog(versions));
    result.merge(checks::check_empty_sets(palette));
    result.merge(checks::check_empty_valid_versions(palette));
    result.merge(checks::check_unknown_versions(palette, versions));
    result.merge(checks::check_non_numeric_ids(palette));

    result
}

/// Print diagnostics to stderr.
pub fn print_diagnostics(result: &ValidationResult) {
    for d in result.iter() {
        eprintln!("  {}[{}]: {}", d.severity, d.code, d.message);
        if let Some(help) = &d.help {
            eprintln!("    help: {}", help);
        }
    }

    let errors = result.error_count();
    let warnings = result.warning_count();

    if errors > 0 {
        eprintln!(
            "Validation failed: {} error(s), {} warning(s)",
            errors, warnings
        );
    } else if warnings > 0 {
        eprintln!("Validation passed ({} warning(s))", warnings);
    } else {
        eprintln!("Validation passed.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{parse_colours, parse_versions};

    #[test]
    fn test_validate_clean_documents() {
        let palette = parse_colours(
            r#"{
                "0": {
                    "colourName": "Grass",
                    "tonesRGB": {
                        "dark": [90, 125, 27],
                        "normal": [112, 153, 34],
                        "light": [130, 178, 39],
                        "unobtainable": [46, 64, 14]
                    },
                    "blocks": {
                        "0": { "displayName": "Grass Block", "validVersions": { "1.16.5": {} } }
                    }
                }
            }"#,
        )
        .unwrap();
        let versions = parse_versions(r#"{ "0": { "MCVersion": "1.16.5" } }"#).unwrap();

        assert!(validate_catalogs(&palette, &versions).is_ok());
    }

    #[test]
    fn test_validate_catches_stray_version_key() {
        let palette = parse_colours(
            r#"{
                "0": {
                    "colourName": "Grass",
                    "tonesRGB": {
                        "dark": [90, 125, 27],
                        "normal": [112, 153, 34],
                        "light": [130, 178, 39],
                        "unobtainable": [46, 64, 14]
                    },
                    "blocks": {
                        "0": { "displayName": "Grass Block", "validVersions": { "9.9.9": {} } }
                    }
                }
            }"#,
        )
        .unwrap();
        let versions = parse_versions(r#"{ "0": { "MCVersion": "1.16.5" } }"#).unwrap();

        let result = validate_catalogs(&palette, &versions);
        assert!(!result.is_ok());
        assert!(!result.has_errors());
        assert_eq!(result.warning_count(), 1);
    }
}

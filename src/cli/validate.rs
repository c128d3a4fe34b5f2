//! Validate command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::error::{MapartError, Result};
use crate::output::{display_path, Printer};
use crate::validation::{print_diagnostics, validate_catalogs};

use super::Project;

/// Validate the catalog documents
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Project manifest
    #[arg(long, default_value = "mapart.yaml")]
    pub manifest: PathBuf,
}

pub fn run(args: ValidateArgs, printer: &Printer) -> Result<()> {
    let project = Project::load(&args.manifest)?;

    printer.status(
        "Validating",
        &format!(
            "{} and {}",
            display_path(&project.manifest.colours),
            display_path(&project.manifest.versions)
        ),
    );

    let result = validate_catalogs(&project.palette, &project.versions);
    print_diagnostics(&result);

    if result.has_errors() {
        return Err(MapartError::Validation {
            message: format!("{} validation error(s)", result.error_count()),
            help: None,
        });
    }

    Ok(())
}

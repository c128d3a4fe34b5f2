//! List command implementation.
//!
//! Resolves the catalog for a target version and prints the eligible
//! colour sets with their blocks, traits and stale-selection badges.

use std::path::PathBuf;

use clap::Args;

use crate::error::{MapartError, Result};
use crate::output::{plural, Printer};
use crate::resolve::resolve;
use crate::support::unsupported_after;

use super::Project;

/// List the colour sets and blocks eligible for a version
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Project manifest
    #[arg(long, default_value = "mapart.yaml")]
    pub manifest: PathBuf,

    /// Target game version (default: manifest version, then newest)
    #[arg(long)]
    pub version: Option<String>,
}

pub fn run(args: ListArgs, printer: &Printer) -> Result<()> {
    let project = Project::load(&args.manifest)?;
    let version = project
        .target_version(args.version.as_deref())
        .ok_or_else(|| MapartError::Validation {
            message: "No target version: the version catalog is empty".to_string(),
            help: Some("Add versions to the versions document".to_string()),
        })?;

    let eligible = resolve(&project.palette, &version);

    printer.status(
        "Resolved",
        &format!(
            "{} for {}",
            plural(eligible.len(), "colour set", "colour sets"),
            version
        ),
    );

    for set in eligible.sets() {
        let name = set.colour_set.name.as_str();
        println!("{} {}", set.colour_set.id, name);

        for block in &set.blocks {
            let mut line = format!("  {} {}", block.id, block.display_name);

            if let Some(traits) = block.traits_for(&version) {
                let mut notes = Vec::new();
                if traits.flammable {
                    notes.push("flammable");
                }
                if traits.needs_support {
                    notes.push("needs support");
                }
                if !notes.is_empty() {
                    line.push_str(&format!(" {}", printer.dim(&notes.join(", "))));
                }
            }

            if let Some(last) = unsupported_after(block, &project.versions) {
                line.push_str(&format!(
                    " {}",
                    printer.badge(&format!("! unsupported past {}", last))
                ));
            }

            println!("{}", line);
        }
    }

    Ok(())
}

//! Preset command implementation.
//!
//! CRUD, share and export over the preset store. Mutations rebuild the
//! manager from the store, apply one change, and write the user subset
//! back; the store file is only replaced after the change succeeded.

use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::error::{MapartError, Result};
use crate::output::{display_path, plural, Printer};
use crate::presets::{decode, load_presets, save_presets, PresetManager};
use crate::resolve::resolve;
use crate::selection::{BlockChoice, SelectionState};

use super::Project;

/// Manage selection presets
#[derive(Args, Debug)]
pub struct PresetArgs {
    /// Project manifest
    #[arg(long, default_value = "mapart.yaml")]
    pub manifest: PathBuf,

    #[command(subcommand)]
    pub command: PresetCommands,
}

#[derive(Subcommand, Debug)]
pub enum PresetCommands {
    /// List all presets
    List,

    /// Save a preset from SET=BLOCK selections
    Save {
        /// Preset name
        name: String,

        /// Selections, e.g. --set 0=1 --set 5=0
        #[arg(long = "set", value_name = "SET=BLOCK")]
        sets: Vec<String>,

        /// Version to validate the selections against
        #[arg(long)]
        version: Option<String>,
    },

    /// Delete a user preset
    Delete {
        /// Preset name
        name: String,
    },

    /// Show a preset's selections
    Show {
        /// Preset name
        name: String,
    },

    /// Print a preset's share token
    Share {
        /// Preset name
        name: String,
    },

    /// Decode a share token and show its selections
    Decode {
        /// Share token, e.g. mapart1:0.1;5.0
        token: String,
    },

    /// Export a preset as a Paint.NET palette
    Export {
        /// Preset name
        name: String,

        /// Output file (default: stdout)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

pub fn run(args: PresetArgs, printer: &Printer) -> Result<()> {
    let project = Project::load(&args.manifest)?;
    let mut manager = load_manager(&project)?;

    match args.command {
        PresetCommands::List => {
            for preset in manager.presets() {
                let origin = if preset.is_built_in() {
                    printer.dim("built-in")
                } else {
                    String::new()
                };
                println!("{} {}", preset.display_label(), origin);
            }
            printer.status(
                "Listed",
                &plural(manager.len(), "preset", "presets"),
            );
        }

        PresetCommands::Save {
            name,
            sets,
            version,
        } => {
            let version = project
                .target_version(version.as_deref())
                .ok_or_else(|| MapartError::Validation {
                    message: "No target version: the version catalog is empty".to_string(),
                    help: None,
                })?;
            let eligible = resolve(&project.palette, &version);

            let mut selection = SelectionState::new();
            for pair in &sets {
                let (set_id, block_id) =
                    pair.split_once('=').ok_or_else(|| MapartError::Parse {
                        message: format!("'{}' is not a SET=BLOCK pair", pair),
                        help: Some("Pass selections as --set 0=1".to_string()),
                    })?;
                selection.select(
                    set_id,
                    BlockChoice::Selected(block_id.to_string()),
                    &eligible,
                )?;
            }

            manager.save(&name, &selection)?;
            save_presets(&project.manifest.presets, manager.presets().iter())?;
            printer.status(
                "Saved",
                &format!(
                    "preset '{}' ({})",
                    name,
                    plural(selection.len(), "selection", "selections")
                ),
            );
        }

        PresetCommands::Delete { name } => {
            manager.delete(&name)?;
            save_presets(&project.manifest.presets, manager.presets().iter())?;
            printer.status("Deleted", &format!("preset '{}'", name));
        }

        PresetCommands::Show { name } => {
            let selection = manager.load(&name)?;
            print_selection("Loaded", &selection, &project, printer);
        }

        PresetCommands::Share { name } => {
            let token = manager.share(&name)?;
            println!("{}", token);
        }

        PresetCommands::Decode { token } => {
            let selection = decode(&token)?;
            print_selection("Decoded", &selection, &project, printer);
        }

        PresetCommands::Export { name, out } => {
            let payload = manager.export(&name, &project.palette)?;
            match out {
                Some(path) => {
                    std::fs::write(&path, payload).map_err(|e| MapartError::Io {
                        path: path.clone(),
                        message: format!("Failed to write palette: {}", e),
                    })?;
                    printer.status(
                        "Exported",
                        &format!("preset '{}' to {}", name, display_path(&path)),
                    );
                }
                None => print!("{}", payload),
            }
        }
    }

    Ok(())
}

/// Build the manager from the built-in document (if configured) plus the
/// user store.
fn load_manager(project: &Project) -> Result<PresetManager> {
    let mut presets = Vec::new();
    if let Some(path) = &project.manifest.builtin_presets {
        presets.extend(load_presets(path)?);
    }
    presets.extend(load_presets(&project.manifest.presets)?);
    Ok(PresetManager::from_presets(presets))
}

fn print_selection(verb: &str, selection: &SelectionState, project: &Project, printer: &Printer) {
    for (set_id, block_id) in selection.sorted_entries() {
        match project.palette.get(set_id) {
            Some(set) => {
                let block_name = set
                    .block(block_id)
                    .map_or("unknown block", |b| b.display_name.as_str());
                println!("{} {} = {}", set_id, set.name.as_str(), block_name);
            }
            None => println!("{} {} = {}", set_id, printer.dim("unknown set"), block_id),
        }
    }
    printer.status(verb, &plural(selection.len(), "selection", "selections"));
}

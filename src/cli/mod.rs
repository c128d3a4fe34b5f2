pub mod completions;
pub mod list;
pub mod preset;
pub mod preview;
pub mod validate;

use std::path::Path;

use clap::{Parser, Subcommand};

use crate::catalog::{load_colours, load_versions, Manifest};
use crate::error::Result;
use crate::types::{PaletteCatalog, VersionCatalog};

/// mapart - map-art block palette and preset manager
#[derive(Parser, Debug)]
#[command(name = "mapart")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the colour sets and blocks eligible for a version
    List(list::ListArgs),

    /// Render a colour set's preview swatch
    Preview(preview::PreviewArgs),

    /// Manage selection presets
    Preset(preset::PresetArgs),

    /// Validate the catalog documents
    Validate(validate::ValidateArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// The loaded project: manifest plus both catalogs.
pub(crate) struct Project {
    pub manifest: Manifest,
    pub palette: PaletteCatalog,
    pub versions: VersionCatalog,
}

impl Project {
    /// Load a project from its manifest path. A missing manifest falls back
    /// to the default document locations.
    pub fn load(manifest_path: &Path) -> Result<Self> {
        let manifest = if manifest_path.exists() {
            Manifest::load(manifest_path)?
        } else {
            Manifest::default()
        };

        let palette = load_colours(&manifest.colours)?;
        let versions = load_versions(&manifest.versions)?;

        Ok(Self {
            manifest,
            palette,
            versions,
        })
    }

    /// The target version: an explicit override, the manifest default, or
    /// the catalog's newest.
    pub fn target_version(&self, override_version: Option<&str>) -> Option<String> {
        override_version
            .map(|v| v.to_string())
            .or_else(|| self.manifest.target_version(&self.versions))
    }
}

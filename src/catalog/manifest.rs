//! Project manifest (mapart.yaml) parsing.
//!
//! The manifest names the catalog documents and preset store, and carries
//! the default mode flags a session starts with.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{MapartError, Result};
use crate::preview::{OutputFormat, RenderFlags, Staircasing};
use crate::types::VersionCatalog;

/// Project manifest loaded from mapart.yaml.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Path to the colours document.
    pub colours: PathBuf,

    /// Path to the supported-versions document.
    pub versions: PathBuf,

    /// Path to the user preset store.
    pub presets: PathBuf,

    /// Optional path to the built-in presets document.
    pub builtin_presets: Option<PathBuf>,

    /// Default target version. `None` means the catalog's newest.
    pub version: Option<String>,

    /// Default staircasing mode (`off`, `classic`, `valley`).
    pub staircasing: String,

    /// Default output format (`nbt`, `mapdat`).
    pub format: String,

    /// Whether unobtainable tones are allowed by default.
    pub unobtainable: bool,
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            colours: PathBuf::from("colours.json"),
            versions: PathBuf::from("versions.json"),
            presets: PathBuf::from("presets.json"),
            builtin_presets: None,
            version: None,
            staircasing: "classic".to_string(),
            format: "mapdat".to_string(),
            unobtainable: false,
        }
    }
}

impl Manifest {
    /// Load manifest from a mapart.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| MapartError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| MapartError::Parse {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check mapart.yaml syntax".to_string()),
        })
    }

    /// The default mode flags of this project.
    pub fn render_flags(&self) -> RenderFlags {
        RenderFlags {
            staircasing: Staircasing::from_str_lossy(&self.staircasing),
            format: OutputFormat::from_str_lossy(&self.format),
            unobtainable: self.unobtainable,
        }
    }

    /// The default target version, falling back to the catalog's newest.
    pub fn target_version(&self, versions: &VersionCatalog) -> Option<String> {
        self.version
            .clone()
            .or_else(|| versions.latest().map(|v| v.to_string()))
    }
}

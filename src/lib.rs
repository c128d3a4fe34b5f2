//! mapart - map-art block palette engine
//!
//! A library for resolving which block variants a map-art palette may use
//! under a given game version, styling colour-set previews for the active
//! rendering modes, tracking the live block selection, and managing named
//! selection presets with share and export support.

pub mod catalog;
pub mod cli;
pub mod error;
pub mod output;
pub mod presets;
pub mod preview;
pub mod render;
pub mod resolve;
pub mod selection;
pub mod support;
pub mod types;
pub mod validation;

pub use catalog::{load_colours, load_versions, parse_colours, parse_versions, Manifest};
pub use error::{MapartError, Result};
pub use presets::{pdn_palette, Preset, PresetManager, PresetOrigin};
pub use preview::{style_preview, Band, OutputFormat, Preview, RenderFlags, Staircasing};
pub use render::{band_rows, write_swatch};
pub use resolve::{resolve, EligibleCatalog, EligibleSet};
pub use selection::{BlockChoice, SelectionState};
pub use support::unsupported_after;
pub use types::{
    BlockVariant, Colour, ColourName, ColourSet, PaletteCatalog, Tone, ToneSet, VariantTraits,
    VersionCatalog,
};
pub use validation::{validate_catalogs, Diagnostic, Severity, ValidationResult};

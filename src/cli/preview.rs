//! Preview command implementation.
//!
//! Styles one colour set under the active mode flags and writes the swatch
//! PNG. The CSS background value goes to stdout so hosts can reuse it.

use std::path::PathBuf;

use clap::Args;

use crate::error::{MapartError, Result};
use crate::output::{display_path, Printer};
use crate::preview::{style_preview, OutputFormat, RenderFlags, Staircasing};
use crate::render::write_swatch;

use super::Project;

/// Render a colour set's preview swatch
#[derive(Args, Debug)]
pub struct PreviewArgs {
    /// Colour set id to preview
    pub colour_set: String,

    /// Project manifest
    #[arg(long, default_value = "mapart.yaml")]
    pub manifest: PathBuf,

    /// Staircasing mode: off, classic, valley (default: manifest)
    #[arg(long)]
    pub staircasing: Option<String>,

    /// Output format: nbt, mapdat (default: manifest)
    #[arg(long)]
    pub format: Option<String>,

    /// Allow unobtainable tones (default: manifest)
    #[arg(long)]
    pub unobtainable: Option<bool>,

    /// Output PNG path (default: swatch-<id>.png)
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Swatch width in pixels
    #[arg(long, default_value_t = 32)]
    pub width: u32,

    /// Swatch height in pixels
    #[arg(long, default_value_t = 48)]
    pub height: u32,
}

pub fn run(args: PreviewArgs, printer: &Printer) -> Result<()> {
    let project = Project::load(&args.manifest)?;

    let set = project
        .palette
        .get(&args.colour_set)
        .ok_or_else(|| MapartError::UnknownColourSet {
            id: args.colour_set.clone(),
        })?;

    let defaults = project.manifest.render_flags();
    let flags = RenderFlags {
        staircasing: args
            .staircasing
            .as_deref()
            .map_or(defaults.staircasing, Staircasing::from_str_lossy),
        format: args
            .format
            .as_deref()
            .map_or(defaults.format, OutputFormat::from_str_lossy),
        unobtainable: args.unobtainable.unwrap_or(defaults.unobtainable),
    };

    let preview = style_preview(set, flags);
    let out = args
        .out
        .unwrap_or_else(|| PathBuf::from(format!("swatch-{}.png", set.id)));

    write_swatch(&preview, &out, args.width, args.height)?;

    printer.status(
        "Rendered",
        &format!(
            "{} ({} bands) to {}",
            set.name.as_str(),
            preview.len(),
            display_path(&out)
        ),
    );
    println!("{}", preview.css_background());

    Ok(())
}

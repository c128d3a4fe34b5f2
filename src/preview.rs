//! Tone-band preview styling.
//!
//! Computes the banded swatch a colour set presents under the active
//! rendering mode flags. The flag precedence lives in one decision table so
//! the rules stay auditable:
//!
//! | staircasing | format        | unobtainable | bands |
//! |-------------|---------------|--------------|-------|
//! | off         | any           | any          | normal x1 |
//! | on          | schematic NBT | any          | dark, normal, light (1/3 each) |
//! | on          | other         | false        | dark, normal, light (1/3 each) |
//! | on          | other         | true         | unobtainable, dark, dark, normal, normal, light (1/6 each) |
//!
//! Pure function of the colour set's tones and three flags; no I/O.

use crate::types::{Colour, ColourSet, Tone};

/// Staircasing rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Staircasing {
    /// Flat map: only the normal tone is reachable.
    Off,
    #[default]
    Classic,
    Valley,
}

impl Staircasing {
    /// Parse from a manifest/CLI string. Unknown values mean classic.
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "off" => Staircasing::Off,
            "valley" => Staircasing::Valley,
            _ => Staircasing::Classic,
        }
    }
}

/// Output format of the final map art.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Schematic export; cannot represent the unobtainable tone.
    SchematicNbt,
    #[default]
    MapDat,
}

impl OutputFormat {
    /// Parse from a manifest/CLI string. Unknown values mean map.dat.
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "nbt" | "schematic" | "schematic-nbt" => OutputFormat::SchematicNbt,
            _ => OutputFormat::MapDat,
        }
    }
}

/// The three mode flags the styler consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderFlags {
    pub staircasing: Staircasing,
    pub format: OutputFormat,
    /// Whether the user allows unobtainable tones.
    pub unobtainable: bool,
}

/// One band of a styled preview.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub tone: Tone,
    pub colour: Colour,
    /// Bands are always equal-width; this is 1 / band count.
    pub proportion: f64,
}

/// An ordered banded swatch; proportions sum to 1.
#[derive(Debug, Clone, PartialEq)]
pub struct Preview {
    bands: Vec<Band>,
}

impl Preview {
    /// The bands, top to bottom.
    pub fn bands(&self) -> &[Band] {
        &self.bands
    }

    /// Number of bands (1, 3 or 6).
    pub fn len(&self) -> usize {
        self.bands.len()
    }

    /// A preview always has at least the flat band.
    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }

    /// Cumulative `(colour, start, end)` stops in the 0..=1 range, with
    /// adjacent same-colour bands merged.
    pub fn stops(&self) -> Vec<(Colour, f64, f64)> {
        let mut stops: Vec<(Colour, f64, f64)> = Vec::new();
        let step = 1.0 / self.bands.len() as f64;

        for (i, band) in self.bands.iter().enumerate() {
            let end = (i + 1) as f64 * step;
            if let Some(last) = stops.last_mut() {
                if last.0 == band.colour {
                    last.2 = end;
                    continue;
                }
            }
            stops.push((band.colour, i as f64 * step, end));
        }

        stops
    }

    /// CSS background value for the swatch: a plain `rgb()` for the flat
    /// case, a hard-stop `linear-gradient(...)` otherwise.
    pub fn css_background(&self) -> String {
        let stops = self.stops();
        if stops.len() == 1 {
            return stops[0].0.css();
        }

        let mut parts: Vec<String> = Vec::new();
        for (i, (colour, start, end)) in stops.iter().enumerate() {
            if i > 0 {
                parts.push(format!("{} {}", colour.css(), percent(*start)));
            }
            if i + 1 < stops.len() {
                parts.push(format!("{} {}", colour.css(), percent(*end)));
            }
        }
        format!("linear-gradient({})", parts.join(", "))
    }
}

fn percent(fraction: f64) -> String {
    format!("{}%", (fraction * 100.0).round() as u32)
}

/// Flat band: shading needs staircasing.
const FLAT: [Tone; 1] = [Tone::Normal];

/// Staircased bands every export format can produce.
const THREE_BAND: [Tone; 3] = [Tone::Dark, Tone::Normal, Tone::Light];

/// Staircased bands plus the unobtainable tone; dark and normal doubled so
/// their visual weight matches the three-band case.
const SIX_BAND: [Tone; 6] = [
    Tone::Unobtainable,
    Tone::Dark,
    Tone::Dark,
    Tone::Normal,
    Tone::Normal,
    Tone::Light,
];

/// Pick the band row for a flag combination. Rows are tried top to bottom;
/// staircasing-off wins over everything, then the two conditions that force
/// the three-band form share one row.
fn band_plan(flags: RenderFlags) -> &'static [Tone] {
    match (flags.staircasing, flags.format, flags.unobtainable) {
        (Staircasing::Off, _, _) => &FLAT,
        (_, OutputFormat::SchematicNbt, _) | (_, _, false) => &THREE_BAND,
        (_, _, true) => &SIX_BAND,
    }
}

/// Style the banded preview of a colour set under the given flags.
pub fn style_preview(colour_set: &ColourSet, flags: RenderFlags) -> Preview {
    let plan = band_plan(flags);
    let proportion = 1.0 / plan.len() as f64;

    let bands = plan
        .iter()
        .map(|&tone| Band {
            tone,
            colour: colour_set.tones.get(tone),
            proportion,
        })
        .collect();

    Preview { bands }
}

//! PNG swatch output for styled previews.
//!
//! Rasterizes the band list of a preview into a vertical swatch, bands top
//! to bottom in styling order.

use std::path::Path;

use image::{ImageBuffer, Rgba, RgbaImage};

use crate::error::{MapartError, Result};
use crate::preview::Preview;
use crate::types::Colour;

/// Split a pixel height across the preview's bands.
///
/// Rows are assigned by cumulative proportion so rounding never loses or
/// duplicates a row; the returned heights always sum to `height`.
pub fn band_rows(preview: &Preview, height: u32) -> Vec<(Colour, u32)> {
    let count = preview.bands().len();
    let mut rows = Vec::with_capacity(count);
    let mut covered = 0u32;

    for (i, band) in preview.bands().iter().enumerate() {
        let end = ((i + 1) as f64 / count as f64 * height as f64).round() as u32;
        rows.push((band.colour, end.saturating_sub(covered)));
        covered = end;
    }

    rows
}

/// Write a preview as a PNG swatch.
pub fn write_swatch(preview: &Preview, path: &Path, width: u32, height: u32) -> Result<()> {
    let width = width.max(1);
    let height = height.max(preview.bands().len() as u32);

    let mut img: RgbaImage = ImageBuffer::new(width, height);

    let mut y = 0u32;
    for (colour, rows) in band_rows(preview, height) {
        let rgba = Rgba(colour.to_rgba());
        for row in 0..rows {
            for x in 0..width {
                img.put_pixel(x, y + row, rgba);
            }
        }
        y += rows;
    }

    img.save(path).map_err(|e| MapartError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preview::{style_preview, OutputFormat, RenderFlags, Staircasing};
    use crate::types::{BlockVariant, ColourName, ColourSet, ToneSet, VariantTraits};
    use std::collections::HashMap;

    fn set() -> ColourSet {
        let mut valid = HashMap::new();
        valid.insert("1.16".to_string(), VariantTraits::default());
        ColourSet::new(
            "0",
            ColourName::Literal("Stone".to_string()),
            ToneSet {
                dark: Colour::rgb(90, 90, 90),
                normal: Colour::rgb(128, 128, 128),
                light: Colour::rgb(170, 170, 170),
                unobtainable: Colour::rgb(50, 50, 50),
            },
            vec![BlockVariant::new("0", "Stone", valid)],
        )
    }

    fn preview(staircasing: Staircasing, unobtainable: bool) -> Preview {
        style_preview(
            &set(),
            RenderFlags {
                staircasing,
                format: OutputFormat::MapDat,
                unobtainable,
            },
        )
    }

    #[test]
    fn test_band_rows_cover_exact_height() {
        for (p, height) in [
            (preview(Staircasing::Off, false), 48),
            (preview(Staircasing::Classic, false), 48),
            (preview(Staircasing::Classic, true), 50),
            (preview(Staircasing::Classic, true), 7),
        ] {
            let rows = band_rows(&p, height);
            let total: u32 = rows.iter().map(|(_, r)| r).sum();
            assert_eq!(total, height);
        }
    }

    #[test]
    fn test_three_bands_split_evenly() {
        let rows = band_rows(&preview(Staircasing::Classic, false), 48);
        let heights: Vec<u32> = rows.iter().map(|(_, r)| *r).collect();
        assert_eq!(heights, vec![16, 16, 16]);
    }

    #[test]
    fn test_write_swatch_round_trips_pixels() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("swatch.png");

        write_swatch(&preview(Staircasing::Classic, false), &path, 8, 48).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.dimensions(), (8, 48));
        // Top band is the dark tone, bottom the light tone.
        assert_eq!(img.get_pixel(0, 0).0, [90, 90, 90, 255]);
        assert_eq!(img.get_pixel(7, 47).0, [170, 170, 170, 255]);
    }
}

//! Rendering module for mapart.
//!
//! Converts styled previews into raster swatches for hosts that want a
//! ready-made image instead of the band list.

mod swatch;

pub use swatch::{band_rows, write_swatch};

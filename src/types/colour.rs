//! Colour type and formatting.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An opaque RGB colour, as carried by the colours document's tone triples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    /// Create a colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// CSS colour function form, `rgb(r, g, b)`.
    pub fn css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    /// Paint.NET palette line form: 8 hex digits, fully opaque alpha first.
    pub fn argb_hex(&self) -> String {
        format!("FF{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Convert to an RGBA quad (opaque) for raster output.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }
}

impl From<[u8; 3]> for Colour {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

impl From<Colour> for [u8; 3] {
    fn from(c: Colour) -> Self {
        [c.r, c.g, c.b]
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css() {
        assert_eq!(Colour::rgb(112, 185, 25).css(), "rgb(112, 185, 25)");
    }

    #[test]
    fn test_argb_hex() {
        assert_eq!(Colour::rgb(255, 0, 77).argb_hex(), "FFFF004D");
        assert_eq!(Colour::BLACK.argb_hex(), "FF000000");
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Colour::rgb(255, 0, 0)), "#FF0000");
    }

    #[test]
    fn test_serde_array_form() {
        let c: Colour = serde_json::from_str("[112, 185, 25]").unwrap();
        assert_eq!(c, Colour::rgb(112, 185, 25));
        assert_eq!(serde_json::to_string(&c).unwrap(), "[112,185,25]");
    }

    #[test]
    fn test_to_rgba_opaque() {
        assert_eq!(Colour::rgb(1, 2, 3).to_rgba(), [1, 2, 3, 255]);
    }
}

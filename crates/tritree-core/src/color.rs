//! RGBA color values stored in tree nodes.
//!
//! Red, green and blue are 8-bit channels; alpha is a real number in the
//! range 0.0 to 1.0 so that averaged alpha does not lose precision as it
//! is blended up the tree.

use serde::{Deserialize, Serialize};

/// Scale applied to alpha when it is compared against the 8-bit channels.
pub const ALPHA_SCALE: f64 = 255.0;

/// An RGBA color with 8-bit color channels and real-valued alpha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
    /// Alpha (0.0 = transparent, 1.0 = opaque)
    pub a: f64,
}

impl Default for Rgba {
    fn default() -> Self {
        Self::opaque(0, 0, 0)
    }
}

impl Rgba {
    /// Create a color from all four channels.
    ///
    /// Alpha is clamped to 0.0 - 1.0.
    pub fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self {
            r,
            g,
            b,
            a: a.clamp(0.0, 1.0),
        }
    }

    /// Create a fully opaque color.
    pub fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color from packed 8-bit RGBA, mapping alpha 255 to 1.0.
    pub fn from_rgba8(rgba: [u8; 4]) -> Self {
        Self {
            r: rgba[0],
            g: rgba[1],
            b: rgba[2],
            a: rgba[3] as f64 / ALPHA_SCALE,
        }
    }

    /// Pack into 8-bit RGBA. Alpha is rounded to the nearest step.
    pub fn to_rgba8(self) -> [u8; 4] {
        let a = (self.a * ALPHA_SCALE).clamp(0.0, ALPHA_SCALE).round() as u8;
        [self.r, self.g, self.b, a]
    }

    /// Euclidean distance between two colors.
    ///
    /// Alpha is scaled by 255 so that every channel contributes on the same
    /// range. The metric is symmetric and zero for identical colors.
    pub fn distance_to(&self, other: &Rgba) -> f64 {
        let dr = self.r as f64 - other.r as f64;
        let dg = self.g as f64 - other.g as f64;
        let db = self.b as f64 - other.b as f64;
        let da = (self.a - other.a) * ALPHA_SCALE;
        (dr * dr + dg * dg + db * db + da * da).sqrt()
    }
}

impl From<image::Rgba<u8>> for Rgba {
    fn from(pixel: image::Rgba<u8>) -> Self {
        Self::from_rgba8(pixel.0)
    }
}

impl From<Rgba> for image::Rgba<u8> {
    fn from(color: Rgba) -> Self {
        image::Rgba(color.to_rgba8())
    }
}

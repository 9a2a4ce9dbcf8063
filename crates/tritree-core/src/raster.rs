//! Pixel storage consumed and produced by the tree.
//!
//! The tree only needs a handful of capabilities from an image: its
//! dimensions, per-coordinate read and write access, and a way to create a
//! blank canvas. Those are captured by the [`Raster`] trait, which is
//! implemented for the crate's own [`Canvas`] and for `image::RgbaImage`.
//!
//! `Canvas` keeps alpha as a real number, so a tree rendered into a canvas
//! reproduces blended alpha exactly. `RgbaImage` stores 8-bit alpha and
//! rounds on write.

use crate::color::Rgba;
use crate::error::TreeError;

/// Read/write access to a rectangular grid of pixels.
///
/// Coordinates are `(x, y)` with the origin at the top-left corner.
/// Implementations may panic on out-of-bounds access.
pub trait Raster {
    /// Create a canvas of the given size. Pixel contents are unspecified
    /// until written.
    fn blank(width: u32, height: u32) -> Self
    where
        Self: Sized;

    /// Width in pixels.
    fn width(&self) -> u32;

    /// Height in pixels.
    fn height(&self) -> u32;

    /// Read the pixel at `(x, y)`.
    fn pixel(&self, x: u32, y: u32) -> Rgba;

    /// Overwrite the pixel at `(x, y)`.
    fn set_pixel(&mut self, x: u32, y: u32, color: Rgba);
}

/// An in-memory image with real-valued alpha.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Pixels in row-major order. Length should be width * height.
    pub pixels: Vec<Rgba>,
}

impl Canvas {
    /// Create a canvas from dimensions and row-major pixel data.
    pub fn new(width: u32, height: u32, pixels: Vec<Rgba>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            width as usize * height as usize,
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create a canvas filled with a single color.
    pub fn filled(width: u32, height: u32, color: Rgba) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width as usize * height as usize],
        }
    }

    /// Create a canvas from packed 8-bit RGBA bytes (4 bytes per pixel).
    pub fn from_rgba8(width: u32, height: u32, bytes: &[u8]) -> Result<Self, TreeError> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(4))
            .ok_or(TreeError::ImageTooLarge { width, height })?;
        if bytes.len() != expected {
            return Err(TreeError::BufferSizeMismatch {
                expected,
                actual: bytes.len(),
            });
        }
        let pixels = bytes
            .chunks_exact(4)
            .map(|p| Rgba::from_rgba8([p[0], p[1], p[2], p[3]]))
            .collect();
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Pack into 8-bit RGBA bytes (4 bytes per pixel, row-major).
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|p| p.to_rgba8()).collect()
    }

    /// Create a canvas from an `image::RgbaImage`.
    pub fn from_rgba_image(img: &image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        let pixels = img.pixels().map(|p| Rgba::from(*p)).collect();
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Convert to an `image::RgbaImage`, quantizing alpha to 8 bits.
    pub fn to_rgba_image(&self) -> Option<image::RgbaImage> {
        image::RgbaImage::from_raw(self.width, self.height, self.to_rgba8())
    }

    /// Get the total number of pixels.
    pub fn pixel_count(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Check if this canvas has no pixels.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.pixels.is_empty()
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

impl Raster for Canvas {
    fn blank(width: u32, height: u32) -> Self {
        Self::filled(width, height, Rgba::default())
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn pixel(&self, x: u32, y: u32) -> Rgba {
        self.pixels[self.index(x, y)]
    }

    fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        let idx = self.index(x, y);
        self.pixels[idx] = color;
    }
}

impl Raster for image::RgbaImage {
    fn blank(width: u32, height: u32) -> Self {
        image::RgbaImage::new(width, height)
    }

    fn width(&self) -> u32 {
        self.dimensions().0
    }

    fn height(&self) -> u32 {
        self.dimensions().1
    }

    fn pixel(&self, x: u32, y: u32) -> Rgba {
        Rgba::from(*self.get_pixel(x, y))
    }

    fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        self.put_pixel(x, y, color.into());
    }
}

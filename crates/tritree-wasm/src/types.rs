//! WASM-compatible wrapper types for image data.
//!
//! JavaScript hands images around as packed 8-bit RGBA bytes (the layout of
//! `ImageData.data`). This module converts between that layout and the core
//! [`Canvas`] type.

use tritree_core::{Canvas, TreeError};
use wasm_bindgen::prelude::*;

/// An RGBA image wrapper for JavaScript.
///
/// # Memory Management
///
/// The pixel data is stored in WASM memory. Calling `pixels()` copies it to
/// JavaScript memory as a `Uint8Array`.
#[wasm_bindgen]
pub struct JsRaster {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsRaster {
    /// Create a new JsRaster from dimensions and pixel data.
    ///
    /// # Arguments
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `pixels` - RGBA pixel data (4 bytes per pixel, row-major order)
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> JsRaster {
        JsRaster {
            width,
            height,
            pixels,
        }
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the number of bytes in the pixel buffer (width * height * 4)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// Returns RGBA pixel data as Uint8Array.
    ///
    /// Note: This creates a copy of the pixel data.
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }
}

impl JsRaster {
    pub(crate) fn from_canvas(canvas: &Canvas) -> Self {
        Self {
            width: canvas.width,
            height: canvas.height,
            pixels: canvas.to_rgba8(),
        }
    }

    /// Convert to a core Canvas, checking the buffer length.
    pub(crate) fn to_canvas(&self) -> Result<Canvas, TreeError> {
        Canvas::from_rgba8(self.width, self.height, &self.pixels)
    }
}

/// Convert a core error into a JavaScript exception value.
pub(crate) fn to_js_error(err: TreeError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

//! Triple tree WASM bindings.
//!
//! The tree stays in WASM memory; JavaScript drives it through method calls
//! and pulls rendered pixels out with [`JsTripleTree::render`].
//!
//! # Example (TypeScript)
//!
//! ```typescript
//! const tree = new JsTripleTree(image.width, image.height, image.data);
//! tree.prune(12.0);
//! tree.rotate_ccw();
//! const out = tree.render();
//! ctx.putImageData(new ImageData(new Uint8ClampedArray(out.pixels()), out.width, out.height), 0, 0);
//! ```

use crate::edits::TreeEdits;
use crate::types::{to_js_error, JsRaster};
use tritree_core::{Canvas, TreeError, TripleTree};
use wasm_bindgen::prelude::*;

/// A ternary partition tree wrapper for JavaScript.
#[wasm_bindgen]
pub struct JsTripleTree {
    inner: TripleTree,
}

#[wasm_bindgen]
impl JsTripleTree {
    /// Build a tree from packed RGBA bytes.
    ///
    /// # Errors
    ///
    /// Throws if the image is empty or the buffer is not `width * height * 4`
    /// bytes long.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: &[u8]) -> Result<JsTripleTree, JsValue> {
        Self::from_rgba8(width, height, pixels).map_err(to_js_error)
    }

    /// Build a tree from an image wrapper.
    pub fn from_raster(image: &JsRaster) -> Result<JsTripleTree, JsValue> {
        let canvas = image.to_canvas().map_err(to_js_error)?;
        Self::from_canvas(&canvas).map_err(to_js_error)
    }

    /// Width of the rendered image, or 0 once cleared
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.dimensions().map_or(0, |(w, _)| w)
    }

    /// Height of the rendered image, or 0 once cleared
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.dimensions().map_or(0, |(_, h)| h)
    }

    /// Number of leaves in the tree
    pub fn num_leaves(&self) -> f64 {
        self.inner.num_leaves() as f64
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Collapse near-uniform regions within `tolerance`.
    pub fn prune(&mut self, tolerance: f64) -> Result<(), JsValue> {
        self.inner.prune(tolerance).map_err(to_js_error)
    }

    /// Mirror across the vertical axis
    pub fn flip_horizontal(&mut self) {
        self.inner.flip_horizontal();
    }

    /// Rotate 90 degrees counter-clockwise
    pub fn rotate_ccw(&mut self) {
        self.inner.rotate_ccw();
    }

    /// Apply a whole edit list (prune, then flip, then rotate).
    pub fn apply_edits(&mut self, edits: &TreeEdits) -> Result<(), JsValue> {
        self.inner.apply_edits(edits.inner()).map_err(to_js_error)
    }

    /// Render the leaves into a new RGBA image.
    pub fn render(&self) -> Result<JsRaster, JsValue> {
        self.render_raster().map_err(to_js_error)
    }

    /// Release every node. Rendering afterwards throws.
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Deep copy; edits to either tree never reach the other.
    pub fn clone_tree(&self) -> JsTripleTree {
        JsTripleTree {
            inner: self.inner.clone(),
        }
    }

    /// Serialize the full tree structure for storage
    pub fn to_json(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Restore a tree saved with `to_json`.
    ///
    /// Throws if the snapshot does not describe a well-formed tree.
    pub fn from_json(value: JsValue) -> Result<JsTripleTree, JsValue> {
        let inner: TripleTree =
            serde_wasm_bindgen::from_value(value).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self { inner })
    }
}

impl JsTripleTree {
    pub(crate) fn from_rgba8(width: u32, height: u32, pixels: &[u8]) -> Result<Self, TreeError> {
        let canvas = Canvas::from_rgba8(width, height, pixels)?;
        Self::from_canvas(&canvas)
    }

    fn from_canvas(canvas: &Canvas) -> Result<Self, TreeError> {
        Ok(Self {
            inner: TripleTree::from_raster(canvas)?,
        })
    }

    fn render_raster(&self) -> Result<JsRaster, TreeError> {
        let canvas: Canvas = self.inner.render()?;
        Ok(JsRaster::from_canvas(&canvas))
    }
}

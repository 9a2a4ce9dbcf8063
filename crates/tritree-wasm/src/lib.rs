//! Tritree WASM - WebAssembly bindings for tritree
//!
//! This crate exposes tritree-core's image trees to JavaScript/TypeScript
//! applications.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper for RGBA image data
//! - `tree` - The tree itself: build, prune, flip, rotate, render
//! - `edits` - Serializable edit lists applied in one call
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsTripleTree, TreeEdits } from '@tritree/wasm';
//!
//! await init();
//!
//! const tree = new JsTripleTree(width, height, rgbaBytes);
//! const edits = new TreeEdits();
//! edits.prune_tolerance = 10;
//! edits.quarter_turns_ccw = 1;
//! tree.apply_edits(edits);
//! const image = tree.render();
//! ```

use wasm_bindgen::prelude::*;

mod edits;
mod tree;
mod types;

pub use edits::TreeEdits;
pub use tree::JsTripleTree;
pub use types::JsRaster;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

//! Tritree Core - Ternary partition trees for images
//!
//! This crate decomposes an image into a tree of rectangles, each carrying
//! the average color of the pixels it covers. The tree supports lossy
//! compression by pruning, rendering back to pixels, and structural
//! mirror/rotate transforms that never resample pixel data.

pub mod blend;
pub mod color;
pub mod edits;
pub mod error;
pub mod raster;
pub mod tree;

pub use color::Rgba;
pub use edits::TreeEdits;
pub use error::TreeError;
pub use raster::{Canvas, Raster};
pub use tree::{Children, Node, Point, SplitAxis, TripleTree};

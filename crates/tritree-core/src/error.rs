//! Error types for tree construction and editing.

use thiserror::Error;

/// Error types for triple tree operations.
#[derive(Debug, Error, PartialEq)]
pub enum TreeError {
    /// The source image has no pixels to partition.
    #[error("Image has no pixels: {width}x{height}")]
    EmptyImage { width: u32, height: u32 },

    /// Prune tolerance must be a non-negative number.
    #[error("Invalid prune tolerance: {0}")]
    InvalidTolerance(f64),

    /// The tree has been cleared and holds no nodes.
    #[error("Tree is empty")]
    EmptyTree,

    /// The declared dimensions do not fit in addressable memory.
    #[error("Image too large: {width}x{height}")]
    ImageTooLarge { width: u32, height: u32 },

    /// A deserialized tree violates the partition invariants.
    #[error("Malformed tree: {0}")]
    MalformedTree(String),

    /// A packed pixel buffer does not match the declared dimensions.
    #[error("Pixel buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },
}

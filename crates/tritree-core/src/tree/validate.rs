//! Structural checks for trees that did not come from the builder.
//!
//! Snapshots are read back from storage or from JavaScript, so a loaded tree
//! is checked before anything renders or transforms it. Flip and rotate only
//! move rectangles and swap the symmetric outer children, so every valid tree
//! still splits each node into the exact segments the builder would produce
//! along the recorded axis.

use crate::error::TreeError;

use super::build::ternary_lengths;
use super::node::{Children, Node, SplitAxis};

impl Node {
    /// Check that this subtree is a well-formed partition of its rectangle.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::MalformedTree`] naming the first offending node.
    pub fn validate(&self) -> Result<(), TreeError> {
        if self.width == 0 || self.height == 0 {
            return Err(self.malformed("empty rectangle"));
        }
        if self.origin.x.checked_add(self.width).is_none()
            || self.origin.y.checked_add(self.height).is_none()
        {
            return Err(self.malformed("rectangle exceeds coordinate range"));
        }
        if !(0.0..=1.0).contains(&self.avg.a) {
            return Err(self.malformed("alpha outside 0..=1"));
        }

        let Some(axis) = self.split_axis() else {
            return Ok(());
        };
        let expected = self.expected_segments(axis)?;
        let actual: Vec<&Node> = self.children().collect();
        if actual.len() != expected.len() {
            return Err(self.malformed("wrong number of children"));
        }

        let mut offset = 0;
        for (child, len) in actual.into_iter().zip(expected) {
            let (origin, w, h) = axis.segment(self.origin, self.width, self.height, offset, len);
            if child.origin != origin || child.width != w || child.height != h {
                return Err(child.malformed("child does not tile its parent"));
            }
            child.validate()?;
            offset += len;
        }
        Ok(())
    }

    /// Segment lengths along `axis` in A, B, C order.
    fn expected_segments(&self, axis: SplitAxis) -> Result<Vec<u32>, TreeError> {
        match axis.length(self.width, self.height) {
            0 | 1 => Err(self.malformed("split of a single pixel")),
            2 => Ok(vec![1, 1]),
            length => Ok(ternary_lengths(length).to_vec()),
        }
    }

    fn malformed(&self, reason: &str) -> TreeError {
        TreeError::MalformedTree(format!(
            "{} at ({}, {}) size {}x{}",
            reason, self.origin.x, self.origin.y, self.width, self.height
        ))
    }
}

/// Serialized form of a tree, checked on the way in.
#[derive(serde::Deserialize)]
pub(crate) struct RawTree {
    pub(crate) root: Option<Node>,
}

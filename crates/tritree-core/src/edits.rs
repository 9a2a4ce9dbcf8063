//! Serializable edit lists for triple trees.
//!
//! Edits are plain data so they can be stored alongside an image and
//! replayed later. They are applied in a fixed order:
//! 1. Prune (lossy compression)
//! 2. Horizontal flip
//! 3. Counter-clockwise quarter turns
//!
//! Pruning first keeps the collapse decisions independent of orientation.

use serde::{Deserialize, Serialize};

use crate::error::TreeError;
use crate::tree::{validate_tolerance, TripleTree};

/// Edits to apply to a tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeEdits {
    /// Prune tolerance (color distance), or `None` to keep every leaf
    pub prune_tolerance: Option<f64>,
    /// Mirror across the vertical axis
    pub flip_horizontal: bool,
    /// Number of 90-degree counter-clockwise turns (taken modulo 4)
    pub quarter_turns_ccw: u8,
}

impl TreeEdits {
    /// Create an empty edit list
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if applying these edits would leave a tree unchanged
    pub fn is_default(&self) -> bool {
        self.prune_tolerance.is_none() && !self.flip_horizontal && self.quarter_turns_ccw % 4 == 0
    }

    /// Check that the edits can be applied.
    pub fn validate(&self) -> Result<(), TreeError> {
        match self.prune_tolerance {
            Some(tolerance) => validate_tolerance(tolerance),
            None => Ok(()),
        }
    }
}

impl TripleTree {
    /// Apply an edit list.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::InvalidTolerance`] before touching the tree if
    /// the prune tolerance is negative or NaN.
    pub fn apply_edits(&mut self, edits: &TreeEdits) -> Result<(), TreeError> {
        edits.validate()?;
        tracing::debug!(?edits, "applying tree edits");

        if let Some(tolerance) = edits.prune_tolerance {
            self.prune(tolerance)?;
        }
        if edits.flip_horizontal {
            self.flip_horizontal();
        }
        for _ in 0..edits.quarter_turns_ccw % 4 {
            self.rotate_ccw();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;
    use crate::raster::Canvas;

    fn test_image(width: u32, height: u32) -> Canvas {
        let mut pixels = Vec::with_capacity((width * height) as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(Rgba::opaque((x * 20) as u8, (y * 20) as u8, 0));
            }
        }
        Canvas::new(width, height, pixels)
    }

    #[test]
    fn test_default_edits() {
        let edits = TreeEdits::new();
        assert!(edits.is_default());
        assert!(edits.validate().is_ok());

        let mut full_turn = TreeEdits::default();
        full_turn.quarter_turns_ccw = 4;
        assert!(full_turn.is_default());
    }

    #[test]
    fn test_default_edits_leave_tree_unchanged() {
        let img = test_image(6, 4);
        let mut tree = TripleTree::from_raster(&img).unwrap();
        let before = tree.clone();
        tree.apply_edits(&TreeEdits::default()).unwrap();
        assert_eq!(tree, before);
    }

    #[test]
    fn test_invalid_tolerance_rejected_before_changes() {
        let img = test_image(6, 4);
        let mut tree = TripleTree::from_raster(&img).unwrap();
        let before = tree.clone();

        let mut edits = TreeEdits::default();
        edits.prune_tolerance = Some(-3.0);
        edits.flip_horizontal = true;
        assert_eq!(
            tree.apply_edits(&edits),
            Err(TreeError::InvalidTolerance(-3.0))
        );
        assert_eq!(tree, before);
    }

    #[test]
    fn test_apply_all_edits() {
        let img = test_image(6, 4);
        let mut tree = TripleTree::from_raster(&img).unwrap();

        let mut edits = TreeEdits::default();
        edits.prune_tolerance = Some(1e6);
        edits.flip_horizontal = true;
        edits.quarter_turns_ccw = 1;
        tree.apply_edits(&edits).unwrap();

        assert_eq!(tree.num_leaves(), 1);
        assert_eq!(tree.dimensions(), Some((4, 6)));
    }

    #[test]
    fn test_quarter_turns_modulo() {
        let img = test_image(5, 2);
        let mut tree = TripleTree::from_raster(&img).unwrap();
        let before = tree.clone();

        let mut edits = TreeEdits::default();
        edits.quarter_turns_ccw = 6;
        tree.apply_edits(&edits).unwrap();
        assert_eq!(tree.dimensions(), Some((5, 2)));

        edits.quarter_turns_ccw = 2;
        tree.apply_edits(&edits).unwrap();
        assert_eq!(tree, before);
    }

    #[test]
    fn test_edits_deserialize_with_missing_fields() {
        let edits: TreeEdits = serde_json::from_str(r#"{"flip_horizontal": true}"#).unwrap();
        assert!(edits.flip_horizontal);
        assert_eq!(edits.prune_tolerance, None);
        assert_eq!(edits.quarter_turns_ccw, 0);
    }

    #[test]
    fn test_edits_serialize_round_trip() {
        let edits = TreeEdits {
            prune_tolerance: Some(12.5),
            flip_horizontal: false,
            quarter_turns_ccw: 3,
        };
        let json = serde_json::to_string(&edits).unwrap();
        let parsed: TreeEdits = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, edits);
    }
}

//! Ternary partition trees over images.
//!
//! A [`TripleTree`] recursively divides an image into two or three strips
//! along the rectangle's longer side until every leaf is a single pixel.
//! Each node stores the weighted average color of its region, which makes
//! lossy compression a matter of collapsing subtrees whose leaves are all
//! close to that average.
//!
//! # Operations
//!
//! - **Build**: [`TripleTree::from_raster`] partitions a whole image
//! - **Render**: [`TripleTree::render`] paints the leaves into a new image
//! - **Prune**: [`TripleTree::prune`] collapses near-uniform subtrees
//! - **Mirror / Rotate**: [`TripleTree::flip_horizontal`] and
//!   [`TripleTree::rotate_ccw`] restructure the tree without touching pixels
//!
//! # Ownership
//!
//! Every node owns its children exclusively. Cloning a tree copies every
//! node; dropping or clearing it releases every node exactly once, children
//! before parents.

mod build;
mod node;
mod prune;
mod render;
mod transform;
mod validate;

pub use build::{build_node, ternary_lengths};
pub use node::{Children, Node, Point, SplitAxis};
pub use render::render;
pub use transform::{flip_horizontal, rotate_ccw};

use serde::{Deserialize, Serialize};

use crate::error::TreeError;
use crate::raster::Raster;

use validate::RawTree;

/// An image decomposed into a ternary partition tree.
///
/// The tree is empty only after [`TripleTree::clear`]. Deserialized trees
/// are checked with [`Node::validate`] and rejected if malformed.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTree")]
pub struct TripleTree {
    root: Option<Node>,
}

impl TripleTree {
    /// Build a tree covering every pixel of `image`.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::EmptyImage`] if either dimension is zero.
    pub fn from_raster<R: Raster + ?Sized>(image: &R) -> Result<Self, TreeError> {
        let (width, height) = (image.width(), image.height());
        if width == 0 || height == 0 {
            return Err(TreeError::EmptyImage { width, height });
        }

        let _span = tracing::info_span!("tritree::build", width, height).entered();
        let root = build_node(image, Point::new(0, 0), width, height);
        tracing::debug!(leaves = root.num_leaves(), "built tree");

        Ok(Self { root: Some(root) })
    }

    /// Wrap an already built subtree.
    pub fn from_root(root: Node) -> Self {
        Self { root: Some(root) }
    }

    pub fn root(&self) -> Option<&Node> {
        self.root.as_ref()
    }

    pub fn root_mut(&mut self) -> Option<&mut Node> {
        self.root.as_mut()
    }

    /// Check if the tree has been cleared.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Width and height of the rendered image, if the tree is not empty.
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        self.root.as_ref().map(|r| (r.width, r.height))
    }

    /// Paint every leaf into a new image the size of the root.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::EmptyTree`] after [`TripleTree::clear`].
    pub fn render<R: Raster>(&self) -> Result<R, TreeError> {
        self.root
            .as_ref()
            .map(render::<R>)
            .ok_or(TreeError::EmptyTree)
    }

    /// Number of leaves; zero for an empty tree.
    pub fn num_leaves(&self) -> u64 {
        self.root.as_ref().map_or(0, Node::num_leaves)
    }

    /// Collapse every maximal subtree whose leaves all lie within
    /// `tolerance` of the subtree's average color.
    ///
    /// Intended to run once on a freshly built tree; running it again is
    /// harmless.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::InvalidTolerance`] for negative or NaN
    /// tolerances. The tree is left untouched in that case.
    pub fn prune(&mut self, tolerance: f64) -> Result<(), TreeError> {
        validate_tolerance(tolerance)?;
        let Some(root) = self.root.as_mut() else {
            return Ok(());
        };

        let _span = tracing::info_span!("tritree::prune", tolerance).entered();
        let before = root.num_leaves();
        let collapsed = root.prune(tolerance);
        tracing::debug!(
            before,
            after = root.num_leaves(),
            collapsed,
            "pruned tree"
        );
        Ok(())
    }

    /// Mirror the tree so that it renders flipped across a vertical axis.
    pub fn flip_horizontal(&mut self) {
        if let Some(root) = self.root.as_mut() {
            let _span = tracing::info_span!("tritree::flip_horizontal").entered();
            flip_horizontal(root);
        }
    }

    /// Restructure the tree so that it renders rotated 90 degrees
    /// counter-clockwise.
    pub fn rotate_ccw(&mut self) {
        if let Some(root) = self.root.as_mut() {
            let _span = tracing::info_span!("tritree::rotate_ccw").entered();
            rotate_ccw(root);
        }
    }

    /// Release every node. The tree is empty afterwards.
    pub fn clear(&mut self) {
        if let Some(root) = self.root.take() {
            if tracing::enabled!(tracing::Level::DEBUG) {
                tracing::debug!(released = root.node_count(), "cleared tree");
            }
            drop(root);
        }
    }
}

impl Clone for TripleTree {
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
        }
    }

    /// Release this tree's nodes, then deep-copy `source`.
    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.root = source.root.clone();
    }
}

impl TryFrom<RawTree> for TripleTree {
    type Error = TreeError;

    fn try_from(raw: RawTree) -> Result<Self, Self::Error> {
        if let Some(root) = &raw.root {
            root.validate()?;
            let pixels = u64::from(root.width) * u64::from(root.height);
            if usize::try_from(pixels).is_err() {
                return Err(TreeError::ImageTooLarge {
                    width: root.width,
                    height: root.height,
                });
            }
        }
        Ok(Self { root: raw.root })
    }
}

pub(crate) fn validate_tolerance(tolerance: f64) -> Result<(), TreeError> {
    if tolerance.is_nan() || tolerance < 0.0 {
        return Err(TreeError::InvalidTolerance(tolerance));
    }
    Ok(())
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
                let v = ((x * 40 + y * 90) % 256) as u8;
                pixels.push(Rgba::opaque(v, 255 - v, v / 2));
            }
        }
        Canvas::new(width, height, pixels)
    }

    /// Two flat halves: left black, right white.
    fn two_tone(width: u32, height: u32) -> Canvas {
        let mut pixels = Vec::with_capacity((width * height) as usize);
        for _y in 0..height {
            for x in 0..width {
                pixels.push(if x < width / 2 {
                    Rgba::opaque(0, 0, 0)
                } else {
                    Rgba::opaque(255, 255, 255)
                });
            }
        }
        Canvas::new(width, height, pixels)
    }

    #[test]
    fn test_from_raster_rejects_empty() {
        let img = Canvas::new(0, 5, vec![]);
        assert_eq!(
            TripleTree::from_raster(&img),
            Err(TreeError::EmptyImage {
                width: 0,
                height: 5
            })
        );
    }

    #[test]
    fn test_leaf_count_matches_pixels() {
        let img = test_image(17, 9);
        let tree = TripleTree::from_raster(&img).unwrap();
        assert_eq!(tree.num_leaves(), 17 * 9);
        assert_eq!(tree.dimensions(), Some((17, 9)));
    }

    #[test]
    fn test_render_round_trip() {
        let img = test_image(10, 11);
        let tree = TripleTree::from_raster(&img).unwrap();
        let out: Canvas = tree.render().unwrap();
        assert_eq!(out, img);
    }

    #[test]
    fn test_from_rgba_image() {
        let mut img = image::RgbaImage::new(5, 3);
        for (x, y, p) in img.enumerate_pixels_mut() {
            *p = image::Rgba([x as u8 * 50, y as u8 * 80, 7, 200]);
        }
        let tree = TripleTree::from_raster(&img).unwrap();
        let out: image::RgbaImage = tree.render().unwrap();
        assert_eq!(out, img);
    }

    #[test]
    fn test_prune_rejects_bad_tolerance() {
        let img = test_image(4, 4);
        let mut tree = TripleTree::from_raster(&img).unwrap();
        assert_eq!(tree.prune(-1.0), Err(TreeError::InvalidTolerance(-1.0)));
        assert!(tree.prune(f64::NAN).is_err());
        assert_eq!(tree.num_leaves(), 16);
    }

    #[test]
    fn test_prune_huge_tolerance() {
        let img = test_image(12, 5);
        let mut tree = TripleTree::from_raster(&img).unwrap();
        tree.prune(1e9).unwrap();
        assert_eq!(tree.num_leaves(), 1);
    }

    #[test]
    fn test_prune_two_tone() {
        let img = two_tone(6, 3);
        let mut tree = TripleTree::from_raster(&img).unwrap();
        tree.prune(0.0).unwrap();
        assert!(tree.num_leaves() < 18);
        let out: Canvas = tree.render().unwrap();
        assert_eq!(out, img);
    }

    #[test]
    fn test_flip_and_rotate_through_tree() {
        let img = test_image(5, 3);
        let mut tree = TripleTree::from_raster(&img).unwrap();
        tree.rotate_ccw();
        assert_eq!(tree.dimensions(), Some((3, 5)));
        tree.flip_horizontal();
        tree.flip_horizontal();
        for _ in 0..3 {
            tree.rotate_ccw();
        }
        let out: Canvas = tree.render().unwrap();
        assert_eq!(out, img);
    }

    #[test]
    fn test_clear_empties_tree() {
        let img = test_image(3, 3);
        let mut tree = TripleTree::from_raster(&img).unwrap();
        tree.clear();
        assert!(tree.is_empty());
        assert_eq!(tree.num_leaves(), 0);
        assert_eq!(tree.render::<Canvas>(), Err(TreeError::EmptyTree));

        // Mutations on an empty tree are no-ops
        tree.prune(1.0).unwrap();
        tree.flip_horizontal();
        tree.rotate_ccw();
        tree.clear();
        assert!(tree.is_empty());
    }

    #[test]
    fn test_copy_is_independent() {
        let img = test_image(9, 6);
        let original = TripleTree::from_raster(&img).unwrap();
        let mut copy = original.clone();
        assert_eq!(copy, original);

        copy.prune(1e9).unwrap();
        copy.rotate_ccw();
        assert_eq!(copy.num_leaves(), 1);
        assert_eq!(original.num_leaves(), 54);
        let out: Canvas = original.render().unwrap();
        assert_eq!(out, img);
    }

    #[test]
    fn test_clone_from_replaces_contents() {
        let small = TripleTree::from_raster(&test_image(2, 2)).unwrap();
        let mut target = TripleTree::from_raster(&test_image(8, 8)).unwrap();
        target.clone_from(&small);
        assert_eq!(target, small);
        assert_eq!(target.num_leaves(), 4);
    }

    #[test]
    fn test_clone_from_empty_source() {
        let mut empty = TripleTree::from_raster(&test_image(2, 2)).unwrap();
        empty.clear();
        let mut target = TripleTree::from_raster(&test_image(3, 3)).unwrap();
        target.clone_from(&empty);
        assert!(target.is_empty());
    }

    #[test]
    fn test_from_root_wraps_subtree() {
        let img = test_image(4, 2);
        let tree = TripleTree::from_raster(&img).unwrap();
        let root = tree.root().unwrap();
        assert_eq!(root.split_axis(), Some(SplitAxis::Width));
        assert_eq!(TripleTree::from_root(root.clone()), tree);
    }

    #[test]
    fn test_json_snapshot_rejects_child_outside_root() {
        let leaf = |x: u32| {
            serde_json::json!({
                "origin": { "x": x, "y": 0 },
                "width": 1,
                "height": 1,
                "avg": { "r": 0, "g": 0, "b": 0, "a": 1.0 },
                "children": "Leaf"
            })
        };
        let value = serde_json::json!({
            "root": {
                "origin": { "x": 0, "y": 0 },
                "width": 1,
                "height": 1,
                "avg": { "r": 0, "g": 0, "b": 0, "a": 1.0 },
                "children": { "Binary": { "axis": "Width", "a": leaf(5), "c": leaf(6) } }
            }
        });
        let err = serde_json::from_value::<TripleTree>(value).unwrap_err();
        assert!(err.to_string().contains("Malformed tree"), "{}", err);
    }

    #[test]
    fn test_json_snapshot_rejects_tampered_rectangle() {
        let img = test_image(6, 3);
        let tree = TripleTree::from_raster(&img).unwrap();
        let mut value = serde_json::to_value(&tree).unwrap();
        value["root"]["width"] = serde_json::json!(7);
        assert!(serde_json::from_value::<TripleTree>(value).is_err());
    }

    #[test]
    fn test_json_snapshot_empty_tree() {
        let mut tree = TripleTree::from_raster(&test_image(2, 2)).unwrap();
        tree.clear();
        let json = serde_json::to_string(&tree).unwrap();
        let restored: TripleTree = serde_json::from_str(&json).unwrap();
        assert!(restored.is_empty());
    }

    #[test]
    fn test_json_snapshot_round_trip() {
        let img = test_image(5, 4);
        let mut tree = TripleTree::from_raster(&img).unwrap();
        tree.prune(60.0).unwrap();
        tree.rotate_ccw();

        let json = serde_json::to_string(&tree).unwrap();
        let restored: TripleTree = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, tree);
        let a: Canvas = restored.render().unwrap();
        let b: Canvas = tree.render().unwrap();
        assert_eq!(a, b);
    }
}

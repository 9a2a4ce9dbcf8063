//! Geometric transforms applied to the tree structure.
//!
//! Mirroring and rotating never touch pixel data or averages: they move
//! rectangles and reorder children so that rendering the transformed tree
//! gives the transformed image.
//!
//! # Coordinate System
//!
//! Every node is repositioned with a closed-form formula relative to the
//! root's frame `(rx, ry, W, H)`, so no pass needs to patch coordinates of
//! subtrees that were already moved. For a node at local offset
//! `(lx, ly) = (x - rx, y - ry)` with size `w` x `h`:
//!
//! ```text
//! mirror:      (lx, ly)  ->  (W - lx - w, ly)            size  w x h
//! rotate CCW:  (lx, ly)  ->  (ly, W - lx - w)            size  h x w
//! ```
//!
//! The root keeps its origin in both cases.
//!
//! # Child Order
//!
//! Children stay ordered A, B, C by increasing coordinate along the split
//! axis. A horizontal mirror reverses width-split children, and a CCW quarter
//! turn sends width-split children from left-to-right to bottom-to-top, so
//! in both cases A and C trade places. Height-split children keep their
//! order. Rotation also transposes the recorded split axis.

use super::node::{Children, Node, Point, SplitAxis};

/// The root rectangle a transform is expressed against.
#[derive(Debug, Clone, Copy)]
struct Frame {
    origin: Point,
    width: u32,
}

impl Frame {
    fn of(root: &Node) -> Self {
        Self {
            origin: root.origin,
            width: root.width,
        }
    }

    /// Local x after mirroring a span of `w` pixels starting at local `lx`.
    #[inline]
    fn reflect(&self, lx: u32, w: u32) -> u32 {
        self.width - lx - w
    }
}

/// Mirror a tree across the vertical axis through the center of `root`.
///
/// Applying this twice restores the original tree exactly.
pub fn flip_horizontal(root: &mut Node) {
    let frame = Frame::of(root);
    mirror(root, &frame);
}

/// Rotate a tree 90 degrees counter-clockwise within the frame of `root`.
///
/// The root keeps its origin; its width and height are exchanged. Applying
/// this four times restores the original tree exactly.
pub fn rotate_ccw(root: &mut Node) {
    let frame = Frame::of(root);
    rotate(root, &frame);
}

fn mirror(node: &mut Node, frame: &Frame) {
    let lx = node.origin.x - frame.origin.x;
    node.origin.x = frame.origin.x + frame.reflect(lx, node.width);

    for child in node.children_mut() {
        mirror(child, frame);
    }

    if node.split_axis() == Some(SplitAxis::Width) {
        swap_outer(&mut node.children);
    }
}

fn rotate(node: &mut Node, frame: &Frame) {
    let lx = node.origin.x - frame.origin.x;
    let ly = node.origin.y - frame.origin.y;
    node.origin = Point::new(
        frame.origin.x + ly,
        frame.origin.y + frame.reflect(lx, node.width),
    );
    std::mem::swap(&mut node.width, &mut node.height);

    for child in node.children_mut() {
        rotate(child, frame);
    }

    if node.split_axis() == Some(SplitAxis::Width) {
        swap_outer(&mut node.children);
    }
    transpose_axis(&mut node.children);
}

/// Exchange the A and C slots. B, if any, stays in the middle.
fn swap_outer(children: &mut Children) {
    match children {
        Children::Leaf => {}
        Children::Binary { a, c, .. } | Children::Ternary { a, c, .. } => {
            std::mem::swap(a, c);
        }
    }
}

fn transpose_axis(children: &mut Children) {
    match children {
        Children::Leaf => {}
        Children::Binary { axis, .. } | Children::Ternary { axis, .. } => {
            *axis = axis.transposed();
        }
    }
}

//! Painting a tree back into pixels.
//!
//! Leaves cover disjoint rectangles that together tile the root, so each
//! output pixel is written exactly once and traversal order does not matter.

use crate::raster::Raster;

use super::node::{Node, Point};

/// Render a subtree into a fresh raster the size of `root`.
///
/// Pixels are placed relative to `root.origin`, so a subtree built at an
/// offset renders into a canvas of its own size.
pub fn render<R: Raster>(root: &Node) -> R {
    let mut out = R::blank(root.width, root.height);
    paint(root, root.origin, &mut out);
    out
}

fn paint<R: Raster + ?Sized>(node: &Node, base: Point, out: &mut R) {
    if node.is_leaf() {
        let x0 = node.origin.x - base.x;
        let y0 = node.origin.y - base.y;
        for y in y0..y0 + node.height {
            for x in x0..x0 + node.width {
                out.set_pixel(x, y, node.avg);
            }
        }
        return;
    }

    for child in node.children() {
        paint(child, base, out);
    }
}

//! Recursive construction of a tree from an image.
//!
//! # Partitioning
//!
//! Each rectangle is split along its longer side (width on ties):
//! - length 2: two equal halves (A, C)
//! - length 3 or more: three contiguous segments (A, B, C) sized by the
//!   remainder of the length divided by three
//!
//! ```text
//! d mod 3 = 0  ->  base,   base,   base
//! d mod 3 = 1  ->  base,   base+1, base
//! d mod 3 = 2  ->  base+1, base,   base+1
//! ```
//!
//! Recursion bottoms out at single pixels, so every leaf of a built tree is
//! exactly one pixel and every average is computed bottom-up from them.

use crate::blend::{blend2, blend3};
use crate::raster::Raster;

use super::node::{Children, Node, Point, SplitAxis};

/// Segment lengths for a ternary split of `length` pixels, in A, B, C order.
///
/// `length` must be at least 3.
///
/// # Example
///
/// ```
/// use tritree_core::tree::ternary_lengths;
///
/// assert_eq!(ternary_lengths(10), [3, 4, 3]);
/// assert_eq!(ternary_lengths(11), [4, 3, 4]);
/// ```
pub fn ternary_lengths(length: u32) -> [u32; 3] {
    debug_assert!(length >= 3, "ternary split needs at least 3 pixels");
    let base = length / 3;
    match length % 3 {
        0 => [base, base, base],
        1 => [base, base + 1, base],
        _ => [base + 1, base, base + 1],
    }
}

/// Build the subtree covering `width` x `height` pixels of `image` starting
/// at `origin`.
///
/// Both dimensions must be at least 1 and the rectangle must lie within the
/// image.
pub fn build_node<R: Raster + ?Sized>(image: &R, origin: Point, width: u32, height: u32) -> Node {
    if width == 1 && height == 1 {
        return Node::leaf(origin, image.pixel(origin.x, origin.y));
    }

    let axis = SplitAxis::for_extent(width, height);
    let length = axis.length(width, height);

    let child = |offset: u32, len: u32| {
        let (o, w, h) = axis.segment(origin, width, height, offset, len);
        Box::new(build_node(image, o, w, h))
    };

    let (avg, children) = if length == 2 {
        let a = child(0, 1);
        let c = child(1, 1);
        (blend2(&a, &c), Children::Binary { axis, a, c })
    } else {
        let [la, lb, lc] = ternary_lengths(length);
        let a = child(0, la);
        let b = child(la, lb);
        let c = child(la + lb, lc);
        (blend3(&a, &b, &c), Children::Ternary { axis, a, b, c })
    };

    Node {
        origin,
        width,
        height,
        avg,
        children,
    }
}

//! Pixel-count-weighted color averaging.
//!
//! A parent's average color is derived from its children's averages, each
//! weighted by the number of pixels the child covers. Blending bottom-up
//! therefore yields the true mean of every covered pixel without revisiting
//! the image.
//!
//! # Rounding
//!
//! Color channels use integer division, truncating toward zero, and are
//! clamped to 0-255. Alpha is averaged as a real number and clamped to
//! 0.0-1.0.

use crate::color::Rgba;
use crate::tree::Node;

/// Average the colors of two sibling nodes.
///
/// Black and white halves of a 2x1 image blend to gray 127 (255 / 2,
/// truncated).
pub fn blend2(a: &Node, c: &Node) -> Rgba {
    blend(&[a, c])
}

/// Average the colors of three sibling nodes.
pub fn blend3(a: &Node, b: &Node, c: &Node) -> Rgba {
    blend(&[a, b, c])
}

fn blend(parts: &[&Node]) -> Rgba {
    let mut total = 0u64;
    let mut sum = [0u64; 3];
    let mut alpha = 0.0f64;

    for node in parts {
        let weight = node.pixel_count();
        total += weight;
        sum[0] += weight * node.avg.r as u64;
        sum[1] += weight * node.avg.g as u64;
        sum[2] += weight * node.avg.b as u64;
        alpha += weight as f64 * node.avg.a;
    }

    debug_assert!(total > 0, "blend requires at least one pixel");

    Rgba {
        r: (sum[0] / total).min(255) as u8,
        g: (sum[1] / total).min(255) as u8,
        b: (sum[2] / total).min(255) as u8,
        a: (alpha / total as f64).clamp(0.0, 1.0),
    }
}

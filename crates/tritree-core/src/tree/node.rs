//! Tree nodes: a rectangle, its average color, and its children.

use serde::{Deserialize, Serialize};

use crate::color::Rgba;

/// Integer pixel coordinate. Origin is the top-left corner of the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

impl Point {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Dimension along which an internal node divides its rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SplitAxis {
    /// Children sit side by side, ordered left to right.
    Width,
    /// Children are stacked, ordered top to bottom.
    Height,
}

impl SplitAxis {
    /// Axis used to split a fresh `width` x `height` rectangle: the longer
    /// side, preferring width on ties.
    #[inline]
    pub fn for_extent(width: u32, height: u32) -> Self {
        if width >= height {
            SplitAxis::Width
        } else {
            SplitAxis::Height
        }
    }

    /// The axis after a quarter turn.
    #[inline]
    pub fn transposed(self) -> Self {
        match self {
            SplitAxis::Width => SplitAxis::Height,
            SplitAxis::Height => SplitAxis::Width,
        }
    }

    /// Length of a `width` x `height` rectangle along this axis.
    #[inline]
    pub fn length(self, width: u32, height: u32) -> u32 {
        match self {
            SplitAxis::Width => width,
            SplitAxis::Height => height,
        }
    }

    /// The slice of a rectangle starting `offset` pixels along this axis and
    /// spanning `length` pixels. The other dimension is unchanged.
    ///
    /// Returns `(origin, width, height)` of the slice.
    pub fn segment(
        self,
        origin: Point,
        width: u32,
        height: u32,
        offset: u32,
        length: u32,
    ) -> (Point, u32, u32) {
        match self {
            SplitAxis::Width => (Point::new(origin.x + offset, origin.y), length, height),
            SplitAxis::Height => (Point::new(origin.x, origin.y + offset), width, length),
        }
    }
}

/// The children of a node.
///
/// `A` is always the child nearest the origin along the split axis and `C`
/// the farthest; `B`, when present, lies between them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Children {
    Leaf,
    Binary {
        axis: SplitAxis,
        a: Box<Node>,
        c: Box<Node>,
    },
    Ternary {
        axis: SplitAxis,
        a: Box<Node>,
        b: Box<Node>,
        c: Box<Node>,
    },
}

/// A rectangular region of an image and its average color.
///
/// Internal nodes partition their rectangle among two or three children
/// along a single axis. Leaves paint their whole rectangle with `avg`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Top-left corner in image coordinates.
    pub origin: Point,
    /// Horizontal extent in pixels.
    pub width: u32,
    /// Vertical extent in pixels.
    pub height: u32,
    /// Pixel-count-weighted mean color of the region.
    pub avg: Rgba,
    pub children: Children,
}

impl Node {
    /// A single-pixel leaf.
    pub fn leaf(origin: Point, color: Rgba) -> Self {
        Self {
            origin,
            width: 1,
            height: 1,
            avg: color,
            children: Children::Leaf,
        }
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self.children, Children::Leaf)
    }

    /// Number of pixels covered by this node's rectangle.
    #[inline]
    pub fn pixel_count(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Axis the children are laid out along, or `None` for a leaf.
    pub fn split_axis(&self) -> Option<SplitAxis> {
        match self.children {
            Children::Leaf => None,
            Children::Binary { axis, .. } | Children::Ternary { axis, .. } => Some(axis),
        }
    }

    /// Present children in A, B, C order.
    pub fn children(&self) -> impl Iterator<Item = &Node> {
        let (a, b, c) = match &self.children {
            Children::Leaf => (None, None, None),
            Children::Binary { a, c, .. } => (Some(a.as_ref()), None, Some(c.as_ref())),
            Children::Ternary { a, b, c, .. } => {
                (Some(a.as_ref()), Some(b.as_ref()), Some(c.as_ref()))
            }
        };
        a.into_iter().chain(b).chain(c)
    }

    /// Present children in A, B, C order, mutably.
    pub fn children_mut(&mut self) -> impl Iterator<Item = &mut Node> {
        let (a, b, c) = match &mut self.children {
            Children::Leaf => (None, None, None),
            Children::Binary { a, c, .. } => (Some(a.as_mut()), None, Some(c.as_mut())),
            Children::Ternary { a, b, c, .. } => {
                (Some(a.as_mut()), Some(b.as_mut()), Some(c.as_mut()))
            }
        };
        a.into_iter().chain(b).chain(c)
    }

    /// Number of leaves in this subtree.
    ///
    /// For a freshly built tree this equals `width * height`.
    pub fn num_leaves(&self) -> u64 {
        if self.is_leaf() {
            return 1;
        }
        self.children().map(Node::num_leaves).sum()
    }

    /// Number of nodes in this subtree, including this one.
    pub fn node_count(&self) -> u64 {
        1 + self.children().map(Node::node_count).sum::<u64>()
    }

    /// Length of the longest root-to-leaf path, counting this node as 1.
    pub fn depth(&self) -> u32 {
        1 + self.children().map(Node::depth).max().unwrap_or(0)
    }

    /// Drop every descendant, turning this node into a leaf that keeps its
    /// rectangle and average color.
    pub fn collapse(&mut self) {
        self.children = Children::Leaf;
    }
}

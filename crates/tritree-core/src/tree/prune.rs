//! Lossy compression by collapsing near-uniform subtrees.
//!
//! A subtree is collapsed when every one of its leaves lies within the
//! tolerance of the subtree root's own average color. The test is made
//! top-down, so collapses happen as high in the tree as possible; a node
//! that fails the test hands the decision to each of its children, which
//! are judged against their own averages.

use crate::color::Rgba;

use super::node::Node;

impl Node {
    /// Collapse every maximal subtree whose leaves are all within
    /// `tolerance` of that subtree's average.
    ///
    /// Collapsed nodes keep their rectangle and average. Leaves are left
    /// as they are, so pruning a pruned tree again is safe.
    ///
    /// Returns the number of subtrees collapsed.
    pub fn prune(&mut self, tolerance: f64) -> u64 {
        if self.is_leaf() {
            return 0;
        }

        if self.within_tolerance(&self.avg, tolerance) {
            tracing::trace!(
                x = self.origin.x,
                y = self.origin.y,
                width = self.width,
                height = self.height,
                "collapsing subtree"
            );
            self.collapse();
            return 1;
        }

        self.children_mut().map(|child| child.prune(tolerance)).sum()
    }

    /// True when every leaf of this subtree is within `tolerance` of
    /// `target`.
    pub fn within_tolerance(&self, target: &Rgba, tolerance: f64) -> bool {
        if self.is_leaf() {
            return self.avg.distance_to(target) <= tolerance;
        }
        self.children()
            .all(|child| child.within_tolerance(target, tolerance))
    }
}

//! src/bsp/bsp_node.rs

use crate::bsp::Space;

/// A node in the space-partition tree. Each node has:
/// - The `area` it covers.
/// - Optionally a `left` child and a `right` child.
///
/// A node is a leaf iff it has no children; internal nodes always own
/// exactly two. The constructors below are the only way the partitioner
/// builds nodes, so a one-child node never occurs.
#[derive(Debug)]
pub struct SpaceNode {
    pub area: Space,
    pub left: Option<Box<SpaceNode>>,  // Child on the near side of the split, or None if leaf
    pub right: Option<Box<SpaceNode>>, // Child on the far side of the split, or None if leaf
}

impl SpaceNode {
    /// Create a leaf node covering the given area.
    pub fn leaf(area: Space) -> Self {
        SpaceNode {
            area,
            left: None,
            right: None,
        }
    }

    /// Create an internal node owning both halves of a split.
    pub fn branch(area: Space, left: SpaceNode, right: SpaceNode) -> Self {
        SpaceNode {
            area,
            left: Some(Box::new(left)),
            right: Some(Box::new(right)),
        }
    }

    /// Returns `true` if `self` is a leaf (i.e. has no children).
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Depth-first walk over the leaf spaces, left child before right.
    /// This is the traversal a map builder performs to collect the final
    /// rooms out of the tree.
    pub fn visit_leaves<F>(&self, visit: &mut F)
    where
        F: FnMut(&Space),
    {
        match (&self.left, &self.right) {
            (Some(left), Some(right)) => {
                left.visit_leaves(visit);
                right.visit_leaves(visit);
            }
            _ => visit(&self.area),
        }
    }

    /// Collect the leaf spaces in depth-first order.
    pub fn leaves(&self) -> Vec<Space> {
        let mut out = Vec::new();
        self.visit_leaves(&mut |space| out.push(*space));
        out
    }

    pub fn leaf_count(&self) -> usize {
        let mut count = 0;
        self.visit_leaves(&mut |_| count += 1);
        count
    }

    /// Height of the tree in edges; a leaf has depth 0.
    pub fn depth(&self) -> usize {
        match (&self.left, &self.right) {
            (Some(left), Some(right)) => 1 + left.depth().max(right.depth()),
            _ => 0,
        }
    }
}

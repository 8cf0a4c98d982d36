//! General and binary trees, traversals, and the search-tree layer
//! that the ordered maps are built on.

pub mod binary_tree;
pub mod general_tree;
pub mod search;
pub mod traversal;

pub use binary_tree::BinaryTree;
pub use general_tree::GeneralTree;
pub use search::{Cursor, Iterate, Keyed, SearchTree};
pub use traversal::{Phase, Traversal, Visit};

use crate::{Position, Result};

/// Used for choosing a child of a node.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Returns the other side.
    pub fn flip(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

impl std::ops::Not for Side {
    type Output = Side;
    fn not(self) -> Side {
        self.flip()
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// Operations shared by every positional tree.
///
/// Implementors only provide navigation. Depth, height, the
/// traversals and the Euler tour are derived from it.
pub trait Tree {
    type Element;

    /// Number of nodes.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn root(&self) -> Option<Position>;

    fn element(&self, position: Position) -> Result<&Self::Element>;

    fn parent(&self, position: Position) -> Result<Option<Position>>;

    /// The child slots of a node, in order.
    /// Binary trees always report two slots, with `None` for an absent child,
    /// so that a lone right child is still reported as the right one.
    fn child_slots(&self, position: Position) -> Result<Vec<Option<Position>>>;

    fn children(&self, position: Position) -> Result<Vec<Position>> {
        Ok(self.child_slots(position)?.into_iter().flatten().collect())
    }

    fn num_children(&self, position: Position) -> Result<usize> {
        Ok(self.child_slots(position)?.iter().flatten().count())
    }

    fn is_root(&self, position: Position) -> Result<bool> {
        Ok(self.parent(position)?.is_none())
    }

    fn is_leaf(&self, position: Position) -> Result<bool> {
        Ok(self.num_children(position)? == 0)
    }

    /// Number of ancestors of the node. The root has depth 0.
    fn depth(&self, position: Position) -> Result<usize> {
        let mut depth = 0;
        let mut walk = self.parent(position)?;
        while let Some(parent) = walk {
            depth += 1;
            walk = self.parent(parent)?;
        }
        Ok(depth)
    }

    /// Height of the subtree under the node. Leaves have height 0.
    fn height_of(&self, position: Position) -> Result<usize> {
        let mut height = 0;
        for child in self.children(position)? {
            height = height.max(1 + self.height_of(child)?);
        }
        Ok(height)
    }

    /// Height of the whole tree, `0` if it is empty.
    fn height(&self) -> usize {
        match self.root() {
            None => 0,
            Some(root) => self
                .height_of(root)
                .expect(traversal::TRAVERSAL_ERROR),
        }
    }

    fn preorder(&self) -> Traversal<'_, Self>
    where
        Self: Sized,
    {
        Traversal::preorder(self)
    }

    /// Visits the first child subtree, then the node, then the rest of the children.
    fn inorder(&self) -> Traversal<'_, Self>
    where
        Self: Sized,
    {
        Traversal::inorder(self)
    }

    fn postorder(&self) -> Traversal<'_, Self>
    where
        Self: Sized,
    {
        Traversal::postorder(self)
    }

    /// Runs an Euler tour, calling `visit` on every node before its children
    /// ([`Phase::Pre`]), after its first child slot ([`Phase::In`]) and after all of them
    /// ([`Phase::Post`]). The value returned by the post visit of a node is handed to its
    /// parent in [`Visit::results`]; values returned by the other phases are discarded.
    ///
    /// Returns the post result of the root, or `None` for an empty tree.
    fn euler_tour<R, F>(&self, visit: F) -> Option<R>
    where
        Self: Sized,
        F: FnMut(&Visit<'_, Self::Element, R>) -> R,
    {
        traversal::euler_tour(self, visit)
    }
}

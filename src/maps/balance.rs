//! The seam between the ordered-map engine and its rebalancing strategies.

use crate::trees::{BinaryTree, Side};
use crate::{Position, Result};

/// What the engine reports to a strategy after it structurally removed a node.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Removal<M> {
    /// The parent of the removed node, `None` if it was the root.
    pub parent: Option<Position>,
    /// Which child of `parent` the removed node was. Its only child, if it had one,
    /// now sits in that slot.
    pub side: Option<Side>,
    /// The algorithm data the removed node carried.
    pub alg_data: M,
}

/// A rebalancing strategy for [`TreeMap`](super::TreeMap).
///
/// The engine keeps the tree ordered and calls these hooks after every access.
/// Hooks may change the shape of the tree only through
/// [`BinaryTree::rotate`] and [`BinaryTree::restructure`], which preserve the ordering,
/// and may freely change the algorithm data of the nodes.
///
/// An error returned from a hook means the tree was found in a state the strategy
/// can not be in, and the engine panics on it.
pub trait Balance {
    /// Per-node data. Fresh nodes get the default value.
    type Meta: Default;

    /// Called after `set`, with the inserted or overwritten node.
    fn on_add<T>(&mut self, tree: &mut BinaryTree<T, Self::Meta>, position: Position)
        -> Result<()>;

    /// Called after a lookup, with the last node visited, whether or not it matched.
    fn on_get<T>(
        &mut self,
        _tree: &mut BinaryTree<T, Self::Meta>,
        _position: Position,
    ) -> Result<()> {
        Ok(())
    }

    /// Called after a node with at most one child was spliced out of the tree.
    fn on_remove<T>(
        &mut self,
        tree: &mut BinaryTree<T, Self::Meta>,
        removal: Removal<Self::Meta>,
    ) -> Result<()>;

    /// Asserts that the strategy's invariants hold on the whole tree.
    /// Otherwise, panics.
    fn assert_balanced<T>(_tree: &BinaryTree<T, Self::Meta>) {}
}

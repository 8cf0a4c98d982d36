//! Implementation of splay balancing.
//! Splay trees keep no balancing data at all. Every accessed node is moved to the root
//! by a sequence of splay steps, which keeps the amortized cost of an access logarithmic.

use super::balance::{Balance, Removal};
use crate::trees::BinaryTree;
use crate::{Position, Result};

/// Splay balancing for [`TreeMap`](super::TreeMap): the most recently touched key is
/// always at the root.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
pub struct Splay;

impl Splay {
    // about the amortized computational complexity of using splay steps:
    // the amortized cost of any splay step, except the zig step near the root, is at most
    // 3 * (rank(node after) - rank(node before)), where the rank is the log of the subtree size.

    /// If the node is the root, does nothing. Otherwise, does one splay step upwards.
    /// Returns `false` if the node was already the root.
    pub fn splay_step<E, A>(tree: &mut BinaryTree<E, A>, position: Position) -> Result<bool> {
        let parent = match tree.parent(position)? {
            None => return Ok(false), // already the root
            Some(parent) => parent,
        };

        if tree.parent(parent)?.is_none() {
            // zig step
            tree.rotate(position)?;
        } else if tree.restructure(position)? == parent {
            // zig-zig: the parent went up first, now the node follows
            tree.rotate(position)?;
        }
        // zig-zag: restructuring already rotated the node twice
        Ok(true)
    }

    /// Splays the node to the root of the tree.
    pub fn splay<E, A>(tree: &mut BinaryTree<E, A>, position: Position) -> Result<()> {
        while Self::splay_step(tree, position)? {}
        Ok(())
    }
}

impl Balance for Splay {
    type Meta = ();

    fn on_add<E>(&mut self, tree: &mut BinaryTree<E>, position: Position) -> Result<()> {
        Self::splay(tree, position)
    }

    fn on_get<E>(&mut self, tree: &mut BinaryTree<E>, position: Position) -> Result<()> {
        Self::splay(tree, position)
    }

    fn on_remove<E>(&mut self, tree: &mut BinaryTree<E>, removal: Removal<()>) -> Result<()> {
        match removal.parent {
            Some(parent) => Self::splay(tree, parent),
            None => Ok(()),
        }
    }
}

//! Implementation of AVL balancing.
//! Balanced by keeping track of subtree heights, this is a worst-case balancing
//! algorithm that has a small memory overhead per node.

use super::balance::{Balance, Removal};
use crate::trees::{BinaryTree, Side};
use crate::{Position, Result};

/// The type that is used for height bookkeeping.
/// `u8` is definitely enough, since the height of the tree is logarithmic in the tree size.
type T = u8;

/// The height of the subtree under a node. Leaves have height 1.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Height(T);

impl Height {
    pub fn get(self) -> T {
        self.0
    }
}

impl Default for Height {
    /// The height of a node with no children.
    fn default() -> Self {
        Height(1)
    }
}

/// AVL balancing for [`TreeMap`](super::TreeMap): the heights of the two children of
/// every node differ by at most one.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
pub struct Avl;

/// Height of an optional subtree.
fn height<E>(tree: &BinaryTree<E, Height>, position: Option<Position>) -> Result<T> {
    Ok(match position {
        None => 0,
        Some(position) => tree.alg_data(position)?.0,
    })
}

/// Heights of the left and right subtrees.
fn child_heights<E>(tree: &BinaryTree<E, Height>, position: Position) -> Result<(T, T)> {
    Ok((
        height(tree, tree.left(position)?)?,
        height(tree, tree.right(position)?)?,
    ))
}

/// Recomputes the height of a node from its children, and returns it.
fn rebuild_height<E>(tree: &mut BinaryTree<E, Height>, position: Position) -> Result<T> {
    let (left, right) = child_heights(tree, position)?;
    let new_height = std::cmp::max(left, right) + 1;
    *tree.alg_data_mut(position)? = Height(new_height);
    Ok(new_height)
}

/// The taller child. Ties go to `preferred`.
fn taller_child<E>(
    tree: &BinaryTree<E, Height>,
    position: Position,
    preferred: Side,
) -> Result<Option<Position>> {
    let (left, right) = child_heights(tree, position)?;
    let side = match left.cmp(&right) {
        std::cmp::Ordering::Greater => Side::Left,
        std::cmp::Ordering::Less => Side::Right,
        std::cmp::Ordering::Equal => preferred,
    };
    tree.child(position, side)
}

impl Avl {
    /// Walks from `start` to the root, recomputing heights and restructuring every
    /// unbalanced node on the way. Stops as soon as a subtree keeps its old height.
    fn rebalance<E>(tree: &mut BinaryTree<E, Height>, start: Option<Position>) -> Result<()> {
        let mut walk = start;
        while let Some(position) = walk {
            let prior = tree.alg_data(position)?.0;
            let (left, right) = child_heights(tree, position)?;

            let mut top = position;
            if left.abs_diff(right) > 1 {
                let side = if left > right { Side::Left } else { Side::Right };
                let child = tree
                    .child(position, side)?
                    .expect("invariant violated: the taller side is empty");
                let grandchild = taller_child(tree, child, side)?
                    .expect("invariant violated: a child two levels taller is a leaf");
                top = tree.restructure(grandchild)?;
                tracing::trace!(height = prior, "restructured unbalanced node");
                for below in [tree.left(top)?, tree.right(top)?].into_iter().flatten() {
                    rebuild_height(tree, below)?;
                }
            }

            if rebuild_height(tree, top)? == prior {
                // no ancestor can be affected
                break;
            }
            walk = tree.parent(top)?;
        }
        Ok(())
    }
}

impl Balance for Avl {
    type Meta = Height;

    fn on_add<E>(&mut self, tree: &mut BinaryTree<E, Height>, position: Position) -> Result<()> {
        // a fresh leaf already has the right height
        let parent = tree.parent(position)?;
        Self::rebalance(tree, parent)
    }

    fn on_remove<E>(&mut self, tree: &mut BinaryTree<E, Height>, removal: Removal<Height>) -> Result<()> {
        Self::rebalance(tree, removal.parent)
    }

    fn assert_balanced<E>(tree: &BinaryTree<E, Height>) {
        use crate::trees::Tree;
        for position in tree.preorder() {
            let (left, right) = child_heights(tree, position).expect("traversal yields live positions");
            let node = tree.alg_data(position).expect("traversal yields live positions").0;
            assert_eq!(node, std::cmp::max(left, right) + 1, "stale height");
            assert!(left.abs_diff(right) <= 1, "illegal height difference: {} and {}", left, right);
        }
    }
}

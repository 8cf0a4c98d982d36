//! Implementation of red-black balancing.
//!
//! Every node is colored red or black. The root is black, a red node never has a red
//! parent, and every path from a node down to an absent child passes through the same
//! number of black nodes. Together these keep the tree height within twice the optimum.

use super::balance::{Balance, Removal};
use crate::trees::{BinaryTree, Side};
use crate::{Error, Position, Result};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Color {
    Red,
    Black,
}

impl Default for Color {
    /// Fresh nodes are red.
    fn default() -> Self {
        Color::Red
    }
}

/// Red-black balancing for [`TreeMap`](super::TreeMap).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
pub struct RedBlack;

/// Absent children count as black.
fn is_red<E>(tree: &BinaryTree<E, Color>, position: Option<Position>) -> Result<bool> {
    Ok(match position {
        None => false,
        Some(position) => *tree.alg_data(position)? == Color::Red,
    })
}

fn paint<E>(tree: &mut BinaryTree<E, Color>, position: Position, color: Color) -> Result<()> {
    *tree.alg_data_mut(position)? = color;
    Ok(())
}

/// Paints the children of `position` black.
fn paint_children_black<E>(tree: &mut BinaryTree<E, Color>, position: Position) -> Result<()> {
    for child in [tree.left(position)?, tree.right(position)?].into_iter().flatten() {
        paint(tree, child, Color::Black)?;
    }
    Ok(())
}

impl RedBlack {
    /// Resolves a double red at `position`, a red node.
    fn fix_double_red<E>(tree: &mut BinaryTree<E, Color>, position: Position) -> Result<()> {
        let mut walk = position;
        loop {
            let parent = match tree.parent(walk)? {
                None => return paint(tree, walk, Color::Black),
                Some(parent) => parent,
            };
            if !is_red(tree, Some(parent))? {
                return Ok(());
            }
            // a red parent is never the root
            let grandparent = tree.parent(parent)?.ok_or(Error::NoGrandparent)?;
            let uncle = tree.sibling(parent)?;

            if !is_red(tree, uncle)? {
                let top = tree.restructure(walk)?;
                tracing::trace!("restructured double red");
                paint(tree, top, Color::Black)?;
                for child in [tree.left(top)?, tree.right(top)?].into_iter().flatten() {
                    paint(tree, child, Color::Red)?;
                }
                return Ok(());
            }

            tracing::trace!("recolored double red");
            paint(tree, parent, Color::Black)?;
            if let Some(uncle) = uncle {
                paint(tree, uncle, Color::Black)?;
            }
            paint(tree, grandparent, Color::Red)?;
            walk = grandparent;
        }
    }

    /// Resolves a black deficit: the subtree on `side` of `parent` has one black node
    /// fewer on its paths than the subtree on the other side.
    fn fix_deficit<E>(tree: &mut BinaryTree<E, Color>, parent: Position, side: Side) -> Result<()> {
        let (mut z, mut side) = (parent, side);
        loop {
            let y = tree
                .child(z, side.flip())?
                .expect("invariant violated: black deficit without a sibling subtree");

            if is_red(tree, Some(y))? {
                // the sibling is red. rotate it up, and retry against a black sibling
                tree.rotate(y)?;
                paint(tree, y, Color::Black)?;
                paint(tree, z, Color::Red)?;
                continue;
            }

            // prefer the outer child, which needs a single rotation
            let outer = tree.child(y, side.flip())?;
            let inner = tree.child(y, side)?;
            let red_child = if is_red(tree, outer)? {
                outer
            } else if is_red(tree, inner)? {
                inner
            } else {
                None
            };

            if let Some(x) = red_child {
                let z_color = *tree.alg_data(z)?;
                let top = tree.restructure(x)?;
                tracing::trace!("restructured black deficit");
                paint(tree, top, z_color)?;
                return paint_children_black(tree, top);
            }

            paint(tree, y, Color::Red)?;
            if is_red(tree, Some(z))? {
                // absorbed
                return paint(tree, z, Color::Black);
            }
            match (tree.parent(z)?, tree.side(z)?) {
                (Some(above), Some(above_side)) => {
                    z = above;
                    side = above_side;
                }
                // the deficit reached the root, where it is harmless
                _ => return Ok(()),
            }
        }
    }

    /// Returns the black height of the subtree. Panics if the coloring is invalid.
    fn assert_subtree<E>(tree: &BinaryTree<E, Color>, position: Option<Position>) -> usize {
        let position = match position {
            None => return 1,
            Some(position) => position,
        };
        let red = is_red(tree, Some(position)).expect("positions of a live tree");
        let left = tree.left(position).expect("positions of a live tree");
        let right = tree.right(position).expect("positions of a live tree");
        if red {
            assert!(!is_red(tree, left).expect("positions of a live tree"), "red node with a red child");
            assert!(!is_red(tree, right).expect("positions of a live tree"), "red node with a red child");
        }
        let left_height = Self::assert_subtree(tree, left);
        let right_height = Self::assert_subtree(tree, right);
        assert_eq!(left_height, right_height, "unequal black heights");
        left_height + if red { 0 } else { 1 }
    }
}

impl Balance for RedBlack {
    type Meta = Color;

    fn on_add<E>(&mut self, tree: &mut BinaryTree<E, Color>, position: Position) -> Result<()> {
        if !is_red(tree, Some(position))? {
            // an overwritten black node changes nothing
            return Ok(());
        }
        Self::fix_double_red(tree, position)
    }

    fn on_remove<E>(&mut self, tree: &mut BinaryTree<E, Color>, removal: Removal<Color>) -> Result<()> {
        if removal.alg_data == Color::Red {
            return Ok(());
        }
        let replacement = match (removal.parent, removal.side) {
            (Some(parent), Some(side)) => tree.child(parent, side)?,
            _ => tree.root(),
        };
        if let Some(replacement) = replacement {
            if is_red(tree, Some(replacement))? {
                // the promoted child takes over the removed black
                return paint(tree, replacement, Color::Black);
            }
        }
        match (removal.parent, removal.side) {
            (Some(parent), Some(side)) => Self::fix_deficit(tree, parent, side),
            _ => Ok(()),
        }
    }

    fn assert_balanced<E>(tree: &BinaryTree<E, Color>) {
        assert!(!is_red(tree, tree.root()).expect("positions of a live tree"), "red root");
        Self::assert_subtree(tree, tree.root());
    }
}

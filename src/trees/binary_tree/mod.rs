//! The binary tree module.
//! This module implements a linked binary tree whose nodes live in an arena and are
//! referred to by [`Position`]s. The tree itself keeps no ordering; the search layer and
//! the ordered maps build on its structural primitives.

// these two should not be public as they are merely separate files
// for some of the functions of this module
mod implementations;
mod relink;

use super::Side;
use crate::handle::{Arena, Idx};
use crate::{Error, Position, Result, StructureId};

pub(crate) const LINK_ERROR: &str = "invariant violated: broken parent link";

/// A node of a [`BinaryTree`]. The links are slot indices into the tree's arena.
struct Node<T, A> {
    element: T,
    alg_data: A,
    parent: Option<Idx>,
    left: Option<Idx>,
    right: Option<Idx>,
}

impl<T, A> Node<T, A> {
    fn new(element: T, alg_data: A, parent: Option<Idx>) -> Self {
        Node {
            element,
            alg_data,
            parent,
            left: None,
            right: None,
        }
    }

    fn child(&self, side: Side) -> Option<Idx> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    fn child_mut(&mut self, side: Side) -> &mut Option<Idx> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

/// A linked binary tree.
///
/// Every node carries an element of type `T` and algorithm-specific data of type `A`
/// (for example the height of an AVL node, or the color of a red-black node).
/// All positional operations validate their positions first and fail without
/// touching the tree if a position is foreign or deprecated.
pub struct BinaryTree<T, A = ()> {
    nodes: Arena<Node<T, A>>,
    root: Option<Idx>,
}

impl<T> BinaryTree<T> {
    /// Creates an empty tree without algorithm data.
    /// Use [`Default`] for trees that carry some.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T, A> BinaryTree<T, A> {
    /// The id that every position issued by this tree carries.
    pub fn id(&self) -> StructureId {
        self.nodes.id()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn root(&self) -> Option<Position> {
        self.root.map(|idx| self.nodes.position(idx))
    }

    pub fn element(&self, position: Position) -> Result<&T> {
        let idx = self.nodes.validate(position)?;
        Ok(&self.nodes.get(idx).element)
    }

    pub fn element_mut(&mut self, position: Position) -> Result<&mut T> {
        let idx = self.nodes.validate(position)?;
        Ok(&mut self.nodes.get_mut(idx).element)
    }

    pub fn alg_data(&self, position: Position) -> Result<&A> {
        let idx = self.nodes.validate(position)?;
        Ok(&self.nodes.get(idx).alg_data)
    }

    pub fn alg_data_mut(&mut self, position: Position) -> Result<&mut A> {
        let idx = self.nodes.validate(position)?;
        Ok(&mut self.nodes.get_mut(idx).alg_data)
    }

    /// Element and algorithm data of the same node.
    pub fn entry(&self, position: Position) -> Result<(&T, &A)> {
        let idx = self.nodes.validate(position)?;
        let node = self.nodes.get(idx);
        Ok((&node.element, &node.alg_data))
    }

    fn link<F>(&self, position: Position, f: F) -> Result<Option<Position>>
    where
        F: FnOnce(&Node<T, A>) -> Option<Idx>,
    {
        let idx = self.nodes.validate(position)?;
        Ok(f(self.nodes.get(idx)).map(|link| self.nodes.position(link)))
    }

    pub fn parent(&self, position: Position) -> Result<Option<Position>> {
        self.link(position, |node| node.parent)
    }

    pub fn left(&self, position: Position) -> Result<Option<Position>> {
        self.link(position, |node| node.left)
    }

    pub fn right(&self, position: Position) -> Result<Option<Position>> {
        self.link(position, |node| node.right)
    }

    pub fn child(&self, position: Position, side: Side) -> Result<Option<Position>> {
        self.link(position, |node| node.child(side))
    }

    /// The other child of this node's parent.
    pub fn sibling(&self, position: Position) -> Result<Option<Position>> {
        let idx = self.nodes.validate(position)?;
        Ok(match self.side_of(idx) {
            None => None,
            Some(side) => {
                let parent = self.nodes.get(idx).parent.expect(LINK_ERROR);
                self.nodes
                    .get(parent)
                    .child(side.flip())
                    .map(|sibling| self.nodes.position(sibling))
            }
        })
    }

    /// Which child of its parent the node is, or `None` for the root.
    pub fn side(&self, position: Position) -> Result<Option<Side>> {
        let idx = self.nodes.validate(position)?;
        Ok(self.side_of(idx))
    }

    pub fn has_left(&self, position: Position) -> Result<bool> {
        Ok(self.left(position)?.is_some())
    }

    pub fn has_right(&self, position: Position) -> Result<bool> {
        Ok(self.right(position)?.is_some())
    }

    pub fn has_sibling(&self, position: Position) -> Result<bool> {
        Ok(self.sibling(position)?.is_some())
    }

    /// Returns `true` if `child` is the left child of `parent`.
    pub fn is_left_child(&self, child: Position, parent: Position) -> Result<bool> {
        let child = self.nodes.validate(child)?;
        let parent = self.nodes.validate(parent)?;
        Ok(self.nodes.get(parent).left == Some(child))
    }

    /// Returns `true` if `child` is the right child of `parent`.
    pub fn is_right_child(&self, child: Position, parent: Position) -> Result<bool> {
        let child = self.nodes.validate(child)?;
        let parent = self.nodes.validate(parent)?;
        Ok(self.nodes.get(parent).right == Some(child))
    }

    /// Validates both positions and compares them.
    pub fn are_equal(&self, a: Position, b: Position) -> Result<bool> {
        Ok(self.nodes.validate(a)? == self.nodes.validate(b)?)
    }

    /// Adds a root to an empty tree.
    pub fn add_root_with_alg_data(&mut self, element: T, alg_data: A) -> Result<Position> {
        if self.root.is_some() {
            return Err(Error::RootExists);
        }
        let idx = self.nodes.insert(Node::new(element, alg_data, None));
        self.root = Some(idx);
        Ok(self.nodes.position(idx))
    }

    /// Adds a child on the given side. Fails if there already is one.
    pub fn add_child_with_alg_data(
        &mut self,
        position: Position,
        side: Side,
        element: T,
        alg_data: A,
    ) -> Result<Position> {
        let parent = self.nodes.validate(position)?;
        if self.nodes.get(parent).child(side).is_some() {
            return Err(Error::ChildExists(side));
        }
        let idx = self.nodes.insert(Node::new(element, alg_data, Some(parent)));
        *self.nodes.get_mut(parent).child_mut(side) = Some(idx);
        Ok(self.nodes.position(idx))
    }

    /// Removes a node with at most one child, and returns its element and algorithm data.
    /// The child, if any, takes the removed node's place.
    pub fn remove_with_alg_data(&mut self, position: Position) -> Result<(T, A)> {
        let idx = self.nodes.validate(position)?;
        let node = self.nodes.get(idx);
        let child = match (node.left, node.right) {
            (Some(_), Some(_)) => return Err(Error::MultipleChildren),
            (left, right) => left.or(right),
        };
        let parent = node.parent;
        if let Some(child) = child {
            self.nodes.get_mut(child).parent = parent;
        }
        self.replace_link(parent, idx, child);
        let node = self.nodes.remove(idx);
        Ok((node.element, node.alg_data))
    }

    /// Removes a node with at most one child, and returns its element.
    pub fn remove(&mut self, position: Position) -> Result<T> {
        Ok(self.remove_with_alg_data(position)?.0)
    }

    /// Replaces the element of a node, returning the old one.
    pub fn replace(&mut self, position: Position, element: T) -> Result<T> {
        Ok(std::mem::replace(self.element_mut(position)?, element))
    }

    /// Exchanges the elements of two nodes. Algorithm data stays in place.
    pub fn swap_elements(&mut self, a: Position, b: Position) -> Result<()> {
        let a = self.nodes.validate(a)?;
        let b = self.nodes.validate(b)?;
        if a != b {
            let (a, b) = self.nodes.pair_mut(a, b);
            std::mem::swap(&mut a.element, &mut b.element);
        }
        Ok(())
    }

    /// Removes every node. Every position issued so far becomes deprecated.
    pub fn clear(&mut self) {
        tracing::debug!(len = self.len(), "clearing binary tree");
        self.nodes.clear();
        self.root = None;
    }

    /// Which child of its parent the node at `idx` is.
    fn side_of(&self, idx: Idx) -> Option<Side> {
        let parent = self.nodes.get(idx).parent?;
        if self.nodes.get(parent).left == Some(idx) {
            Some(Side::Left)
        } else {
            debug_assert_eq!(self.nodes.get(parent).right, Some(idx), "{}", LINK_ERROR);
            Some(Side::Right)
        }
    }

    /// Makes `new` take the place of `old` under `parent`, or at the root.
    /// Does not touch the parent link of `new`.
    fn replace_link(&mut self, parent: Option<Idx>, old: Idx, new: Option<Idx>) {
        match parent {
            None => self.root = new,
            Some(parent) => {
                let node = self.nodes.get_mut(parent);
                if node.left == Some(old) {
                    node.left = new;
                } else {
                    debug_assert_eq!(node.right, Some(old), "{}", LINK_ERROR);
                    node.right = new;
                }
            }
        }
    }
}

impl<T, A: Default> BinaryTree<T, A> {
    /// Adds a root to an empty tree.
    pub fn add_root(&mut self, element: T) -> Result<Position> {
        self.add_root_with_alg_data(element, A::default())
    }

    pub fn add_left(&mut self, position: Position, element: T) -> Result<Position> {
        self.add_child_with_alg_data(position, Side::Left, element, A::default())
    }

    pub fn add_right(&mut self, position: Position, element: T) -> Result<Position> {
        self.add_child_with_alg_data(position, Side::Right, element, A::default())
    }

    pub fn add_child(&mut self, position: Position, side: Side, element: T) -> Result<Position> {
        self.add_child_with_alg_data(position, side, element, A::default())
    }
}

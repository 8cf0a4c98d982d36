//! Trait implementations for [`BinaryTree`], and grafting whole trees onto it.

use super::*;
use crate::trees::Tree;

const MOVED_ERROR: &str = "invariant violated: link to a node that was not moved";

impl<T, A> BinaryTree<T, A> {
    /// Moves every node of `other` into this tree, as the subtree under
    /// `position` on `side`. Positions issued by `other` do not carry over.
    ///
    ///```
    /// use copse::{trees::Side, BinaryTree, Tree};
    ///
    /// let mut tree = BinaryTree::new();
    /// let root = tree.add_root(2).unwrap();
    /// let mut other = BinaryTree::new();
    /// let top = other.add_root(1).unwrap();
    /// other.add_left(top, 0).unwrap();
    ///
    /// tree.attach(root, Side::Left, other).unwrap();
    /// assert_eq!(tree.len(), 3);
    /// let inorder: Vec<_> = tree.inorder().map(|p| *tree.element(p).unwrap()).collect();
    /// assert_eq!(inorder, vec![0, 1, 2]);
    ///```
    pub fn attach(&mut self, position: Position, side: Side, other: BinaryTree<T, A>) -> Result<()> {
        let parent = self.nodes.validate(position)?;
        if self.nodes.get(parent).child(side).is_some() {
            return Err(Error::ChildExists(side));
        }
        let BinaryTree {
            nodes,
            root: other_root,
        } = other;
        tracing::trace!(len = nodes.len(), %side, "attaching subtree");

        let mut moved: Vec<Option<Idx>> = vec![None; nodes.capacity()];
        let mut links = Vec::with_capacity(nodes.len());
        for (old, mut node) in nodes.into_live() {
            let old_links = (node.parent.take(), node.left.take(), node.right.take());
            let new = self.nodes.insert(node);
            moved[old as usize] = Some(new);
            links.push((new, old_links));
        }

        let remap = |old: Option<Idx>| old.map(|old| moved[old as usize].expect(MOVED_ERROR));
        for (new, (parent, left, right)) in links {
            let node = self.nodes.get_mut(new);
            node.parent = remap(parent);
            node.left = remap(left);
            node.right = remap(right);
        }
        if let Some(subtree) = remap(other_root) {
            self.nodes.get_mut(subtree).parent = Some(parent);
            *self.nodes.get_mut(parent).child_mut(side) = Some(subtree);
        }
        Ok(())
    }
}

impl<T, A> Default for BinaryTree<T, A> {
    fn default() -> Self {
        BinaryTree {
            nodes: Arena::new(),
            root: None,
        }
    }
}

impl<T, A> Tree for BinaryTree<T, A> {
    type Element = T;

    fn len(&self) -> usize {
        BinaryTree::len(self)
    }

    fn root(&self) -> Option<Position> {
        BinaryTree::root(self)
    }

    fn element(&self, position: Position) -> Result<&T> {
        BinaryTree::element(self, position)
    }

    fn parent(&self, position: Position) -> Result<Option<Position>> {
        BinaryTree::parent(self, position)
    }

    fn child_slots(&self, position: Position) -> Result<Vec<Option<Position>>> {
        let idx = self.nodes.validate(position)?;
        let node = self.nodes.get(idx);
        Ok([node.left, node.right]
            .iter()
            .map(|child| child.map(|child| self.nodes.position(child)))
            .collect())
    }

    fn num_children(&self, position: Position) -> Result<usize> {
        let idx = self.nodes.validate(position)?;
        let node = self.nodes.get(idx);
        Ok(node.left.is_some() as usize + node.right.is_some() as usize)
    }
}

impl<T: std::fmt::Debug, A> std::fmt::Debug for BinaryTree<T, A> {
    /// Lists the elements in inorder.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.inorder().map(|position| {
                BinaryTree::element(self, position).expect(crate::trees::traversal::TRAVERSAL_ERROR)
            }))
            .finish()
    }
}

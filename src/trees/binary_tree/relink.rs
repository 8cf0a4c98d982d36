//! Structural primitives: rotation and trinode restructuring.
//! These preserve the inorder sequence of the tree, so they keep any
//! binary-search-tree ordering intact.

use super::*;

impl<T, A> BinaryTree<T, A> {
    /// Promotes the node above its parent.
    ///
    /// If `x` is the left child of `y`, the right subtree of `x` becomes the left
    /// subtree of `y`, `y` becomes the right child of `x`, and `x` takes the place
    /// `y` had under its own parent. Mirror-symmetric for a right child.
    ///
    ///```
    /// use copse::{BinaryTree, Tree};
    ///
    /// let mut tree = BinaryTree::new();
    /// let y = tree.add_root(2).unwrap();
    /// let x = tree.add_left(y, 1).unwrap();
    /// tree.add_right(y, 3).unwrap();
    ///
    /// tree.rotate(x).unwrap();
    /// assert_eq!(tree.root(), Some(x));
    /// assert_eq!(tree.right(x).unwrap(), Some(y));
    /// let inorder: Vec<_> = tree.inorder().map(|p| *tree.element(p).unwrap()).collect();
    /// assert_eq!(inorder, vec![1, 2, 3]);
    ///
    /// assert_eq!(tree.rotate(x), Err(copse::Error::NoParent));
    ///```
    pub fn rotate(&mut self, position: Position) -> Result<()> {
        let x = self.nodes.validate(position)?;
        let y = self.nodes.get(x).parent.ok_or(Error::NoParent)?;
        self.rotate_above(x, y);
        Ok(())
    }

    /// Trinode restructuring across the node, its parent and its grandparent.
    ///
    /// If the node and its parent are children on the same side (a straight shape),
    /// the parent is rotated once. Otherwise (a bent shape) the node is rotated twice.
    /// Returns the position that ends up at the top of the three.
    pub fn restructure(&mut self, position: Position) -> Result<Position> {
        let x = self.nodes.validate(position)?;
        let y = self.nodes.get(x).parent.ok_or(Error::NoParent)?;
        let z = self.nodes.get(y).parent.ok_or(Error::NoGrandparent)?;

        if self.side_of(x) == self.side_of(y) {
            // zig-zig
            self.rotate_above(y, z);
            Ok(self.nodes.position(y))
        } else {
            // zig-zag
            self.rotate_above(x, y);
            self.rotate_above(x, z);
            Ok(position)
        }
    }

    /// Rotates `x` above its parent `y`.
    fn rotate_above(&mut self, x: Idx, y: Idx) {
        debug_assert_eq!(self.nodes.get(x).parent, Some(y), "{}", LINK_ERROR);
        let side = self.side_of(x).expect(LINK_ERROR);
        let grandparent = self.nodes.get(y).parent;
        tracing::trace!(%side, "rotating node above its parent");

        // the inner subtree of `x` switches over to `y`
        let inner = self.nodes.get(x).child(side.flip());
        *self.nodes.get_mut(y).child_mut(side) = inner;
        if let Some(inner) = inner {
            self.nodes.get_mut(inner).parent = Some(y);
        }

        *self.nodes.get_mut(x).child_mut(side.flip()) = Some(y);
        self.nodes.get_mut(y).parent = Some(x);
        self.nodes.get_mut(x).parent = grandparent;
        self.replace_link(grandparent, y, Some(x));
    }
}

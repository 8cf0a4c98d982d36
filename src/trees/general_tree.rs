//! Trees where every node may have any number of ordered children.

use super::Tree;
use crate::handle::{Arena, Idx};
use crate::{Error, Position, Result};

const LINK_ERROR: &str = "invariant violated: child missing from its parent";

struct Node<T> {
    element: T,
    parent: Option<Idx>,
    children: Vec<Idx>,
}

/// A linked tree with an ordered list of children per node.
///
///```
/// use copse::{GeneralTree, Tree};
///
/// let mut tree = GeneralTree::new();
/// let root = tree.add_root("/").unwrap();
/// let usr = tree.add_child(root, "usr").unwrap();
/// tree.add_child(root, "etc").unwrap();
/// tree.add_child(usr, "bin").unwrap();
///
/// let names: Vec<_> = tree.preorder().map(|p| *tree.element(p).unwrap()).collect();
/// assert_eq!(names, vec!["/", "usr", "bin", "etc"]);
/// assert_eq!(tree.height(), 2);
///```
pub struct GeneralTree<T> {
    nodes: Arena<Node<T>>,
    root: Option<Idx>,
}

impl<T> GeneralTree<T> {
    pub fn new() -> Self {
        GeneralTree {
            nodes: Arena::new(),
            root: None,
        }
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

    pub fn parent(&self, position: Position) -> Result<Option<Position>> {
        let idx = self.nodes.validate(position)?;
        Ok(self.nodes.get(idx).parent.map(|parent| self.nodes.position(parent)))
    }

    pub fn are_equal(&self, a: Position, b: Position) -> Result<bool> {
        Ok(self.nodes.validate(a)? == self.nodes.validate(b)?)
    }

    pub fn add_root(&mut self, element: T) -> Result<Position> {
        if self.root.is_some() {
            return Err(Error::RootExists);
        }
        let idx = self.nodes.insert(Node {
            element,
            parent: None,
            children: vec![],
        });
        self.root = Some(idx);
        Ok(self.nodes.position(idx))
    }

    /// Adds a node as the last child of `position`.
    pub fn add_child(&mut self, position: Position, element: T) -> Result<Position> {
        let parent = self.nodes.validate(position)?;
        let idx = self.nodes.insert(Node {
            element,
            parent: Some(parent),
            children: vec![],
        });
        self.nodes.get_mut(parent).children.push(idx);
        Ok(self.nodes.position(idx))
    }

    /// Moves the nodes of each tree under `position`, each root becoming a new last child.
    pub fn attach<I>(&mut self, position: Position, trees: I) -> Result<()>
    where
        I: IntoIterator<Item = GeneralTree<T>>,
    {
        let parent = self.nodes.validate(position)?;
        for GeneralTree { nodes, root } in trees {
            let mut moved: Vec<Option<Idx>> = vec![None; nodes.capacity()];
            let mut links = vec![];
            for (old, mut node) in nodes.into_live() {
                let old_links = (node.parent.take(), std::mem::take(&mut node.children));
                let new = self.nodes.insert(node);
                moved[old as usize] = Some(new);
                links.push((new, old_links));
            }
            let remap = |old: Idx| moved[old as usize].expect(LINK_ERROR);
            for (new, (old_parent, old_children)) in links {
                let node = self.nodes.get_mut(new);
                node.parent = old_parent.map(remap);
                node.children = old_children.into_iter().map(remap).collect();
            }
            if let Some(root) = root.map(remap) {
                self.nodes.get_mut(root).parent = Some(parent);
                self.nodes.get_mut(parent).children.push(root);
            }
        }
        Ok(())
    }

    /// Removes a node with at most one child. The child takes its place.
    pub fn remove(&mut self, position: Position) -> Result<T> {
        let idx = self.nodes.validate(position)?;
        let node = self.nodes.get(idx);
        if node.children.len() > 1 {
            return Err(Error::MultipleChildren);
        }
        let child = node.children.first().copied();
        let parent = node.parent;

        match parent {
            None => self.root = child,
            Some(parent) => {
                let siblings = &mut self.nodes.get_mut(parent).children;
                let index = siblings
                    .iter()
                    .position(|&sibling| sibling == idx)
                    .expect(LINK_ERROR);
                match child {
                    Some(child) => siblings[index] = child,
                    None => {
                        siblings.remove(index);
                    }
                }
            }
        }
        if let Some(child) = child {
            self.nodes.get_mut(child).parent = parent;
        }
        Ok(self.nodes.remove(idx).element)
    }

    pub fn replace(&mut self, position: Position, element: T) -> Result<T> {
        Ok(std::mem::replace(self.element_mut(position)?, element))
    }

    /// Removes every node. Every position issued so far becomes deprecated.
    pub fn clear(&mut self) {
        tracing::debug!(len = self.len(), "clearing general tree");
        self.nodes.clear();
        self.root = None;
    }
}

impl<T> Default for GeneralTree<T> {
    fn default() -> Self {
        GeneralTree::new()
    }
}

impl<T> Tree for GeneralTree<T> {
    type Element = T;

    fn len(&self) -> usize {
        GeneralTree::len(self)
    }

    fn root(&self) -> Option<Position> {
        GeneralTree::root(self)
    }

    fn element(&self, position: Position) -> Result<&T> {
        GeneralTree::element(self, position)
    }

    fn parent(&self, position: Position) -> Result<Option<Position>> {
        GeneralTree::parent(self, position)
    }

    fn child_slots(&self, position: Position) -> Result<Vec<Option<Position>>> {
        let idx = self.nodes.validate(position)?;
        Ok(self
            .nodes
            .get(idx)
            .children
            .iter()
            .map(|&child| Some(self.nodes.position(child)))
            .collect())
    }
}

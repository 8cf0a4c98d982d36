//! Preorder, inorder and postorder traversals, and the Euler tour.
//!
//! The traversal iterators keep an explicit stack instead of recursing, so
//! they work lazily on trees of any shape.

use super::Tree;
use crate::Position;

pub(crate) const TRAVERSAL_ERROR: &str =
    "invariant violated: tree returned a position it does not own";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Order {
    Pre,
    In,
    Post,
}

/// A lazy traversal of a tree, yielding positions.
///
///```
/// use copse::{BinaryTree, Tree};
///
/// let mut tree = BinaryTree::new();
/// let root = tree.add_root('b').unwrap();
/// tree.add_left(root, 'a').unwrap();
/// tree.add_right(root, 'c').unwrap();
///
/// let elements = |order: Vec<copse::Position>| -> String {
///     order.into_iter().map(|p| *tree.element(p).unwrap()).collect()
/// };
/// assert_eq!(elements(tree.preorder().collect()), "bac");
/// assert_eq!(elements(tree.inorder().collect()), "abc");
/// assert_eq!(elements(tree.postorder().collect()), "acb");
///```
pub struct Traversal<'a, T> {
    tree: &'a T,
    order: Order,
    // `true` marks a node whose children were already pushed
    stack: Vec<(Position, bool)>,
}

impl<'a, T: Tree> Traversal<'a, T> {
    fn new(tree: &'a T, order: Order) -> Self {
        Traversal {
            tree,
            order,
            stack: tree.root().map(|root| (root, false)).into_iter().collect(),
        }
    }

    pub fn preorder(tree: &'a T) -> Self {
        Self::new(tree, Order::Pre)
    }

    pub fn inorder(tree: &'a T) -> Self {
        Self::new(tree, Order::In)
    }

    pub fn postorder(tree: &'a T) -> Self {
        Self::new(tree, Order::Post)
    }

    fn push_slots(&mut self, slots: &[Option<Position>]) {
        self.stack
            .extend(slots.iter().rev().flatten().map(|&child| (child, false)));
    }
}

impl<'a, T: Tree> Iterator for Traversal<'a, T> {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        loop {
            let (position, expanded) = self.stack.pop()?;
            if expanded {
                return Some(position);
            }
            let slots = self
                .tree
                .child_slots(position)
                .expect(TRAVERSAL_ERROR);
            match self.order {
                Order::Pre => {
                    self.push_slots(&slots);
                    return Some(position);
                }
                Order::Post => {
                    self.stack.push((position, true));
                    self.push_slots(&slots);
                }
                Order::In => {
                    let split = slots.len().min(1);
                    self.push_slots(&slots[split..]);
                    self.stack.push((position, true));
                    self.push_slots(&slots[..split]);
                }
            }
        }
    }
}

/// When during an Euler tour a node is visited.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Phase {
    Pre,
    In,
    Post,
}

/// Everything an Euler tour visit gets to see.
pub struct Visit<'a, E, R> {
    pub position: Position,
    pub element: &'a E,
    pub phase: Phase,
    pub depth: usize,
    /// Child slot indices leading from the root to this node.
    pub path: &'a [usize],
    /// Post results of the child slots visited so far, indexed by slot.
    pub results: &'a [Option<R>],
}

pub(crate) fn euler_tour<T, R, F>(tree: &T, mut visit: F) -> Option<R>
where
    T: Tree,
    F: FnMut(&Visit<'_, T::Element, R>) -> R,
{
    let root = tree.root()?;
    let mut path = vec![];
    Some(tour(tree, root, &mut path, &mut visit))
}

fn tour<T, R, F>(tree: &T, position: Position, path: &mut Vec<usize>, visit: &mut F) -> R
where
    T: Tree,
    F: FnMut(&Visit<'_, T::Element, R>) -> R,
{
    let element = tree.element(position).expect(TRAVERSAL_ERROR);
    let slots = tree.child_slots(position).expect(TRAVERSAL_ERROR);
    let mut results: Vec<Option<R>> = slots.iter().map(|_| None).collect();
    let depth = path.len();

    let call = |phase: Phase, path: &[usize], results: &[Option<R>], visit: &mut F| {
        visit(&Visit {
            position,
            element,
            phase,
            depth,
            path,
            results,
        })
    };

    call(Phase::Pre, &path[..], &results, &mut *visit);
    if slots.is_empty() {
        call(Phase::In, &path[..], &results, &mut *visit);
    }
    for (index, slot) in slots.iter().enumerate() {
        if let Some(child) = *slot {
            path.push(index);
            results[index] = Some(tour(tree, child, path, visit));
            path.pop();
        }
        if index == 0 {
            call(Phase::In, &path[..], &results, &mut *visit);
        }
    }
    call(Phase::Post, &path[..], &results, &mut *visit)
}

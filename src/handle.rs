//! The handle system.
//!
//! Every positional structure in this crate (binary and general trees, linked lists,
//! the adaptable heap) stores its nodes in an [`Arena`]: a vector of slots, each
//! carrying a generation counter. A [`Position`] names a slot together with the
//! generation it was issued at and the structure that issued it. Removing a node bumps
//! its slot's generation, so every position that still names it is detected as
//! deprecated from then on, even after the slot gets reused.
//!
//! Positions are `Copy` and never own anything. Two positions are equal exactly when
//! they name the same node of the same structure.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::{Error, Result};

/// Index of a slot inside an arena.
pub(crate) type Idx = u32;

const VACANT_SLOT_ERROR: &str = "invariant violated: internal link points to a vacant slot";

static NEXT_STRUCTURE_ID: AtomicU64 = AtomicU64::new(0);

/// Identifies one structure instance for the whole lifetime of the process.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct StructureId(u64);

impl StructureId {
    /// Draws an id that no other structure has.
    pub fn fresh() -> Self {
        StructureId(NEXT_STRUCTURE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// A validity-checked, non-owning reference to a node of some structure.
///
///```
/// use copse::BinaryTree;
///
/// let mut tree: BinaryTree<&str> = BinaryTree::new();
/// let root = tree.add_root("root").unwrap();
/// let left = tree.add_left(root, "left").unwrap();
/// assert_eq!(tree.parent(left).unwrap(), Some(root));
///
/// let mut other: BinaryTree<&str> = BinaryTree::new();
/// assert_eq!(other.element(root), Err(copse::Error::StructuralMismatch));
///
/// tree.remove(left).unwrap();
/// assert_eq!(tree.element(left), Err(copse::Error::Deprecated));
/// # other.add_root("other").unwrap();
///```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Position {
    owner: StructureId,
    index: Idx,
    generation: u32,
}

impl Position {
    /// The structure that issued this position.
    pub fn owner(&self) -> StructureId {
        self.owner
    }
}

struct Slot<N> {
    generation: u32,
    node: Option<N>,
}

/// Slot storage with generation-checked positions.
pub(crate) struct Arena<N> {
    id: StructureId,
    slots: Vec<Slot<N>>,
    free: Vec<Idx>,
    len: usize,
}

impl<N> Arena<N> {
    pub fn new() -> Self {
        Arena {
            id: StructureId::fresh(),
            slots: vec![],
            free: vec![],
            len: 0,
        }
    }

    pub fn id(&self) -> StructureId {
        self.id
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Stores a node, reusing a vacant slot if there is one.
    pub fn insert(&mut self, node: N) -> Idx {
        self.len += 1;
        match self.free.pop() {
            Some(idx) => {
                let slot = &mut self.slots[idx as usize];
                debug_assert!(slot.node.is_none());
                slot.node = Some(node);
                idx
            }
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    node: Some(node),
                });
                (self.slots.len() - 1) as Idx
            }
        }
    }

    /// Issues a position for a live slot.
    pub fn position(&self, idx: Idx) -> Position {
        let slot = &self.slots[idx as usize];
        debug_assert!(slot.node.is_some(), "{}", VACANT_SLOT_ERROR);
        Position {
            owner: self.id,
            index: idx,
            generation: slot.generation,
        }
    }

    /// Checks that the position was issued by this arena and that its node is still live.
    pub fn validate(&self, position: Position) -> Result<Idx> {
        if position.owner != self.id {
            return Err(Error::StructuralMismatch);
        }
        match self.slots.get(position.index as usize) {
            Some(slot) if slot.generation == position.generation && slot.node.is_some() => {
                Ok(position.index)
            }
            _ => Err(Error::Deprecated),
        }
    }

    pub fn get(&self, idx: Idx) -> &N {
        self.slots[idx as usize]
            .node
            .as_ref()
            .expect(VACANT_SLOT_ERROR)
    }

    pub fn get_mut(&mut self, idx: Idx) -> &mut N {
        self.slots[idx as usize]
            .node
            .as_mut()
            .expect(VACANT_SLOT_ERROR)
    }

    /// Mutable access to two different live slots at once.
    /// Panics if `a == b`.
    pub fn pair_mut(&mut self, a: Idx, b: Idx) -> (&mut N, &mut N) {
        assert_ne!(a, b, "pair_mut needs two different slots");
        let (a, b) = (a as usize, b as usize);
        let (first, second) = if a < b {
            let (low, high) = self.slots.split_at_mut(b);
            (&mut low[a], &mut high[0])
        } else {
            let (low, high) = self.slots.split_at_mut(a);
            (&mut high[0], &mut low[b])
        };
        (
            first.node.as_mut().expect(VACANT_SLOT_ERROR),
            second.node.as_mut().expect(VACANT_SLOT_ERROR),
        )
    }

    /// Takes the node out of its slot. Every position naming it becomes deprecated.
    pub fn remove(&mut self, idx: Idx) -> N {
        let slot = &mut self.slots[idx as usize];
        let node = slot.node.take().expect(VACANT_SLOT_ERROR);
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(idx);
        self.len -= 1;
        node
    }

    /// Drops every node. Every position issued so far becomes deprecated.
    pub fn clear(&mut self) {
        self.free.clear();
        for (idx, slot) in self.slots.iter_mut().enumerate().rev() {
            if slot.node.take().is_some() {
                slot.generation = slot.generation.wrapping_add(1);
            }
            self.free.push(idx as Idx);
        }
        self.len = 0;
    }

    /// Consumes the arena, yielding every live node with its slot index.
    pub fn into_live(self) -> impl Iterator<Item = (Idx, N)> {
        self.slots
            .into_iter()
            .enumerate()
            .filter_map(|(idx, slot)| slot.node.map(|node| (idx as Idx, node)))
    }

    /// Number of slots, live or vacant. Slot indices are below this.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }
}

impl<N> Default for Arena<N> {
    fn default() -> Self {
        Arena::new()
    }
}

#[test]
fn arena_reuses_slots_with_new_generations() {
    let mut arena = Arena::new();
    let a = arena.insert('a');
    let b = arena.insert('b');
    let old = arena.position(a);
    assert_eq!(arena.remove(a), 'a');
    assert_eq!(arena.validate(old), Err(Error::Deprecated));

    let c = arena.insert('c');
    assert_eq!(c, a);
    let new = arena.position(c);
    assert_ne!(new, old);
    assert_eq!(arena.validate(new), Ok(c));
    assert_eq!(arena.validate(old), Err(Error::Deprecated));
    assert_eq!((arena.len(), arena.capacity()), (2, 2));

    let (first, second) = arena.pair_mut(b, c);
    std::mem::swap(first, second);
    assert_eq!(arena.into_live().collect::<Vec<_>>(), vec![(0, 'b'), (1, 'c')]);
}

#[test]
fn arena_clear_deprecates_everything() {
    let mut arena = Arena::new();
    let positions: Vec<_> = (0..5)
        .map(|i| {
            let idx = arena.insert(i);
            arena.position(idx)
        })
        .collect();
    let other: Arena<i32> = Arena::new();
    assert_eq!(other.validate(positions[0]), Err(Error::StructuralMismatch));

    arena.clear();
    assert_eq!(arena.len(), 0);
    for &position in positions.iter() {
        assert_eq!(arena.validate(position), Err(Error::Deprecated));
    }
    // slots are handed out again from the front
    assert_eq!(arena.insert(7), 0);
}

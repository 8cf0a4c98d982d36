//! Classic containers and algorithms, built around a self-balancing ordered map.
//!
//! The core is [`maps::TreeMap`]: a binary search tree engine over a relinkable
//! [`BinaryTree`], balanced by a pluggable strategy ([`maps::Avl`], [`maps::RedBlack`]
//! or [`maps::Splay`]). Nodes of every linked structure are referred to by
//! generation-checked [`Position`]s.
//!
//!```
//! use copse::maps::AvlTreeMap;
//!
//! let mut map = AvlTreeMap::new();
//! map.set(3, "c").set(1, "a").set(2, "b");
//! assert_eq!(map.get(&2), Ok(&"b"));
//! assert_eq!(map.find_greater(&2), Some((&3, &"c")));
//! assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
//!```

#[macro_use]
extern crate derive_destructure;

pub mod comparators;
mod error;
pub mod handle;
pub mod lists;
pub mod maps;
pub mod queues;
pub mod searches;
pub mod text;
pub mod trees;

pub use error::{Error, Result};
pub use handle::{Position, StructureId};
pub use trees::{BinaryTree, GeneralTree, Tree};

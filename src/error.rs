//! Error types shared by every structure in the crate.

use thiserror::Error;

use crate::trees::Side;

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong when calling into a structure.
///
/// Structural errors are always reported before anything is mutated, so a failed
/// call leaves the structure exactly as it was.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// The position was issued by a different structure.
    #[error("position does not belong to this structure")]
    StructuralMismatch,

    /// The node behind the position was removed, or the structure was cleared.
    #[error("position is deprecated")]
    Deprecated,

    /// Tried to add a child where one already exists.
    #[error("{0} child already exists")]
    ChildExists(Side),

    /// Tried to add a root to a non-empty tree.
    #[error("root already exists")]
    RootExists,

    /// Only nodes with at most one child can be removed directly.
    #[error("position has more than one child")]
    MultipleChildren,

    /// Rotations need a parent.
    #[error("node has no parent")]
    NoParent,

    /// Trinode restructuring needs a grandparent.
    #[error("node has no grandparent")]
    NoGrandparent,

    /// Lookup of a key that the map does not contain.
    #[error("key not found")]
    KeyNotFound,

    /// Reading or removing from an empty container. Names the kind of container.
    #[error("{0} is empty")]
    Empty(&'static str),

    /// Writing into a full fixed-capacity container.
    #[error("buffer is full")]
    Full,

    /// Index outside of `0..len`.
    #[error("index {index} is out of bounds for length {len}")]
    OutOfBounds { index: usize, len: usize },

    /// Pattern precomputation needs at least one character.
    #[error("can not precompute an empty pattern")]
    EmptyPattern,
}

//! Self-balancing binary search tree that uses a color bit to ensure that the tree remains
//! approximately balanced during insertions and deletions.
//!
//! Nodes are allocated in a `TypedArena` and linked by handles, with a single black sentinel per
//! tree standing in for every leaf and for the parent of the root.

mod map;
mod node;
mod serialize;
mod set;
mod tree;

pub use self::map::{NodeRef, RedBlackMap, RedBlackMapIntoIter, RedBlackMapIter, DEFAULT_CHUNK_SIZE};
pub use self::node::Color;
pub use self::set::{RedBlackSet, RedBlackSetIntoIter, RedBlackSetIter};

//! Ordered dynamic sets backed by an arena-allocated red black tree.
//!
//! `RedBlackSet` and `RedBlackMap` support insertion, deletion, search, minimum, maximum,
//! successor, and predecessor in `O(log n)` worst-case time. The `DynamicSet` trait captures that
//! contract so that other ordered sets can be compared against the tree.

pub mod arena;
mod dynamic_set;
mod entry;
mod error;
pub mod red_black_tree;

pub use crate::dynamic_set::DynamicSet;
pub use crate::error::{Error, Result};

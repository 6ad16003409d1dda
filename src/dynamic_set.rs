//! The ordered "dynamic set" contract shared by interchangeable set implementations.

use crate::red_black_tree::RedBlackSet;
use std::collections::BTreeSet;
use std::ops::Bound;

/// An ordered collection of unique keys.
///
/// Inserting a present key and deleting an absent key are no-ops. Every query reports a missing
/// answer as `None`; `successor` and `predecessor` are `None` both when `key` is absent and when it
/// is the last key in that direction.
///
/// # Examples
///
/// ```
/// use dynamic_sets::DynamicSet;
/// use dynamic_sets::red_black_tree::RedBlackSet;
/// use std::collections::BTreeSet;
///
/// fn walk<S: DynamicSet<u32>>(set: &mut S) -> Vec<u32> {
///     for key in &[5, 1, 3] {
///         set.insert(*key);
///     }
///     let mut keys = Vec::new();
///     let mut curr = set.minimum().copied();
///     while let Some(key) = curr {
///         keys.push(key);
///         curr = set.successor(&key).copied();
///     }
///     keys
/// }
///
/// assert_eq!(walk(&mut RedBlackSet::new()), vec![1, 3, 5]);
/// assert_eq!(walk(&mut BTreeSet::new()), vec![1, 3, 5]);
/// ```
pub trait DynamicSet<T>
where
    T: Ord,
{
    /// Inserts `key`. Returns `true` if it was absent.
    fn insert(&mut self, key: T) -> bool;

    /// Deletes `key`. Returns `true` if it was present.
    fn delete(&mut self, key: &T) -> bool;

    fn search(&self, key: &T) -> Option<&T>;

    fn minimum(&self) -> Option<&T>;

    fn maximum(&self) -> Option<&T>;

    fn successor(&self, key: &T) -> Option<&T>;

    fn predecessor(&self, key: &T) -> Option<&T>;

    fn size(&self) -> usize;
}

impl<T> DynamicSet<T> for RedBlackSet<T>
where
    T: Ord,
{
    fn insert(&mut self, key: T) -> bool {
        RedBlackSet::insert(self, key)
    }

    fn delete(&mut self, key: &T) -> bool {
        self.remove(key).is_some()
    }

    fn search(&self, key: &T) -> Option<&T> {
        RedBlackSet::search(self, key).map(|node| node.key())
    }

    fn minimum(&self) -> Option<&T> {
        self.min()
    }

    fn maximum(&self) -> Option<&T> {
        self.max()
    }

    fn successor(&self, key: &T) -> Option<&T> {
        RedBlackSet::successor(self, key).map(|node| node.key())
    }

    fn predecessor(&self, key: &T) -> Option<&T> {
        RedBlackSet::predecessor(self, key).map(|node| node.key())
    }

    fn size(&self) -> usize {
        self.len()
    }
}

impl<T> DynamicSet<T> for BTreeSet<T>
where
    T: Ord,
{
    fn insert(&mut self, key: T) -> bool {
        BTreeSet::insert(self, key)
    }

    fn delete(&mut self, key: &T) -> bool {
        self.remove(key)
    }

    fn search(&self, key: &T) -> Option<&T> {
        self.get(key)
    }

    fn minimum(&self) -> Option<&T> {
        self.iter().next()
    }

    fn maximum(&self) -> Option<&T> {
        self.iter().next_back()
    }

    fn successor(&self, key: &T) -> Option<&T> {
        if !self.contains(key) {
            return None;
        }
        self.range((Bound::Excluded(key), Bound::Unbounded)).next()
    }

    fn predecessor(&self, key: &T) -> Option<&T> {
        if !self.contains(key) {
            return None;
        }
        self.range((Bound::Unbounded, Bound::Excluded(key))).next_back()
    }

    fn size(&self) -> usize {
        self.len()
    }
}

use crate::error::Result;
use crate::red_black_tree::map::{NodeRef, RedBlackMap, RedBlackMapIntoIter, RedBlackMapIter};
use std::borrow::Borrow;
use std::fmt;
use std::iter::FromIterator;

/// An ordered set implemented using a red black tree.
///
/// The set is a `RedBlackMap<T, ()>`, so it has the same balancing guarantees: every operation
/// runs in `O(log n)` worst-case time.
///
/// # Examples
///
/// ```
/// use dynamic_sets::red_black_tree::RedBlackSet;
///
/// let mut set = RedBlackSet::new();
/// set.insert(0);
/// set.insert(3);
///
/// assert_eq!(set.len(), 2);
///
/// assert_eq!(set.min(), Some(&0));
/// assert_eq!(set.successor(&0).map(|node| *node.key()), Some(3));
///
/// assert_eq!(set.remove(&0), Some(0));
/// assert_eq!(set.remove(&1), None);
/// ```
pub struct RedBlackSet<T> {
    map: RedBlackMap<T, ()>,
}

impl<T> RedBlackSet<T> {
    /// Constructs a new, empty `RedBlackSet<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynamic_sets::red_black_tree::RedBlackSet;
    ///
    /// let set: RedBlackSet<u32> = RedBlackSet::new();
    /// ```
    pub fn new() -> Self {
        RedBlackSet {
            map: RedBlackMap::new(),
        }
    }

    /// Constructs a new, empty `RedBlackSet<T>` whose node arena grows `chunk_size` nodes at a
    /// time.
    pub fn with_chunk_size(chunk_size: usize) -> Self {
        RedBlackSet {
            map: RedBlackMap::with_chunk_size(chunk_size),
        }
    }

    /// Inserts a key into the set. Returns `true` if the key was absent; a key that is already
    /// present is left in place and `false` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynamic_sets::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// assert!(set.insert(1));
    /// assert!(set.contains(&1));
    /// assert!(!set.insert(1));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, key: T) -> bool
    where
        T: Ord,
    {
        self.map.insert(key, ())
    }

    /// Removes a key from the set. If the key exists in the set, it will return the associated
    /// key. Otherwise it will return `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynamic_sets::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// assert_eq!(set.remove(&1), Some(1));
    /// assert_eq!(set.remove(&1), None);
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.map.remove(key).map(|pair| pair.0)
    }

    /// Returns the node holding a particular key, or `None` if the key is absent.
    pub fn search<Q>(&self, key: &Q) -> Option<NodeRef<'_, T, ()>>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.map.search(key)
    }

    /// Checks if a key exists in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynamic_sets::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// assert!(!set.contains(&0));
    /// assert!(set.contains(&1));
    /// ```
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.map.contains_key(key)
    }

    /// Returns the number of elements in the set.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Clears the set, removing all values.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynamic_sets::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// set.insert(2);
    /// set.clear();
    /// assert_eq!(set.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Returns the node with the smallest key, or `None` if the set is empty.
    pub fn minimum(&self) -> Option<NodeRef<'_, T, ()>> {
        self.map.minimum()
    }

    /// Returns the node with the largest key, or `None` if the set is empty.
    pub fn maximum(&self) -> Option<NodeRef<'_, T, ()>> {
        self.map.maximum()
    }

    /// Returns the minimum key of the set. Returns `None` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynamic_sets::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.min(), Some(&1));
    /// ```
    pub fn min(&self) -> Option<&T> {
        self.map.min()
    }

    /// Returns the maximum key of the set. Returns `None` if the set is empty.
    pub fn max(&self) -> Option<&T> {
        self.map.max()
    }

    /// Returns the node holding the next larger key after `key`. Returns `None` if `key` is absent
    /// or is the maximum.
    pub fn successor<Q>(&self, key: &Q) -> Option<NodeRef<'_, T, ()>>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.map.successor(key)
    }

    /// Returns the node holding the next smaller key before `key`. Returns `None` if `key` is
    /// absent or is the minimum.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynamic_sets::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.predecessor(&3).map(|node| *node.key()), Some(1));
    /// assert!(set.predecessor(&1).is_none());
    /// ```
    pub fn predecessor<Q>(&self, key: &Q) -> Option<NodeRef<'_, T, ()>>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.map.predecessor(key)
    }

    /// Returns the root node, or `None` if the set is empty.
    pub fn root(&self) -> Option<NodeRef<'_, T, ()>> {
        self.map.root()
    }

    /// Returns the number of nodes on the longest path from the root to a leaf.
    pub fn height(&self) -> usize {
        self.map.height()
    }

    /// Checks every invariant of the underlying tree and returns its black-height.
    pub fn validate(&self) -> Result<usize>
    where
        T: Ord,
    {
        self.map.validate()
    }

    /// Returns an iterator over the set. The iterator will yield keys using in-order traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynamic_sets::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// let mut iterator = set.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> RedBlackSetIter<'_, T> {
        RedBlackSetIter {
            map_iter: self.map.iter(),
        }
    }
}

impl<T> Default for RedBlackSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for RedBlackSet<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> PartialEq for RedBlackSet<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.map == other.map
    }
}

impl<T> Eq for RedBlackSet<T> where T: Eq {}

impl<T> FromIterator<T> for RedBlackSet<T>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut set = RedBlackSet::new();
        set.extend(iter);
        set
    }
}

impl<T> Extend<T> for RedBlackSet<T>
where
    T: Ord,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.map.extend(iter.into_iter().map(|key| (key, ())));
    }
}

impl<T> IntoIterator for RedBlackSet<T> {
    type IntoIter = RedBlackSetIntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter {
            map_iter: self.map.into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a RedBlackSet<T>
where
    T: 'a,
{
    type IntoIter = RedBlackSetIter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `RedBlackSet<T>`.
///
/// This iterator traverses the elements of the set in-order and yields owned keys.
pub struct RedBlackSetIntoIter<T> {
    map_iter: RedBlackMapIntoIter<T, ()>,
}

impl<T> Iterator for RedBlackSetIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.map_iter.next().map(|pair| pair.0)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.map_iter.size_hint()
    }
}

impl<T> DoubleEndedIterator for RedBlackSetIntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.map_iter.next_back().map(|pair| pair.0)
    }
}

impl<T> ExactSizeIterator for RedBlackSetIntoIter<T> {}

/// An iterator for `RedBlackSet<T>`.
///
/// This iterator traverses the elements of the set in-order and yields immutable references.
pub struct RedBlackSetIter<'a, T> {
    map_iter: RedBlackMapIter<'a, T, ()>,
}

impl<'a, T> Iterator for RedBlackSetIter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.map_iter.next().map(|pair| pair.0)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.map_iter.size_hint()
    }
}

impl<'a, T> DoubleEndedIterator for RedBlackSetIter<'a, T>
where
    T: 'a,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        self.map_iter.next_back().map(|pair| pair.0)
    }
}

impl<'a, T> ExactSizeIterator for RedBlackSetIter<'a, T> where T: 'a {}

#[cfg(test)]
mod tests {
    use super::RedBlackSet;

    #[test]
    fn test_len_empty() {
        let set: RedBlackSet<u32> = RedBlackSet::new();
        assert_eq!(set.len(), 0);
    }

    #[test]
    fn test_is_empty() {
        let set: RedBlackSet<u32> = RedBlackSet::new();
        assert!(set.is_empty());
    }

    #[test]
    fn test_min_max_empty() {
        let set: RedBlackSet<u32> = RedBlackSet::new();
        assert_eq!(set.min(), None);
        assert_eq!(set.max(), None);
        assert!(set.minimum().is_none());
        assert!(set.maximum().is_none());
    }

    #[test]
    fn test_insert() {
        let mut set = RedBlackSet::new();
        assert!(set.insert(1));
        assert!(set.contains(&1));
    }

    #[test]
    fn test_insert_duplicate() {
        let mut set = RedBlackSet::new();
        assert!(set.insert(1));
        assert!(!set.insert(1));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_remove() {
        let mut set = RedBlackSet::new();
        set.insert(1);
        assert_eq!(set.remove(&1), Some(1));
        assert!(!set.contains(&1));
    }

    #[test]
    fn test_remove_missing() {
        let mut set = RedBlackSet::new();
        set.insert(1);
        assert_eq!(set.remove(&2), None);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_min_max() {
        let mut set = RedBlackSet::new();
        set.insert(1);
        set.insert(3);
        set.insert(5);

        assert_eq!(set.min(), Some(&1));
        assert_eq!(set.max(), Some(&5));
        assert_eq!(set.minimum().map(|node| *node.key()), Some(1));
        assert_eq!(set.maximum().map(|node| *node.key()), Some(5));
    }

    #[test]
    fn test_names() {
        let mut set = RedBlackSet::new();
        for name in &["Abdullah", "Maha", "Ja'far", "Amina"] {
            set.insert(name.to_string());
            set.validate().unwrap();
        }

        assert_eq!(set.minimum().map(|node| node.key().as_str()), Some("Abdullah"));
        assert_eq!(set.maximum().map(|node| node.key().as_str()), Some("Maha"));
        assert_eq!(
            set.successor("Abdullah").map(|node| node.key().as_str()),
            Some("Amina"),
        );
        assert_eq!(
            set.predecessor("Maha").map(|node| node.key().as_str()),
            Some("Ja'far"),
        );
        assert_eq!(set.len(), 4);

        assert!(!set.insert(String::from("Abdullah")));
        assert_eq!(set.len(), 4);

        assert_eq!(set.remove("Maha"), Some(String::from("Maha")));
        set.validate().unwrap();
        assert_eq!(set.maximum().map(|node| node.key().as_str()), Some("Ja'far"));
    }

    #[test]
    fn test_successor_chain() {
        let set: RedBlackSet<u32> = vec![8, 3, 10, 1, 6, 14, 4, 7, 13].into_iter().collect();
        let mut keys = Vec::new();
        let mut curr = set.minimum();
        while let Some(node) = curr {
            keys.push(*node.key());
            curr = node.successor();
        }
        assert_eq!(keys, vec![1, 3, 4, 6, 7, 8, 10, 13, 14]);

        keys.clear();
        let mut curr = set.maximum();
        while let Some(node) = curr {
            keys.push(*node.key());
            curr = node.predecessor();
        }
        assert_eq!(keys, vec![14, 13, 10, 8, 7, 6, 4, 3, 1]);
    }

    #[test]
    fn test_remove_everything() {
        let mut set: RedBlackSet<u32> = (0..32).collect();
        for key in (0..32).rev().step_by(2).chain((0..32).step_by(2)) {
            assert_eq!(set.remove(&key), Some(key));
            set.validate().unwrap();
        }
        assert!(set.is_empty());
        assert!(set.minimum().is_none());
        assert!(set.maximum().is_none());
    }

    #[test]
    fn test_into_iter() {
        let mut set = RedBlackSet::new();
        set.insert(1);
        set.insert(5);
        set.insert(3);

        assert_eq!(set.into_iter().collect::<Vec<u32>>(), vec![1, 3, 5]);
    }

    #[test]
    fn test_iter() {
        let mut set = RedBlackSet::new();
        set.insert(1);
        set.insert(5);
        set.insert(3);

        assert_eq!(set.iter().collect::<Vec<&u32>>(), vec![&1, &3, &5]);
        assert_eq!(set.iter().rev().collect::<Vec<&u32>>(), vec![&5, &3, &1]);
    }

    #[test]
    fn test_debug() {
        let set: RedBlackSet<u32> = vec![2, 1].into_iter().collect();
        assert_eq!(format!("{:?}", set), "{1, 2}");
    }
}

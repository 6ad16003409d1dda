use crate::arena::Handle;
use crate::entry::Entry;
use crate::error::Result;
use crate::red_black_tree::node::{Color, Side};
use crate::red_black_tree::tree::Tree;
use std::borrow::Borrow;
use std::fmt;
use std::iter::FromIterator;
use std::vec;

/// Number of nodes per arena chunk used by `new`.
pub const DEFAULT_CHUNK_SIZE: usize = 1024;

/// An ordered map implemented using a red black tree.
///
/// A red black tree is a self-balancing binary search tree that colors every node red or black,
/// keeps the root black, forbids a red node from having a red child, and keeps the number of
/// black nodes equal on every path from a node down to a leaf. Together these bound the height
/// by `2 * log2(n + 1)`.
///
/// Nodes live in an arena and refer to each other by handle, with one shared black sentinel
/// standing in for every leaf. Inserting a key that is already present leaves the map untouched,
/// so the first value stored for a key is kept until that key is removed.
///
/// # Examples
///
/// ```
/// use dynamic_sets::red_black_tree::RedBlackMap;
///
/// let mut map = RedBlackMap::new();
/// map.insert(0, 1);
/// map.insert(3, 4);
///
/// assert_eq!(map[&0], 1);
/// assert_eq!(map.get(&1), None);
/// assert_eq!(map.len(), 2);
///
/// assert_eq!(map.min(), Some(&0));
/// assert_eq!(map.successor(&0).map(|node| *node.key()), Some(3));
///
/// assert_eq!(map.remove(&0), Some((0, 1)));
/// assert_eq!(map.remove(&1), None);
/// ```
pub struct RedBlackMap<K, V> {
    tree: Tree<K, V>,
}

impl<K, V> RedBlackMap<K, V> {
    /// Constructs a new, empty `RedBlackMap<K, V>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynamic_sets::red_black_tree::RedBlackMap;
    ///
    /// let map: RedBlackMap<u32, u32> = RedBlackMap::new();
    /// ```
    pub fn new() -> Self {
        Self::with_chunk_size(DEFAULT_CHUNK_SIZE)
    }

    /// Constructs a new, empty `RedBlackMap<K, V>` whose node arena grows `chunk_size` nodes at a
    /// time.
    ///
    /// # Panics
    ///
    /// Panics if `chunk_size` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynamic_sets::red_black_tree::RedBlackMap;
    ///
    /// let map: RedBlackMap<u32, u32> = RedBlackMap::with_chunk_size(64);
    /// assert_eq!(map.chunk_size(), 64);
    /// ```
    pub fn with_chunk_size(chunk_size: usize) -> Self {
        RedBlackMap {
            tree: Tree::new(chunk_size),
        }
    }

    pub fn chunk_size(&self) -> usize {
        self.tree.chunk_size()
    }

    /// Inserts a key-value pair into the map. Returns `true` if the key was absent. If the key is
    /// already present the map is left unchanged and `false` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynamic_sets::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// assert!(map.insert(1, 1));
    /// assert!(!map.insert(1, 2));
    /// assert_eq!(map.get(&1), Some(&1));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> bool
    where
        K: Ord,
    {
        self.tree.insert(key, value).is_some()
    }

    /// Removes a key-value pair from the map. If the key exists in the map, it will return the
    /// associated key-value pair. Otherwise it will return `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynamic_sets::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.remove(&1), Some((1, 1)));
    /// assert_eq!(map.remove(&1), None);
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.remove(key).map(|entry| entry.into_pair())
    }

    /// Returns the node holding a particular key, or `None` if the key is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynamic_sets::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, "one");
    /// let node = map.search(&1).unwrap();
    /// assert_eq!(node.key(), &1);
    /// assert_eq!(node.value(), &"one");
    /// assert!(map.search(&2).is_none());
    /// ```
    pub fn search<Q>(&self, key: &Q) -> Option<NodeRef<'_, K, V>>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.find(key).map(|handle| self.node(handle))
    }

    /// Checks if a key exists in the map.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.find(key).is_some()
    }

    /// Returns an immutable reference to the value associated with a particular key.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree
            .find(key)
            .map(|handle| &self.tree.entry(handle).value)
    }

    /// Returns a mutable reference to the value associated with a particular key.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynamic_sets::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// *map.get_mut(&1).unwrap() = 2;
    /// assert_eq!(map.get(&1), Some(&2));
    /// ```
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let handle = self.tree.find(key)?;
        Some(&mut self.tree.entry_mut(handle).value)
    }

    /// Returns the node with the smallest key, or `None` if the map is empty.
    pub fn minimum(&self) -> Option<NodeRef<'_, K, V>> {
        self.tree.first().map(|handle| self.node(handle))
    }

    /// Returns the node with the largest key, or `None` if the map is empty.
    pub fn maximum(&self) -> Option<NodeRef<'_, K, V>> {
        self.tree.last().map(|handle| self.node(handle))
    }

    /// Returns the minimum key of the map. Returns `None` if the map is empty.
    pub fn min(&self) -> Option<&K> {
        self.tree.first().map(|handle| &self.tree.entry(handle).key)
    }

    /// Returns the maximum key of the map. Returns `None` if the map is empty.
    pub fn max(&self) -> Option<&K> {
        self.tree.last().map(|handle| &self.tree.entry(handle).key)
    }

    /// Returns the node holding the next larger key after `key`. Returns `None` if `key` is absent
    /// or is the maximum.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynamic_sets::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, ());
    /// map.insert(3, ());
    /// assert_eq!(map.successor(&1).map(|node| *node.key()), Some(3));
    /// assert!(map.successor(&2).is_none());
    /// assert!(map.successor(&3).is_none());
    /// ```
    pub fn successor<Q>(&self, key: &Q) -> Option<NodeRef<'_, K, V>>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.search(key).and_then(|node| node.successor())
    }

    /// Returns the node holding the next smaller key before `key`. Returns `None` if `key` is
    /// absent or is the minimum.
    pub fn predecessor<Q>(&self, key: &Q) -> Option<NodeRef<'_, K, V>>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.search(key).and_then(|node| node.predecessor())
    }

    /// Returns the root node, or `None` if the map is empty.
    pub fn root(&self) -> Option<NodeRef<'_, K, V>> {
        self.link(self.tree.root())
    }

    /// Returns the number of elements in the map.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears the map, removing all values.
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Returns the number of nodes on the longest path from the root to a leaf.
    pub fn height(&self) -> usize {
        self.tree.height()
    }

    /// Checks every red black invariant, the ordering of keys, the parent links, and the recorded
    /// length. Returns the black-height of the tree, counting the sentinel leaves.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynamic_sets::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// for key in 0..100 {
    ///     map.insert(key, ());
    /// }
    /// assert!(map.validate().is_ok());
    /// ```
    pub fn validate(&self) -> Result<usize>
    where
        K: Ord,
    {
        self.tree.validate()
    }

    /// Returns an iterator over the map. The iterator will yield key-value pairs using in-order
    /// traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynamic_sets::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    ///
    /// let mut iterator = map.iter();
    /// assert_eq!(iterator.next(), Some((&1, &1)));
    /// assert_eq!(iterator.next(), Some((&2, &2)));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> RedBlackMapIter<'_, K, V> {
        RedBlackMapIter {
            tree: &self.tree,
            front: self.tree.first(),
            back: self.tree.last(),
            remaining: self.tree.len(),
        }
    }

    fn node(&self, handle: Handle) -> NodeRef<'_, K, V> {
        NodeRef {
            tree: &self.tree,
            handle,
        }
    }

    fn link(&self, handle: Handle) -> Option<NodeRef<'_, K, V>> {
        if handle.is_sentinel() {
            None
        } else {
            Some(self.node(handle))
        }
    }
}

/// A read-only view of a node inside a `RedBlackMap<K, V>`.
///
/// The view borrows the map, so the tree cannot change while it is alive. Links that lead to the
/// sentinel are reported as `None`.
pub struct NodeRef<'a, K, V> {
    tree: &'a Tree<K, V>,
    handle: Handle,
}

impl<'a, K, V> NodeRef<'a, K, V> {
    fn link(&self, handle: Handle) -> Option<NodeRef<'a, K, V>> {
        if handle.is_sentinel() {
            None
        } else {
            Some(NodeRef {
                tree: self.tree,
                handle,
            })
        }
    }

    pub fn key(&self) -> &'a K {
        &self.tree.entry(self.handle).key
    }

    pub fn value(&self) -> &'a V {
        &self.tree.entry(self.handle).value
    }

    pub fn color(&self) -> Color {
        self.tree.color(self.handle)
    }

    pub fn is_red(&self) -> bool {
        self.color() == Color::Red
    }

    pub fn is_black(&self) -> bool {
        self.color() == Color::Black
    }

    pub fn parent(&self) -> Option<NodeRef<'a, K, V>> {
        self.link(self.tree.parent(self.handle))
    }

    pub fn left(&self) -> Option<NodeRef<'a, K, V>> {
        self.link(self.tree.child(self.handle, Side::Left))
    }

    pub fn right(&self) -> Option<NodeRef<'a, K, V>> {
        self.link(self.tree.child(self.handle, Side::Right))
    }

    /// The node with the next larger key.
    pub fn successor(&self) -> Option<NodeRef<'a, K, V>> {
        self.tree
            .successor(self.handle)
            .and_then(|handle| self.link(handle))
    }

    /// The node with the next smaller key.
    pub fn predecessor(&self) -> Option<NodeRef<'a, K, V>> {
        self.tree
            .predecessor(self.handle)
            .and_then(|handle| self.link(handle))
    }
}

impl<'a, K, V> Clone for NodeRef<'a, K, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, K, V> Copy for NodeRef<'a, K, V> {}

impl<'a, K, V> fmt::Debug for NodeRef<'a, K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("key", self.key())
            .field("value", self.value())
            .field("color", &self.color())
            .finish()
    }
}

impl<K, V> Default for RedBlackMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> fmt::Debug for RedBlackMap<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> PartialEq for RedBlackMap<K, V>
where
    K: PartialEq,
    V: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K, V> Eq for RedBlackMap<K, V>
where
    K: Eq,
    V: Eq,
{
}

impl<'a, K, V, Q> std::ops::Index<&'a Q> for RedBlackMap<K, V>
where
    K: Borrow<Q>,
    Q: Ord + ?Sized,
{
    type Output = V;

    fn index(&self, key: &Q) -> &Self::Output {
        self.get(key).expect("Error: key does not exist.")
    }
}

impl<K, V> FromIterator<(K, V)> for RedBlackMap<K, V>
where
    K: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut map = RedBlackMap::new();
        map.extend(iter);
        map
    }
}

impl<K, V> Extend<(K, V)> for RedBlackMap<K, V>
where
    K: Ord,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = (K, V)>,
    {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V> IntoIterator for RedBlackMap<K, V> {
    type IntoIter = RedBlackMapIntoIter<K, V>;
    type Item = (K, V);

    fn into_iter(self) -> Self::IntoIter {
        RedBlackMapIntoIter {
            entries: self.tree.into_entries().into_iter(),
        }
    }
}

impl<'a, K, V> IntoIterator for &'a RedBlackMap<K, V>
where
    K: 'a,
    V: 'a,
{
    type IntoIter = RedBlackMapIter<'a, K, V>;
    type Item = (&'a K, &'a V);

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `RedBlackMap<K, V>`.
///
/// This iterator traverses the elements of the map in-order and yields owned entries.
pub struct RedBlackMapIntoIter<K, V> {
    entries: vec::IntoIter<Entry<K, V>>,
}

impl<K, V> Iterator for RedBlackMapIntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next().map(|entry| entry.into_pair())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for RedBlackMapIntoIter<K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.entries.next_back().map(|entry| entry.into_pair())
    }
}

impl<K, V> ExactSizeIterator for RedBlackMapIntoIter<K, V> {}

/// An iterator for `RedBlackMap<K, V>`.
///
/// This iterator traverses the elements of the map in-order by following successor links and
/// yields immutable references.
pub struct RedBlackMapIter<'a, K, V> {
    tree: &'a Tree<K, V>,
    front: Option<Handle>,
    back: Option<Handle>,
    remaining: usize,
}

impl<'a, K, V> RedBlackMapIter<'a, K, V> {
    fn pair(&self, handle: Handle) -> (&'a K, &'a V) {
        let entry = self.tree.entry(handle);
        (&entry.key, &entry.value)
    }
}

impl<'a, K, V> Iterator for RedBlackMapIter<'a, K, V>
where
    K: 'a,
    V: 'a,
{
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let handle = self.front?;
        self.remaining -= 1;
        self.front = self.tree.successor(handle);
        Some(self.pair(handle))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K, V> DoubleEndedIterator for RedBlackMapIter<'a, K, V>
where
    K: 'a,
    V: 'a,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let handle = self.back?;
        self.remaining -= 1;
        self.back = self.tree.predecessor(handle);
        Some(self.pair(handle))
    }
}

impl<'a, K, V> ExactSizeIterator for RedBlackMapIter<'a, K, V>
where
    K: 'a,
    V: 'a,
{
}

#[cfg(test)]
mod tests {
    use super::RedBlackMap;
    use crate::red_black_tree::Color;

    fn names() -> RedBlackMap<&'static str, usize> {
        let mut map = RedBlackMap::new();
        for (index, name) in ["Abdullah", "Maha", "Ja'far", "Amina"].iter().enumerate() {
            assert!(map.insert(*name, index));
            map.validate().unwrap();
        }
        map
    }

    #[test]
    fn test_len_empty() {
        let map: RedBlackMap<u32, u32> = RedBlackMap::new();
        assert_eq!(map.len(), 0);
        assert!(map.is_empty());
        assert!(map.root().is_none());
    }

    #[test]
    fn test_min_max_empty() {
        let map: RedBlackMap<u32, u32> = RedBlackMap::new();
        assert_eq!(map.min(), None);
        assert_eq!(map.max(), None);
        assert!(map.minimum().is_none());
        assert!(map.maximum().is_none());
    }

    #[test]
    fn test_insert() {
        let mut map = RedBlackMap::new();
        assert!(map.insert(1, 1));
        assert!(map.contains_key(&1));
        assert_eq!(map.get(&1), Some(&1));
    }

    #[test]
    fn test_insert_duplicate_keeps_first_value() {
        let mut map = RedBlackMap::new();
        assert!(map.insert(1, 1));
        assert!(!map.insert(1, 2));
        assert_eq!(map.get(&1), Some(&1));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_remove() {
        let mut map = RedBlackMap::new();
        map.insert(1, 1);
        assert_eq!(map.remove(&1), Some((1, 1)));
        assert!(!map.contains_key(&1));
        assert_eq!(map.remove(&1), None);
    }

    #[test]
    fn test_get_mut() {
        let mut map = RedBlackMap::new();
        map.insert(1, 1);
        {
            let value = map.get_mut(&1);
            *value.unwrap() = 3;
        }
        assert_eq!(map.get(&1), Some(&3));
        assert_eq!(map.get_mut(&2), None);
    }

    #[test]
    fn test_borrowed_lookup() {
        let mut map = RedBlackMap::new();
        map.insert(String::from("key"), 1);
        assert_eq!(map.get("key"), Some(&1));
        assert_eq!(map["key"], 1);
        assert_eq!(map.remove("key"), Some((String::from("key"), 1)));
    }

    #[test]
    #[should_panic]
    fn test_index_missing() {
        let map: RedBlackMap<u32, u32> = RedBlackMap::new();
        map[&1];
    }

    #[test]
    fn test_names_scenario() {
        let mut map = names();
        assert_eq!(map.len(), 4);
        assert_eq!(map.min(), Some(&"Abdullah"));
        assert_eq!(map.max(), Some(&"Maha"));
        assert_eq!(map.successor("Abdullah").map(|node| *node.key()), Some("Amina"));
        assert_eq!(map.predecessor("Maha").map(|node| *node.key()), Some("Ja'far"));

        assert!(!map.insert("Abdullah", 9));
        assert_eq!(map.len(), 4);
        assert_eq!(map.get("Abdullah"), Some(&0));

        assert_eq!(map.remove("Maha"), Some(("Maha", 1)));
        map.validate().unwrap();
        assert_eq!(map.maximum().map(|node| *node.key()), Some("Ja'far"));
    }

    #[test]
    fn test_successor_predecessor_missing_and_ends() {
        let map = names();
        assert!(map.successor("Zaid").is_none());
        assert!(map.predecessor("Zaid").is_none());
        assert!(map.successor("Maha").is_none());
        assert!(map.predecessor("Abdullah").is_none());
    }

    #[test]
    fn test_successor_without_right_child() {
        let mut map = RedBlackMap::new();
        for key in &[4, 2, 6, 1, 3, 5, 7] {
            map.insert(*key, ());
        }
        let three = map.search(&3).unwrap();
        assert!(three.right().is_none());
        assert_eq!(three.successor().map(|node| *node.key()), Some(4));

        let five = map.search(&5).unwrap();
        assert!(five.left().is_none());
        assert_eq!(five.predecessor().map(|node| *node.key()), Some(4));
    }

    #[test]
    fn test_node_links() {
        let mut map = RedBlackMap::new();
        for key in 1..=3 {
            map.insert(key, ());
        }
        let root = map.root().unwrap();
        assert_eq!(root.key(), &2);
        assert!(root.is_black());
        assert!(root.parent().is_none());

        let left = root.left().unwrap();
        let right = root.right().unwrap();
        assert_eq!(left.key(), &1);
        assert_eq!(right.key(), &3);
        assert_eq!(left.color(), Color::Red);
        assert!(right.is_red());
        assert_eq!(left.parent().map(|node| *node.key()), Some(2));
        assert!(left.left().is_none());
        assert!(left.right().is_none());
    }

    #[test]
    fn test_clear() {
        let mut map = names();
        map.clear();
        assert!(map.is_empty());
        assert!(map.minimum().is_none());
        assert!(map.insert("Amina", 0));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_iter() {
        let mut map = RedBlackMap::new();
        map.insert(1, 2);
        map.insert(5, 6);
        map.insert(3, 4);

        assert_eq!(
            map.iter().collect::<Vec<(&u32, &u32)>>(),
            vec![(&1, &2), (&3, &4), (&5, &6)],
        );
        assert_eq!(
            map.iter().rev().map(|(key, _)| *key).collect::<Vec<u32>>(),
            vec![5, 3, 1],
        );
    }

    #[test]
    fn test_iter_both_ends() {
        let map: RedBlackMap<u32, ()> = (0..5).map(|key| (key, ())).collect();
        let mut iter = map.iter();
        assert_eq!(iter.len(), 5);
        assert_eq!(iter.next().map(|pair| *pair.0), Some(0));
        assert_eq!(iter.next_back().map(|pair| *pair.0), Some(4));
        assert_eq!(iter.next().map(|pair| *pair.0), Some(1));
        assert_eq!(iter.next_back().map(|pair| *pair.0), Some(3));
        assert_eq!(iter.next().map(|pair| *pair.0), Some(2));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn test_into_iter() {
        let mut map = RedBlackMap::new();
        map.insert(1, 2);
        map.insert(5, 6);
        map.insert(3, 4);

        assert_eq!(
            map.into_iter().collect::<Vec<(u32, u32)>>(),
            vec![(1, 2), (3, 4), (5, 6)],
        );
    }

    #[test]
    fn test_from_iter_ignores_duplicates() {
        let map: RedBlackMap<u32, char> = vec![(2, 'a'), (1, 'b'), (2, 'c')].into_iter().collect();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get(&2), Some(&'a'));
        map.validate().unwrap();
    }

    #[test]
    fn test_eq_ignores_shape() {
        let ascending: RedBlackMap<u32, ()> = (0..10).map(|key| (key, ())).collect();
        let descending: RedBlackMap<u32, ()> = (0..10).rev().map(|key| (key, ())).collect();
        assert_eq!(ascending, descending);
    }

    #[test]
    fn test_debug() {
        let mut map = RedBlackMap::new();
        map.insert(2, 'b');
        map.insert(1, 'a');
        assert_eq!(format!("{:?}", map), "{1: 'a', 2: 'b'}");
        assert_eq!(
            format!("{:?}", map.search(&1).unwrap()),
            "NodeRef { key: 1, value: 'a', color: Red }",
        );
    }
}

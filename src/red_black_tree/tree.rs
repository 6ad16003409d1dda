use crate::arena::{Handle, TypedArena};
use crate::entry::Entry;
use crate::error::{Error, Result};
use crate::red_black_tree::node::{Color, Node, Sentinel, Side};
use log::{debug, trace};
use std::borrow::Borrow;
use std::cmp::Ordering;

const SENTINEL: Handle = Handle::SENTINEL;

/// Repair step chosen for one iteration of the insertion fixup.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum InsertCase {
    /// The uncle is red: push the violation two levels up.
    RedUncle,
    /// The uncle is black and the node is an inner grandchild: straighten the zig-zag.
    InnerChild,
    /// The uncle is black and the node is an outer grandchild: rotate the grandparent.
    OuterChild,
}

/// Repair step chosen for one iteration of the removal fixup.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum RemoveCase {
    /// The sibling is red: rotate it above the parent so the new sibling is black.
    RedSibling,
    /// Both nephews are black: give up one black on the sibling's side and move up.
    BlackNephews,
    /// Only the near nephew is red: rotate it into the far position.
    RedNearNephew,
    /// The far nephew is red: rotate the parent and terminate.
    RedFarNephew,
}

/// An arena-backed red black tree with a single shared sentinel.
///
/// Every link is a `Handle`; `Handle::SENTINEL` stands for every external leaf and for the parent
/// of the root.
pub struct Tree<K, V> {
    arena: TypedArena<Node<K, V>>,
    sentinel: Sentinel,
    root: Handle,
    len: usize,
}

impl<K, V> Tree<K, V> {
    pub fn new(chunk_size: usize) -> Self {
        Tree {
            arena: TypedArena::new(chunk_size),
            sentinel: Sentinel::new(),
            root: SENTINEL,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn root(&self) -> Handle {
        self.root
    }

    pub fn chunk_size(&self) -> usize {
        self.arena.chunk_size()
    }

    pub fn entry(&self, handle: Handle) -> &Entry<K, V> {
        &self.arena[handle].entry
    }

    pub fn entry_mut(&mut self, handle: Handle) -> &mut Entry<K, V> {
        &mut self.arena[handle].entry
    }

    pub fn color(&self, handle: Handle) -> Color {
        if handle == SENTINEL {
            Color::Black
        } else {
            self.arena[handle].color
        }
    }

    fn set_color(&mut self, handle: Handle, color: Color) {
        if handle == SENTINEL {
            debug_assert_eq!(color, Color::Black, "the sentinel must stay black");
        } else {
            self.arena[handle].color = color;
        }
    }

    pub fn parent(&self, handle: Handle) -> Handle {
        if handle == SENTINEL {
            self.sentinel.parent
        } else {
            self.arena[handle].parent
        }
    }

    fn set_parent(&mut self, handle: Handle, parent: Handle) {
        if handle == SENTINEL {
            self.sentinel.parent = parent;
        } else {
            self.arena[handle].parent = parent;
        }
    }

    pub fn child(&self, handle: Handle, side: Side) -> Handle {
        if handle == SENTINEL {
            SENTINEL
        } else {
            self.arena[handle].child(side)
        }
    }

    fn set_child(&mut self, handle: Handle, side: Side, child: Handle) {
        debug_assert!(handle != SENTINEL, "the sentinel has no child slots");
        *self.arena[handle].child_mut(side) = child;
    }

    /// The side of its parent that `handle` hangs on. The sentinel is resolved through its
    /// transient parent link, which is only meaningful during removal.
    fn side_of(&self, handle: Handle) -> Side {
        if self.child(self.parent(handle), Side::Left) == handle {
            Side::Left
        } else {
            Side::Right
        }
    }

    pub fn find<Q>(&self, key: &Q) -> Option<Handle>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut curr = self.root;
        while curr != SENTINEL {
            let node = &self.arena[curr];
            curr = match key.cmp(node.entry.key.borrow()) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(curr),
            };
        }
        None
    }

    /// Walks from a real node as far as possible toward `side`.
    fn extreme(&self, mut handle: Handle, side: Side) -> Handle {
        debug_assert!(handle != SENTINEL);
        loop {
            let next = self.child(handle, side);
            if next == SENTINEL {
                return handle;
            }
            handle = next;
        }
    }

    pub fn first(&self) -> Option<Handle> {
        self.end(Side::Left)
    }

    pub fn last(&self) -> Option<Handle> {
        self.end(Side::Right)
    }

    fn end(&self, side: Side) -> Option<Handle> {
        if self.root == SENTINEL {
            None
        } else {
            Some(self.extreme(self.root, side))
        }
    }

    pub fn successor(&self, handle: Handle) -> Option<Handle> {
        self.neighbor(handle, Side::Right)
    }

    pub fn predecessor(&self, handle: Handle) -> Option<Handle> {
        self.neighbor(handle, Side::Left)
    }

    /// The in-order neighbor of a real node toward `side`: the nearest node of the child subtree
    /// on that side if there is one, otherwise the first ancestor reached from the opposite side.
    fn neighbor(&self, handle: Handle, side: Side) -> Option<Handle> {
        let child = self.child(handle, side);
        if child != SENTINEL {
            return Some(self.extreme(child, side.opposite()));
        }

        let mut curr = handle;
        let mut parent = self.parent(curr);
        while parent != SENTINEL && self.child(parent, side) == curr {
            curr = parent;
            parent = self.parent(parent);
        }

        if parent == SENTINEL {
            None
        } else {
            Some(parent)
        }
    }

    /// Rotates `handle` down toward `side`, lifting its child on the opposite side into its place.
    /// `rotate(x, Side::Left)` is the classic left rotation.
    fn rotate(&mut self, handle: Handle, side: Side) {
        let other = side.opposite();
        let pivot = self.child(handle, other);
        debug_assert!(pivot != SENTINEL, "cannot rotate toward a missing child");
        trace!("rotate {:?} at {:?}", side, handle);

        let inner = self.child(pivot, side);
        self.set_child(handle, other, inner);
        if inner != SENTINEL {
            self.set_parent(inner, handle);
        }

        let parent = self.parent(handle);
        self.set_parent(pivot, parent);
        if parent == SENTINEL {
            self.root = pivot;
        } else {
            let parent_side = self.side_of(handle);
            self.set_child(parent, parent_side, pivot);
        }

        self.set_child(pivot, side, handle);
        self.set_parent(handle, pivot);
    }

    /// Inserts a new node unless an equal key is present. Returns the new node's handle, or `None`
    /// if the key was already there; in that case `key` and `value` are dropped.
    pub fn insert(&mut self, key: K, value: V) -> Option<Handle>
    where
        K: Ord,
    {
        let mut parent = SENTINEL;
        let mut side = Side::Left;
        let mut curr = self.root;
        while curr != SENTINEL {
            let node = &self.arena[curr];
            side = match key.cmp(&node.entry.key) {
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
                Ordering::Equal => return None,
            };
            parent = curr;
            curr = node.child(side);
        }

        let handle = self.arena.allocate(Node::new(key, value, parent));
        if parent == SENTINEL {
            self.root = handle;
        } else {
            self.set_child(parent, side, handle);
        }
        self.len += 1;

        self.insert_fixup(handle);
        Some(handle)
    }

    fn classify_insert(&self, handle: Handle, parent_side: Side, uncle: Handle) -> InsertCase {
        if self.color(uncle) == Color::Red {
            InsertCase::RedUncle
        } else if self.side_of(handle) != parent_side {
            InsertCase::InnerChild
        } else {
            InsertCase::OuterChild
        }
    }

    // Only the red-red rule can be broken, and only between `curr` and its parent.
    fn insert_fixup(&mut self, mut curr: Handle) {
        while self.color(self.parent(curr)) == Color::Red {
            let parent = self.parent(curr);
            let grandparent = self.parent(parent);
            let side = self.side_of(parent);
            let uncle = self.child(grandparent, side.opposite());

            let case = self.classify_insert(curr, side, uncle);
            trace!("insert fixup {:?} at {:?}", case, curr);
            match case {
                InsertCase::RedUncle => {
                    self.set_color(parent, Color::Black);
                    self.set_color(uncle, Color::Black);
                    self.set_color(grandparent, Color::Red);
                    curr = grandparent;
                },
                InsertCase::InnerChild => {
                    // The next iteration sees `curr` as an outer child.
                    curr = parent;
                    self.rotate(curr, side);
                },
                InsertCase::OuterChild => {
                    self.set_color(parent, Color::Black);
                    self.set_color(grandparent, Color::Red);
                    self.rotate(grandparent, side.opposite());
                },
            }
        }

        let root = self.root;
        self.set_color(root, Color::Black);
    }

    /// Replaces the subtree rooted at `old` with the one rooted at `new` in the eyes of `old`'s
    /// parent. `new` may be the sentinel, whose parent link is then set as well.
    fn transplant(&mut self, old: Handle, new: Handle) {
        let parent = self.parent(old);
        if parent == SENTINEL {
            self.root = new;
        } else {
            let side = self.side_of(old);
            self.set_child(parent, side, new);
        }
        self.set_parent(new, parent);
    }

    pub fn remove<Q>(&mut self, key: &Q) -> Option<Entry<K, V>>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let handle = self.find(key)?;
        Some(self.remove_node(handle))
    }

    fn remove_node(&mut self, handle: Handle) -> Entry<K, V> {
        let left = self.child(handle, Side::Left);
        let right = self.child(handle, Side::Right);
        let mut removed_color = self.color(handle);
        let replacement;

        if left == SENTINEL {
            replacement = right;
            self.transplant(handle, right);
        } else if right == SENTINEL {
            replacement = left;
            self.transplant(handle, left);
        } else {
            let next = self.extreme(right, Side::Left);
            removed_color = self.color(next);
            replacement = self.child(next, Side::Right);
            if self.parent(next) == handle {
                self.set_parent(replacement, next);
            } else {
                self.transplant(next, replacement);
                self.set_child(next, Side::Right, right);
                self.set_parent(right, next);
            }
            self.transplant(handle, next);
            self.set_child(next, Side::Left, left);
            self.set_parent(left, next);
            let color = self.color(handle);
            self.set_color(next, color);
        }

        self.len -= 1;
        if removed_color == Color::Black {
            self.remove_fixup(replacement);
        }
        self.sentinel.parent = SENTINEL;

        self.arena.free(handle).entry
    }

    fn classify_remove(&self, sibling: Handle, side: Side) -> RemoveCase {
        if self.color(sibling) == Color::Red {
            RemoveCase::RedSibling
        } else if self.color(self.child(sibling, side.opposite())) == Color::Red {
            RemoveCase::RedFarNephew
        } else if self.color(self.child(sibling, side)) == Color::Red {
            RemoveCase::RedNearNephew
        } else {
            RemoveCase::BlackNephews
        }
    }

    // `curr` carries an extra black that has to be pushed up or absorbed.
    fn remove_fixup(&mut self, mut curr: Handle) {
        while curr != self.root && self.color(curr) == Color::Black {
            let parent = self.parent(curr);
            let side = self.side_of(curr);
            let sibling = self.child(parent, side.opposite());

            let case = self.classify_remove(sibling, side);
            trace!("remove fixup {:?} at {:?}", case, curr);
            match case {
                RemoveCase::RedSibling => {
                    // The parent's new child on the far side is black; the next iteration picks
                    // one of the other cases.
                    self.set_color(sibling, Color::Black);
                    self.set_color(parent, Color::Red);
                    self.rotate(parent, side);
                },
                RemoveCase::BlackNephews => {
                    self.set_color(sibling, Color::Red);
                    curr = parent;
                },
                RemoveCase::RedNearNephew | RemoveCase::RedFarNephew => {
                    let mut sibling = sibling;
                    if case == RemoveCase::RedNearNephew {
                        let near = self.child(sibling, side);
                        self.set_color(near, Color::Black);
                        self.set_color(sibling, Color::Red);
                        self.rotate(sibling, side.opposite());
                        sibling = self.child(parent, side.opposite());
                    }

                    let parent_color = self.color(parent);
                    let far = self.child(sibling, side.opposite());
                    self.set_color(sibling, parent_color);
                    self.set_color(parent, Color::Black);
                    self.set_color(far, Color::Black);
                    self.rotate(parent, side);
                    curr = self.root;
                },
            }
        }

        self.set_color(curr, Color::Black);
    }

    pub fn clear(&mut self) {
        debug!("clearing tree of {} nodes", self.len);
        self.arena.clear();
        self.sentinel = Sentinel::new();
        self.root = SENTINEL;
        self.len = 0;
    }

    /// Handles of every node in ascending key order.
    pub fn handles_in_order(&self) -> Vec<Handle> {
        let mut handles = Vec::with_capacity(self.len);
        let mut curr = self.first();
        while let Some(handle) = curr {
            handles.push(handle);
            curr = self.successor(handle);
        }
        handles
    }

    /// Consumes the tree and returns its entries in ascending key order.
    pub fn into_entries(mut self) -> Vec<Entry<K, V>> {
        let handles = self.handles_in_order();
        handles
            .into_iter()
            .map(|handle| self.arena.free(handle).entry)
            .collect()
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack = Vec::new();
        if self.root != SENTINEL {
            stack.push((self.root, 1));
        }
        while let Some((handle, depth)) = stack.pop() {
            height = height.max(depth);
            let node = &self.arena[handle];
            for &child in &[node.left, node.right] {
                if child != SENTINEL {
                    stack.push((child, depth + 1));
                }
            }
        }
        height
    }

    /// Checks every red black and structural invariant and returns the black-height of the root.
    pub fn validate(&self) -> Result<usize>
    where
        K: Ord,
    {
        if self.color(self.root) == Color::Red {
            return Err(Error::RedRoot);
        }
        if self.root != SENTINEL && self.parent(self.root) != SENTINEL {
            return Err(Error::BrokenParentLink { depth: 1 });
        }

        let mut count = 0;
        let black_height = self.validate_subtree(self.root, None, None, 1, &mut count)?;
        if count != self.len {
            return Err(Error::LengthMismatch {
                expected: self.len,
                actual: count,
            });
        }
        Ok(black_height)
    }

    fn validate_subtree(
        &self,
        handle: Handle,
        lower: Option<&K>,
        upper: Option<&K>,
        depth: usize,
        count: &mut usize,
    ) -> Result<usize>
    where
        K: Ord,
    {
        if handle == SENTINEL {
            return Ok(1);
        }
        *count += 1;

        let node = &self.arena[handle];
        let key = &node.entry.key;
        if lower.map_or(false, |lower| key <= lower) || upper.map_or(false, |upper| key >= upper) {
            return Err(Error::OutOfOrder { depth });
        }

        for &child in &[node.left, node.right] {
            if child == SENTINEL {
                continue;
            }
            if self.parent(child) != handle {
                return Err(Error::BrokenParentLink { depth: depth + 1 });
            }
            if node.color == Color::Red && self.color(child) == Color::Red {
                return Err(Error::ConsecutiveReds { depth });
            }
        }

        let left = self.validate_subtree(node.left, lower, Some(key), depth + 1, count)?;
        let right = self.validate_subtree(node.right, Some(key), upper, depth + 1, count)?;
        if left != right {
            return Err(Error::BlackHeightMismatch { depth, left, right });
        }

        Ok(left + if node.color == Color::Black { 1 } else { 0 })
    }
}

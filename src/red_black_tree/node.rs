use crate::arena::Handle;
use crate::entry::Entry;

/// An enum representing the color of a node in a red black tree.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Color {
    Red,
    Black,
}

/// Which child slot of a node is meant. Mirrored fixup cases are written once against a side and
/// its opposite.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// A struct representing an internal node of a red black tree.
pub struct Node<K, V> {
    pub entry: Entry<K, V>,
    pub color: Color,
    pub parent: Handle,
    pub left: Handle,
    pub right: Handle,
}

impl<K, V> Node<K, V> {
    /// A fresh red leaf hanging under `parent`.
    pub fn new(key: K, value: V, parent: Handle) -> Self {
        Node {
            entry: Entry::new(key, value),
            color: Color::Red,
            parent,
            left: Handle::SENTINEL,
            right: Handle::SENTINEL,
        }
    }

    pub fn child(&self, side: Side) -> Handle {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn child_mut(&mut self, side: Side) -> &mut Handle {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

/// The shared black leaf of a tree.
///
/// Its children are always itself and its color is always black, so only the parent link is
/// stored. Removal may point it at the node above a vacated position while the fixup runs; it is
/// meaningless at any other time.
pub struct Sentinel {
    pub parent: Handle,
}

impl Sentinel {
    pub fn new() -> Self {
        Sentinel {
            parent: Handle::SENTINEL,
        }
    }
}

//! An ordered multimap backed by a red-black tree.
//!
//! Nodes live in an arena owned by the tree and refer to each other through
//! [`NodeId`] handles, so the parent back-links never own anything.
//! Insertion is unconditional: equal keys are kept, and a new key equal to
//! an existing one descends to the left of it.
//!
//! ```
//! use rbindex::Tree;
//!
//! let mut tree = Tree::new();
//! tree.insert(20, "b");
//! tree.insert(10, "a");
//! tree.insert(30, "c");
//!
//! assert_eq!(tree.keys().copied().collect::<Vec<_>>(), [10, 20, 30]);
//! assert_eq!(tree.validate(), Ok(2));
//! ```
mod error;
mod iter;
mod node;
mod root;
mod set;
mod tree;
mod validate;

pub use error::StructuralInvariantViolation;
pub use iter::set::SetIter;
pub use iter::tree::{IntoIter, IntoKeys, IntoValues, Iter, Keys, Values};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red = 0,
    Black = 1,
}

impl From<Color> for usize {
    fn from(color: Color) -> usize {
        color as usize
    }
}

/// A stable handle to a node in a [`Tree`].
///
/// Handles are plain arena indices. Nodes are never removed, so a handle
/// stays valid for as long as the tree that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

#[derive(Clone, PartialEq)]
pub struct Node<K, V> {
    pub(crate) parent: Option<NodeId>,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
    pub(crate) color: Color,
    pub(crate) key: K,
    pub(crate) value: V,
}

/// The node arena plus the handle of the current root.
#[derive(Clone)]
pub(crate) struct Root<K, V> {
    nodes: Vec<Node<K, V>>,
    root: Option<NodeId>,
}

/// An ordered multimap.
/// K is the key type, V is the payload.
#[derive(Clone)]
pub struct Tree<K, V> {
    root: Root<K, V>,
    len: usize,
}

/// A multiset of T, in sorted order.
#[derive(Clone)]
pub struct Set<T> {
    tree: Tree<T, ()>,
}

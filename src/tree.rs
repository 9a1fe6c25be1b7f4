use std::fmt::Debug;

use log::trace;

use crate::{Node, NodeId, Root, Side, Tree};

impl<K, V> Default for Tree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Tree<K, V> {
    pub fn new() -> Self {
        Tree {
            root: Root::new(),
            len: 0,
        }
    }

    /// An empty tree with room for `capacity` nodes before the arena
    /// reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        Tree {
            root: Root::with_capacity(capacity),
            len: 0,
        }
    }

    /// Inserts `key` with `value` and returns the handle of the new node.
    ///
    /// Insertion never replaces anything: a key equal to one already stored
    /// gets its own node, placed in the left subtree of the existing one.
    /// Traversal therefore yields newer equal keys before older ones.
    ///
    /// ```
    /// use rbindex::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(5, "a");
    /// tree.insert(5, "b");
    ///
    /// assert_eq!(tree.len(), 2);
    /// assert_eq!(tree.values().copied().collect::<Vec<_>>(), ["b", "a"]);
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> NodeId
    where
        K: Ord,
    {
        let mut parent = None;
        let mut link = self.root.root();
        while let Some(candidate) = link {
            let candidate_ref = &self.root[candidate];
            if key > candidate_ref.key {
                parent = Some((candidate, Side::Right));
                link = candidate_ref.right;
            } else {
                parent = Some((candidate, Side::Left));
                link = candidate_ref.left;
            }
        }

        let node = self.root.link(key, value, parent);
        self.len += 1;
        trace!("linked {node:?} under {parent:?}");
        if parent.is_some() {
            self.root.insert_color(node);
        }

        #[cfg(feature = "check-invariants")]
        if let Err(err) = self.validate() {
            panic!("insert left the tree unbalanced: {err}");
        }

        node
    }

    /// The number of entries, one per [`Tree::insert`] call.
    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The handle of the root node, `None` when the tree is empty.
    pub fn root(&self) -> Option<NodeId> {
        self.root.root()
    }

    pub fn node(&self, id: NodeId) -> Option<&Node<K, V>> {
        self.root.get(id)
    }

    /// Mutable access to a stored payload. Keys are never handed out
    /// mutably, so the ordering can't be broken through this.
    pub fn value_mut(&mut self, id: NodeId) -> Option<&mut V> {
        self.root.get_mut(id).map(|node| &mut node.value)
    }

    /// Whether `id` is currently the left child of its parent. Derived from
    /// the parent's links, so it is never stale.
    pub fn is_left_child(&self, id: NodeId) -> bool {
        self.node(id).is_some() && self.root.side_of(id) == Some(Side::Left)
    }

    /// The number of nodes on the longest path from the root down.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut level: Vec<NodeId> = self.root.root().into_iter().collect();
        while !level.is_empty() {
            height += 1;
            level = level
                .into_iter()
                .flat_map(|id| [self.root[id].left, self.root[id].right])
                .flatten()
                .collect();
        }
        height
    }
}

impl<K, V> Debug for Tree<K, V>
where
    K: Debug,
    V: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

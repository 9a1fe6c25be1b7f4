use std::ops::{Index, IndexMut};

use log::trace;

use super::{Color, Node, NodeId, Root, Side};

impl<K, V> Index<NodeId> for Root<K, V> {
    type Output = Node<K, V>;

    #[inline(always)]
    fn index(&self, id: NodeId) -> &Node<K, V> {
        &self.nodes[id.0]
    }
}

impl<K, V> IndexMut<NodeId> for Root<K, V> {
    #[inline(always)]
    fn index_mut(&mut self, id: NodeId) -> &mut Node<K, V> {
        &mut self.nodes[id.0]
    }
}

// Public
impl<K, V> Root<K, V> {
    pub fn new() -> Self {
        Root {
            nodes: Vec::new(),
            root: None,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Root {
            nodes: Vec::with_capacity(capacity),
            root: None,
        }
    }

    #[inline(always)]
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    #[inline(always)]
    pub fn get(&self, id: NodeId) -> Option<&Node<K, V>> {
        self.nodes.get(id.0)
    }

    #[inline(always)]
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node<K, V>> {
        self.nodes.get_mut(id.0)
    }

    pub fn into_nodes(self) -> Vec<Node<K, V>> {
        self.nodes
    }

    /// Moves a new node into the arena and hangs it under `parent` on the
    /// given side. Without a parent the node becomes the (black) root.
    ///
    /// The slot on `parent` must be empty.
    pub fn link(&mut self, key: K, value: V, parent: Option<(NodeId, Side)>) -> NodeId {
        let id = NodeId(self.nodes.len());
        let mut node = Node::new(key, value);
        match parent {
            Some((parent, side)) => {
                node.parent = Some(parent);
                self.nodes.push(node);
                match side {
                    Side::Left => self[parent].left = Some(id),
                    Side::Right => self[parent].right = Some(id),
                }
            }
            None => {
                node.set_color(Color::Black);
                self.nodes.push(node);
                self.root = Some(id);
            }
        }
        id
    }

    /// Which side of its parent `id` hangs on; `None` for the root.
    #[inline]
    pub fn side_of(&self, id: NodeId) -> Option<Side> {
        let parent = self[id].parent?;
        if self[parent].left == Some(id) {
            Some(Side::Left)
        } else {
            Some(Side::Right)
        }
    }

    /// Restores the red-black properties after `node` was linked in red.
    ///
    /// Walks from `node` up to the root. Any red node found under a red
    /// parent is corrected in place; the walk then resumes from whatever
    /// the node's parent is after the correction.
    pub fn insert_color(&mut self, node: NodeId) {
        let mut current = Some(node);
        while let Some(node) = current {
            let Some(parent) = self[node].parent else {
                break;
            };
            if self[node].is_red() && self[parent].is_red() {
                self.correct(node, parent);
            }
            current = self[node].parent;
        }
    }

    pub fn first(&self) -> Option<NodeId> {
        let mut n = self.root?;
        while let Some(left) = self[n].left {
            n = left;
        }
        Some(n)
    }

    pub fn last(&self) -> Option<NodeId> {
        let mut n = self.root?;
        while let Some(right) = self[n].right {
            n = right;
        }
        Some(n)
    }

    /// The in-order successor of `id`.
    pub fn next(&self, id: NodeId) -> Option<NodeId> {
        // If we have a right-hand child, go down and then left as far as we
        // can.
        if let Some(mut current) = self[id].right {
            while let Some(left) = self[current].left {
                current = left;
            }
            return Some(current);
        }
        // No right-hand children. Everything down and left is smaller than
        // us, so go up until we leave a left-hand subtree; that parent is
        // next.
        let mut node = id;
        while let Some(parent) = self[node].parent {
            if self[parent].left == Some(node) {
                return Some(parent);
            }
            node = parent;
        }
        None
    }

    /// The in-order predecessor of `id`.
    pub fn prev(&self, id: NodeId) -> Option<NodeId> {
        if let Some(mut current) = self[id].left {
            while let Some(right) = self[current].right {
                current = right;
            }
            return Some(current);
        }
        let mut node = id;
        while let Some(parent) = self[node].parent {
            if self[parent].right == Some(node) {
                return Some(parent);
            }
            node = parent;
        }
        None
    }
}

// Rotations. They only rewrite links; colors are the caller's business.
impl<K, V> Root<K, V> {
    /// Promotes `pivot.right` into the pivot's position.
    ///
    /// ```text
    ///      P               R
    ///     / \             / \
    ///    a   R    -->    P   c
    ///       / \         / \
    ///      b   c       a   b
    /// ```
    ///
    /// Returns the promoted node, or `None` if `pivot` has no right child.
    pub fn rotate_left(&mut self, pivot: NodeId) -> Option<NodeId> {
        let promoted = self[pivot].right?;
        let inner = self[promoted].left;
        let parent = self[pivot].parent;

        self[pivot].right = inner;
        if let Some(inner) = inner {
            self[inner].parent = Some(pivot);
        }
        self[promoted].left = Some(pivot);
        self[pivot].parent = Some(promoted);
        self[promoted].parent = parent;
        self.change_child(pivot, promoted, parent);

        trace!("rotate left at {pivot:?}, promoted {promoted:?}");
        Some(promoted)
    }

    /// Promotes `pivot.left` into the pivot's position.
    ///
    /// ```text
    ///        P           L
    ///       / \         / \
    ///      L   c  -->  a   P
    ///     / \             / \
    ///    a   b           b   c
    /// ```
    pub fn rotate_right(&mut self, pivot: NodeId) -> Option<NodeId> {
        let promoted = self[pivot].left?;
        let inner = self[promoted].right;
        let parent = self[pivot].parent;

        self[pivot].left = inner;
        if let Some(inner) = inner {
            self[inner].parent = Some(pivot);
        }
        self[promoted].right = Some(pivot);
        self[pivot].parent = Some(promoted);
        self[promoted].parent = parent;
        self.change_child(pivot, promoted, parent);

        trace!("rotate right at {pivot:?}, promoted {promoted:?}");
        Some(promoted)
    }

    /// Brings `pivot.right.left` up into the pivot's position.
    ///
    /// ```text
    ///      P                X
    ///       \              / \
    ///        R    -->     P   R
    ///       /
    ///      X
    /// ```
    pub fn rotate_right_left(&mut self, pivot: NodeId) -> Option<NodeId> {
        let right = self[pivot].right?;
        self.rotate_right(right)?;
        self.rotate_left(pivot)
    }

    /// Brings `pivot.left.right` up into the pivot's position.
    ///
    /// ```text
    ///        P            X
    ///       /            / \
    ///      L      -->   L   P
    ///       \
    ///        X
    /// ```
    pub fn rotate_left_right(&mut self, pivot: NodeId) -> Option<NodeId> {
        let left = self[pivot].left?;
        self.rotate_left(left)?;
        self.rotate_right(pivot)
    }
}

// Private
impl<K, V> Root<K, V> {
    /// Points whatever referenced `old` (its parent, or the root slot) at
    /// `new`. `parent` is `old`'s parent before the rewrite.
    fn change_child(&mut self, old: NodeId, new: NodeId, parent: Option<NodeId>) {
        if let Some(parent) = parent {
            let parent = &mut self[parent];
            if parent.left == Some(old) {
                parent.left = Some(new);
            } else {
                parent.right = Some(new);
            }
        } else {
            self.root = Some(new);
        }
    }

    /// Fixes a red `node` sitting under a red `parent`.
    fn correct(&mut self, node: NodeId, parent: NodeId) {
        let Some(gparent) = self[parent].parent else {
            // A red root; painting it black adds one black node to every
            // path at once.
            self[parent].set_color(Color::Black);
            return;
        };
        let parent_side = if self[gparent].left == Some(parent) {
            Side::Left
        } else {
            Side::Right
        };
        let uncle = match parent_side {
            Side::Left => self[gparent].right,
            Side::Right => self[gparent].left,
        };

        if let Some(uncle) = uncle.filter(|&uncle| self[uncle].is_red()) {
            /*
             * Uncle is red: color flips.
             *
             *       G            g
             *      / \          / \
             *     p   u  -->   P   U
             *    /            /
             *   n            n
             *
             * The root stays black. Otherwise g may now conflict with its
             * own parent, which the upward walk checks next.
             */
            trace!("recolor at {gparent:?}, uncle {uncle:?} is red");
            self[parent].set_color(Color::Black);
            self[uncle].set_color(Color::Black);
            if self.root != Some(gparent) {
                self[gparent].set_color(Color::Red);
            }
            return;
        }

        let node_side = if self[parent].left == Some(node) {
            Side::Left
        } else {
            Side::Right
        };
        // Uncle is absent or black: rotate the red pair above the
        // grandparent, then make the new top black and both its children
        // red.
        let top = match (parent_side, node_side) {
            (Side::Left, Side::Left) => self.rotate_right(gparent),
            (Side::Right, Side::Right) => self.rotate_left(gparent),
            (Side::Left, Side::Right) => self.rotate_left_right(gparent),
            (Side::Right, Side::Left) => self.rotate_right_left(gparent),
        };
        let Some(top) = top else {
            return;
        };
        trace!("rotated {parent_side:?}/{node_side:?} at {gparent:?}, {top:?} on top");
        self[top].set_color(Color::Black);
        if let Some(left) = self[top].left {
            self[left].set_color(Color::Red);
        }
        if let Some(right) = self[top].right {
            self[right].set_color(Color::Red);
        }
    }
}

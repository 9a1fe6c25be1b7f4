use log::debug;

use crate::{NodeId, StructuralInvariantViolation, Tree};

impl<K, V> Tree<K, V> {
    /// The black-height of the subtree under `node`, counting the empty
    /// positions below the leaves as one black node each. An empty subtree
    /// has height 1. So does a handle this tree never issued, the same way
    /// [`Tree::node`] returns `None` for it.
    ///
    /// Fails on the first node whose left and right subtrees disagree.
    /// This walks the whole subtree; nothing calls it on the insert path.
    pub fn black_height(
        &self,
        node: Option<NodeId>,
    ) -> Result<usize, StructuralInvariantViolation> {
        let Some((id, node)) = node.and_then(|id| Some((id, self.root.get(id)?))) else {
            return Ok(1);
        };
        let left = self.black_height(node.left)?;
        let right = self.black_height(node.right)?;
        if left != right {
            debug!("black-height mismatch under {id:?}: {left} != {right}");
            return Err(StructuralInvariantViolation {
                node: id,
                left,
                right,
            });
        }
        Ok(right + usize::from(node.color))
    }

    /// [`Tree::black_height`] of the whole tree.
    pub fn validate(&self) -> Result<usize, StructuralInvariantViolation> {
        self.black_height(self.root.root())
    }
}

#[cfg(test)]
impl<K: Ord, V> Tree<K, V> {
    /// Asserts every red-black property plus the link bookkeeping.
    pub(crate) fn assert_red_black(&self) {
        let Some(root) = self.root.root() else {
            assert_eq!(0, self.len);
            return;
        };
        assert!(self.root[root].is_black(), "red root");
        assert_eq!(None, self.root[root].parent);

        let mut reachable = 0;
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            reachable += 1;
            let node = &self.root[id];
            for child in [node.left, node.right].into_iter().flatten() {
                assert_eq!(Some(id), self.root[child].parent, "stale parent link");
                assert!(
                    !(node.is_red() && self.root[child].is_red()),
                    "red {child:?} under red {id:?}"
                );
                stack.push(child);
            }
            if let Some(left) = node.left {
                assert!(self.is_left_child(left));
            }
            if let Some(right) = node.right {
                assert!(!self.is_left_child(right));
            }
        }
        assert_eq!(self.len, reachable);

        let keys: Vec<&K> = self.keys().collect();
        assert!(keys.windows(2).all(|w| w[0] <= w[1]), "out of order");
        assert!(self.validate().is_ok());
    }
}

#[cfg(test)]
mod test {
    use crate::{Color, NodeId, StructuralInvariantViolation, Tree};
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_subtree_has_height_one() {
        let tree = Tree::<u8, ()>::new();
        assert_eq!(Ok(1), tree.black_height(None));
        assert_eq!(Ok(1), tree.validate());
    }

    #[test]
    fn subtree_heights() {
        let mut tree = Tree::new();
        for k in [20, 10, 30, 5] {
            tree.insert(k, ());
        }
        // 20B / (10B, 30B) / 5R
        let root = tree.root().unwrap();
        let ten = tree.node(root).unwrap().left();
        assert_eq!(Ok(2), tree.black_height(ten));
        assert_eq!(Ok(3), tree.black_height(Some(root)));
    }

    #[test]
    fn detects_mismatch() {
        let mut tree = Tree::new();
        let ten = tree.insert(10, ());
        let twenty = tree.insert(20, ());
        assert_eq!(Ok(2), tree.validate());

        // A black right child with no sibling breaks the black-height.
        tree.root[twenty].set_color(Color::Black);
        assert_eq!(
            Err(StructuralInvariantViolation {
                node: ten,
                left: 1,
                right: 2,
            }),
            tree.validate()
        );
    }

    #[test]
    fn mismatch_deep_in_the_tree_propagates() {
        let mut tree = Tree::new();
        let ids: Vec<NodeId> = (0..32).map(|k| tree.insert(k, ())).collect();
        assert!(tree.validate().is_ok());

        let leaf = ids
            .iter()
            .copied()
            .find(|&id| {
                let node = tree.node(id).unwrap();
                node.left().is_none() && node.right().is_none() && node.is_red()
            })
            .unwrap();
        tree.root[leaf].set_color(Color::Black);
        let err = tree.validate().unwrap_err();
        assert_eq!(tree.node(leaf).unwrap().parent(), Some(err.node));
    }
}

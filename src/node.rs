use std::fmt::Debug;

use super::{Color, Node, NodeId};

// Public API.
impl<K, V> Node<K, V> {
    /// A detached red node.
    pub(crate) fn new(key: K, value: V) -> Self {
        Node {
            parent: None,
            left: None,
            right: None,
            color: Color::Red,
            key,
            value,
        }
    }

    #[inline(always)]
    pub fn key(&self) -> &K {
        &self.key
    }

    #[inline(always)]
    pub fn value(&self) -> &V {
        &self.value
    }

    #[inline(always)]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline(always)]
    pub fn is_black(&self) -> bool {
        self.color == Color::Black
    }

    #[inline(always)]
    pub fn is_red(&self) -> bool {
        self.color == Color::Red
    }

    /// The structural parent; `None` for the root.
    #[inline(always)]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    #[inline(always)]
    pub fn left(&self) -> Option<NodeId> {
        self.left
    }

    #[inline(always)]
    pub fn right(&self) -> Option<NodeId> {
        self.right
    }

    #[inline(always)]
    pub(crate) fn set_color(&mut self, color: Color) {
        self.color = color;
    }
}

impl<K, V> Debug for Node<K, V>
where
    K: Debug,
    V: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "{:?}::({:?},{:?})",
            self.color, self.key, self.value
        ))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn new_node_is_red_and_detached() {
        let node = Node::new(42, "forty two");
        assert_eq!(Color::Red, node.color());
        assert!(node.is_red());
        assert!(!node.is_black());
        assert_eq!((None, None), (node.left(), node.right()));
        assert_eq!(None, node.parent());
        assert_eq!(&42, node.key());
        assert_eq!(&"forty two", node.value());
    }

    #[test]
    fn debug_shows_color_key_and_value() {
        let mut node = Node::new(7, "seven");
        node.set_color(Color::Black);
        assert_eq!("Black::(7,\"seven\")", format!("{node:?}"));
    }
}

use std::iter::FusedIterator;

use crate::{IntoKeys, Keys, Set, Tree};

impl<T> Set<T> {
    /// Gets an iterator over the values of the set, in sorted order.
    pub fn iter(&self) -> SetIter<'_, T> {
        SetIter {
            inner: self.tree.keys(),
        }
    }
}

pub struct SetIter<'a, T> {
    inner: Keys<'a, T, ()>,
}

impl<'a, T> Iterator for SetIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, T> DoubleEndedIterator for SetIter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for SetIter<'_, T> {}
impl<T> FusedIterator for SetIter<'_, T> {}

impl<'a, T> IntoIterator for &'a Set<T> {
    type Item = &'a T;
    type IntoIter = SetIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for Set<T> {
    type Item = T;
    type IntoIter = IntoKeys<T, ()>;

    fn into_iter(self) -> Self::IntoIter {
        self.tree.into_keys()
    }
}

impl<T: Ord> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Set<T> {
        let mut tree = Tree::new();
        tree.extend(iter.into_iter().map(|k| (k, ())));
        Self { tree }
    }
}

impl<T: Ord> Extend<T> for Set<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.tree.extend(iter.into_iter().map(|k| (k, ())));
    }
}

#[cfg(test)]
mod test {
    use crate::Set;
    use pretty_assertions::assert_eq;

    #[test]
    fn from_iter_sorts() {
        let set: Set<i32> = vec![5, 3, 9, 3, 1].into_iter().collect();
        assert_eq!(vec![1, 3, 3, 5, 9], set.iter().copied().collect::<Vec<_>>());
        assert_eq!(vec![9, 5, 3, 3, 1], set.iter().rev().copied().collect::<Vec<_>>());
    }

    #[test]
    fn extend_and_consume() {
        let mut set = Set::new();
        set.extend(["b", "a"]);
        set.extend(["c"]);
        let mut seen = Vec::new();
        for v in &set {
            seen.push(*v);
        }
        assert_eq!(vec!["a", "b", "c"], seen);
        assert_eq!(vec!["a", "b", "c"], set.into_iter().collect::<Vec<_>>());
    }
}

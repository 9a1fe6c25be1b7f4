use crate::{Set, StructuralInvariantViolation, Tree};

impl<T> Default for Set<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Set<T> {
    pub fn new() -> Self {
        Self { tree: Tree::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            tree: Tree::with_capacity(capacity),
        }
    }

    /// Adds `value`. Equal values are all kept, the newest first.
    pub fn insert(&mut self, value: T)
    where
        T: Ord,
    {
        self.tree.insert(value, ());
    }

    pub fn validate(&self) -> Result<usize, StructuralInvariantViolation> {
        self.tree.validate()
    }

    pub const fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    pub const fn len(&self) -> usize {
        self.tree.len()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Set<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

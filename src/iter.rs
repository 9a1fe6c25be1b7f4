pub(crate) mod set;
pub(crate) mod tree;

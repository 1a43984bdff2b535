use indexmap::IndexSet;
use std::cmp::Ordering;

use super::Comparable;

/// Opaque identity of a component within one document.
///
/// Compared by its string form. The empty string means "unassigned".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BomRef(String);

impl BomRef {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    /// True if no value was assigned
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for BomRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for BomRef {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl Comparable for BomRef {
    fn compare(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

/// Dependency edges of a component: set semantics, insertion ordered
pub type BomRefRepository = IndexSet<BomRef>;

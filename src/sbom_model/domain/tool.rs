use std::cmp::Ordering;

use super::repository::compare_optional;
use super::{Comparable, ExternalReference, HashRepository};

/// Tool that produced the BOM
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tool {
    pub vendor: Option<String>,
    pub name: Option<String>,
    pub version: Option<String>,
    pub hashes: HashRepository,
    pub external_references: Vec<ExternalReference>,
}

impl Tool {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            version: Some(version.into()),
            ..Self::default()
        }
    }
}

impl Comparable for Tool {
    fn compare(&self, other: &Self) -> Ordering {
        compare_optional(self.vendor.as_deref(), other.vendor.as_deref())
            .then_with(|| compare_optional(self.name.as_deref(), other.name.as_deref()))
            .then_with(|| compare_optional(self.version.as_deref(), other.version.as_deref()))
    }
}

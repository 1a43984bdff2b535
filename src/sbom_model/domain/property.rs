use std::cmp::Ordering;

use super::Comparable;

/// Free-form name/value pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub name: String,
    pub value: String,
}

impl Property {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl Comparable for Property {
    fn compare(&self, other: &Self) -> Ordering {
        self.name
            .cmp(&other.name)
            .then_with(|| self.value.cmp(&other.value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_compare() {
        let a = Property::new("a", "2");
        let b = Property::new("a", "10");
        assert_eq!(a.compare(&b), Ordering::Greater);
        assert_eq!(a.compare(&Property::new("b", "0")), Ordering::Less);
    }
}

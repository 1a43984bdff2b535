use std::cmp::Ordering;

use super::repository::compare_optional;
use super::Comparable;

/// Person or role reachable on behalf of an organization
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrganizationalContact {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl Comparable for OrganizationalContact {
    fn compare(&self, other: &Self) -> Ordering {
        compare_optional(self.name.as_deref(), other.name.as_deref())
            .then_with(|| compare_optional(self.email.as_deref(), other.email.as_deref()))
            .then_with(|| compare_optional(self.phone.as_deref(), other.phone.as_deref()))
    }
}

/// Organization such as a supplier or manufacturer
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrganizationalEntity {
    pub name: Option<String>,
    pub url: Vec<String>,
    pub contact: Vec<OrganizationalContact>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(name: Option<&str>, email: Option<&str>) -> OrganizationalContact {
        OrganizationalContact {
            name: name.map(str::to_string),
            email: email.map(str::to_string),
            phone: None,
        }
    }

    #[test]
    fn test_contact_compare_by_name_first() {
        let alice = contact(Some("Alice"), Some("z@example.com"));
        let bob = contact(Some("Bob"), Some("a@example.com"));
        assert_eq!(alice.compare(&bob), Ordering::Less);
    }

    #[test]
    fn test_contact_compare_falls_back_to_email() {
        let a = contact(None, Some("a@example.com"));
        let b = contact(None, Some("b@example.com"));
        assert_eq!(b.compare(&a), Ordering::Greater);
    }
}

use std::cmp::Ordering;

use super::{Attachment, Comparable};

/// License identified by free-text name
#[derive(Debug, Clone, PartialEq)]
pub struct NamedLicense {
    pub name: String,
    pub text: Option<Attachment>,
    pub url: Option<String>,
}

/// License identified by an SPDX license id
#[derive(Debug, Clone, PartialEq)]
pub struct SpdxLicense {
    pub id: String,
    pub text: Option<Attachment>,
    pub url: Option<String>,
}

/// SPDX license expression, e.g. `MIT OR Apache-2.0`
#[derive(Debug, Clone, PartialEq)]
pub struct LicenseExpression {
    pub expression: String,
}

/// A license choice. The variant set is closed.
#[derive(Debug, Clone, PartialEq)]
pub enum License {
    Named(NamedLicense),
    Spdx(SpdxLicense),
    Expression(LicenseExpression),
}

impl License {
    pub fn named(name: impl Into<String>) -> Self {
        License::Named(NamedLicense {
            name: name.into(),
            text: None,
            url: None,
        })
    }

    pub fn spdx(id: impl Into<String>) -> Self {
        License::Spdx(SpdxLicense {
            id: id.into(),
            text: None,
            url: None,
        })
    }

    pub fn expression(expression: impl Into<String>) -> Self {
        License::Expression(LicenseExpression {
            expression: expression.into(),
        })
    }

    fn rank(&self) -> u8 {
        match self {
            License::Named(_) => 0,
            License::Spdx(_) => 1,
            License::Expression(_) => 2,
        }
    }

    fn key(&self) -> &str {
        match self {
            License::Named(license) => &license.name,
            License::Spdx(license) => &license.id,
            License::Expression(license) => &license.expression,
        }
    }
}

impl Comparable for License {
    fn compare(&self, other: &Self) -> Ordering {
        self.rank()
            .cmp(&other.rank())
            .then_with(|| self.key().cmp(other.key()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_groups_variants() {
        let named = License::named("Zeta License");
        let spdx = License::spdx("Apache-2.0");
        let expression = License::expression("AAA OR BBB");

        assert_eq!(named.compare(&spdx), Ordering::Less);
        assert_eq!(spdx.compare(&expression), Ordering::Less);
    }

    #[test]
    fn test_compare_within_variant() {
        assert_eq!(
            License::spdx("MIT").compare(&License::spdx("Apache-2.0")),
            Ordering::Greater
        );
        assert_eq!(
            License::expression("MIT").compare(&License::expression("MIT")),
            Ordering::Equal
        );
    }
}

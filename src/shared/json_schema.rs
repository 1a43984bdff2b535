//! String format checks for values the CycloneDX JSON schemas constrain
//! with `format` keywords. Values failing a check are omitted from output.

use regex::Regex;
use std::sync::LazyLock;

static IDN_EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+$").expect("static regex"));

static IRI_REFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^[^\s<>"{}|\\^`\x00-\x1f\x7f]*$"#).expect("static regex"));

/// True if `value` looks like an internationalized email address
pub fn is_idn_email(value: &str) -> bool {
    IDN_EMAIL.is_match(value)
}

/// True if `value` is a non-empty IRI reference (absolute or relative)
pub fn is_iri_reference(value: &str) -> bool {
    !value.is_empty() && IRI_REFERENCE.is_match(value)
}

/// Options shared by every normalizer of one normalization pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizerOptions {
    /// Sort lists and the dependency graph deterministically.
    /// When unset, the iteration order of the source collections is kept.
    pub sort_lists: bool,
}

impl NormalizerOptions {
    pub fn new(sort_lists: bool) -> Self {
        Self { sort_lists }
    }

    pub fn sorted() -> Self {
        Self::new(true)
    }
}

/// Options for turning a normalized BOM into text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SerializerOptions {
    /// Spaces per indentation level; `None` or `Some(0)` writes compact output
    pub indent: Option<usize>,
}

impl SerializerOptions {
    pub fn new(indent: Option<usize>) -> Self {
        Self { indent }
    }

    pub fn pretty() -> Self {
        Self::new(Some(2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalizer_options_default_keeps_order() {
        assert!(!NormalizerOptions::default().sort_lists);
        assert!(NormalizerOptions::sorted().sort_lists);
    }

    #[test]
    fn test_serializer_options_default_is_compact() {
        assert_eq!(SerializerOptions::default().indent, None);
        assert_eq!(SerializerOptions::pretty().indent, Some(2));
    }
}

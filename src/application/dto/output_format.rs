/// Output format enumeration for serialized BOM documents
///
/// Which formats a target version supports is answered by its
/// capabilities; this enum only names them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    /// CycloneDX JSON format (default)
    Json,
    /// CycloneDX XML format
    Xml,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Xml => write!(f, "XML"),
        }
    }
}

use crate::application::dto::{OutputFormat, SpecVersion};
use crate::sbom_model::domain::Bom;
use crate::shared::Result;

/// Response from BOM serialization
///
/// This contains the document text together with what it was written as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerializedBom {
    /// The serialized document
    pub content: String,
    /// The spec version the document conforms to
    pub spec_version: SpecVersion,
    /// The format of `content`
    pub format: OutputFormat,
}

impl SerializedBom {
    pub fn new(content: String, spec_version: SpecVersion, format: OutputFormat) -> Self {
        Self {
            content,
            spec_version,
            format,
        }
    }
}

/// BomSerializationPort - Inbound port for the configured serialization use case
///
/// This port defines the interface callers use to turn a BOM into a
/// document according to a loaded configuration.
pub trait BomSerializationPort {
    /// Serializes the BOM
    ///
    /// # Errors
    /// Returns an error if:
    /// - The configured spec version does not support the output format
    /// - The text backend fails
    fn serialize_bom(&self, bom: &Bom) -> Result<SerializedBom>;
}

use crate::application::dto::{NormalizerOptions, SerializerOptions};
use crate::sbom_model::domain::Bom;
use crate::shared::Result;

/// BomSerializer port for turning a BOM into document text
///
/// Implementations normalize the BOM for their bound spec version and
/// hand the normalized value to a text backend.
pub trait BomSerializer {
    /// Serializes a BOM
    ///
    /// # Arguments
    /// * `bom` - The BOM to serialize
    /// * `normalizer_options` - Options for the normalization pass
    /// * `serializer_options` - Options for the text backend
    ///
    /// # Returns
    /// The serialized document
    ///
    /// # Errors
    /// Returns an error if the text backend fails
    fn serialize(
        &self,
        bom: &Bom,
        normalizer_options: &NormalizerOptions,
        serializer_options: &SerializerOptions,
    ) -> Result<String>;
}

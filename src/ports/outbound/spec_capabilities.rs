use crate::application::dto::{OutputFormat, SpecVersion};
use crate::sbom_model::domain::{Component, ComponentType, ExternalReferenceType, HashAlgorithm};

/// SpecCapabilities port answering what one CycloneDX version allows
///
/// Every method is a pure predicate. Normalizers consult it to decide
/// whether a field, value or structure is emitted for the bound version.
pub trait SpecCapabilities {
    /// The version these answers belong to
    fn version(&self) -> SpecVersion;

    /// Whether documents of this version can be written in `format`
    fn supports_format(&self, format: OutputFormat) -> bool;

    fn supports_component_type(&self, component_type: ComponentType) -> bool;

    fn supports_hash_algorithm(&self, algorithm: HashAlgorithm) -> bool;

    /// Whether `content` is an acceptable hash value
    fn supports_hash_value(&self, content: &str) -> bool;

    fn supports_external_reference_type(&self, reference_type: ExternalReferenceType) -> bool;

    /// Whether properties may be attached to `owner`
    fn supports_properties(&self, owner: &Component) -> bool;

    /// Whether tools may carry external references
    fn supports_tool_references(&self) -> bool;

    /// Whether a component's version must be written even when empty
    fn requires_component_version(&self) -> bool;

    /// Whether the document-level dependency graph exists in this version
    fn supports_dependency_graph(&self) -> bool;
}

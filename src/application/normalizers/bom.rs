use super::non_empty;
use crate::application::dto::{NormalizerOptions, SpecVersion};
use crate::application::factories::NormalizerFactory;
use crate::application::normalized::NormalizedBom;
use crate::sbom_model::domain::Bom;

const BOM_FORMAT: &str = "CycloneDX";

/// JSON schema URL published for a spec version
///
/// Version 1.1 predates the JSON format and has none.
pub fn schema_url(version: SpecVersion) -> Option<&'static str> {
    match version {
        SpecVersion::V1_1 => None,
        SpecVersion::V1_2 => Some("http://cyclonedx.org/schema/bom-1.2b.schema.json"),
        SpecVersion::V1_3 => Some("http://cyclonedx.org/schema/bom-1.3a.schema.json"),
        SpecVersion::V1_4 => Some("http://cyclonedx.org/schema/bom-1.4.schema.json"),
        SpecVersion::V1_5 => Some("http://cyclonedx.org/schema/bom-1.5.schema.json"),
    }
}

pub struct BomNormalizer<'s> {
    factory: NormalizerFactory<'s>,
}

impl<'s> BomNormalizer<'s> {
    pub fn new(factory: NormalizerFactory<'s>) -> Self {
        Self { factory }
    }

    /// Normalizes the whole document
    ///
    /// Metadata and components are normalized top-down. The dependency graph
    /// is collected by a separate walk over the same BOM.
    pub fn normalize(&self, data: &Bom, options: &NormalizerOptions) -> NormalizedBom {
        let version = self.factory.spec().version();
        tracing::debug!(
            spec_version = %version,
            components = data.components.len(),
            sort_lists = options.sort_lists,
            "Normalizing BOM"
        );

        NormalizedBom {
            schema: schema_url(version).map(str::to_string),
            bom_format: BOM_FORMAT.to_string(),
            spec_version: version.as_str().to_string(),
            version: data.version,
            serial_number: non_empty(data.serial_number.as_deref()),
            metadata: data
                .metadata
                .as_ref()
                .map(|m| self.factory.make_for_metadata().normalize(m, options)),
            components: self
                .factory
                .make_for_component()
                .normalize_repository(&data.components, options),
            dependencies: self
                .factory
                .make_for_dependency_graph()
                .normalize(data, options),
        }
    }
}

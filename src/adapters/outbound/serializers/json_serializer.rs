use crate::application::dto::{NormalizerOptions, OutputFormat, SerializerOptions};
use crate::application::factories::NormalizerFactory;
use crate::application::normalized::NormalizedBom;
use crate::ports::outbound::BomSerializer;
use crate::sbom_model::domain::Bom;
use crate::shared::error::SbomError;
use crate::shared::Result;
use serde::Serialize;

/// JsonSerializer adapter for writing CycloneDX JSON documents
///
/// This adapter implements the BomSerializer port. It can only be built
/// for spec versions that define a JSON format.
pub struct JsonSerializer<'s> {
    factory: NormalizerFactory<'s>,
}

impl<'s> JsonSerializer<'s> {
    pub fn new(factory: NormalizerFactory<'s>) -> Result<Self> {
        let spec = factory.spec();
        if !spec.supports_format(OutputFormat::Json) {
            return Err(SbomError::UnsupportedFormat {
                version: spec.version(),
                format: OutputFormat::Json,
            }
            .into());
        }
        Ok(Self { factory })
    }

    /// Normalizes the BOM without rendering it
    pub fn normalize(&self, bom: &Bom, options: &NormalizerOptions) -> NormalizedBom {
        self.factory.make_for_bom().normalize(bom, options)
    }

    fn render(normalized: &NormalizedBom, indent: Option<usize>) -> Result<String> {
        let result = match indent {
            None | Some(0) => serde_json::to_string(normalized),
            Some(width) => {
                let indent = " ".repeat(width);
                let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
                let mut buffer = Vec::new();
                let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
                normalized
                    .serialize(&mut serializer)
                    .map(|_| String::from_utf8_lossy(&buffer).into_owned())
            }
        };

        result.map_err(|e| {
            SbomError::Serialization {
                format: OutputFormat::Json,
                details: e.to_string(),
            }
            .into()
        })
    }
}

impl BomSerializer for JsonSerializer<'_> {
    fn serialize(
        &self,
        bom: &Bom,
        normalizer_options: &NormalizerOptions,
        serializer_options: &SerializerOptions,
    ) -> Result<String> {
        let normalized = self.normalize(bom, normalizer_options);
        Self::render(&normalized, serializer_options.indent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::spec::{SPEC_1_1, SPEC_1_5};
    use crate::sbom_model::domain::{Component, ComponentType};

    fn sample_bom() -> Bom {
        Bom::new().with_component(
            Component::new(ComponentType::Library, "requests")
                .with_bom_ref("pkg:pypi/requests@2.31.0")
                .with_version("2.31.0"),
        )
    }

    #[test]
    fn test_new_rejects_spec_without_json() {
        let result = JsonSerializer::new(NormalizerFactory::new(&SPEC_1_1));

        assert!(result.is_err());
        let err = result.err().unwrap();
        assert!(err.to_string().contains("does not support JSON"));
    }

    #[test]
    fn test_serialize_compact() {
        let serializer = JsonSerializer::new(NormalizerFactory::new(&SPEC_1_5)).unwrap();
        let json = serializer
            .serialize(
                &sample_bom(),
                &NormalizerOptions::default(),
                &SerializerOptions::default(),
            )
            .unwrap();

        assert!(!json.contains('\n'));
        assert!(json.contains("\"bomFormat\":\"CycloneDX\""));
        assert!(json.contains("\"specVersion\":\"1.5\""));
        assert!(json.contains("\"bom-ref\":\"pkg:pypi/requests@2.31.0\""));
    }

    #[test]
    fn test_serialize_zero_indent_is_compact() {
        let serializer = JsonSerializer::new(NormalizerFactory::new(&SPEC_1_5)).unwrap();
        let json = serializer
            .serialize(
                &sample_bom(),
                &NormalizerOptions::default(),
                &SerializerOptions::new(Some(0)),
            )
            .unwrap();
        assert!(!json.contains('\n'));
    }

    #[test]
    fn test_serialize_pretty_indent() {
        let serializer = JsonSerializer::new(NormalizerFactory::new(&SPEC_1_5)).unwrap();
        let json = serializer
            .serialize(
                &sample_bom(),
                &NormalizerOptions::default(),
                &SerializerOptions::new(Some(4)),
            )
            .unwrap();

        assert!(json.starts_with("{\n    \"$schema\""));
        assert!(json.contains("\n    \"bomFormat\": \"CycloneDX\""));
    }

    #[test]
    fn test_serialized_document_parses() {
        let serializer = JsonSerializer::new(NormalizerFactory::new(&SPEC_1_5)).unwrap();
        let json = serializer
            .serialize(
                &sample_bom(),
                &NormalizerOptions::sorted(),
                &SerializerOptions::pretty(),
            )
            .unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["components"][0]["name"], "requests");
        assert_eq!(value["dependencies"][0]["ref"], "pkg:pypi/requests@2.31.0");
        assert!(value["dependencies"][0].get("dependsOn").is_none());
    }
}

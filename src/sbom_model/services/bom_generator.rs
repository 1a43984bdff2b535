use crate::sbom_model::domain::{Metadata, Tool};
use chrono::Utc;
use uuid::Uuid;

/// BomGenerator service for stamping fresh BOM identity and metadata
///
/// Produces a random serial number and a metadata block carrying the
/// current time and the tool that wrote the document.
pub struct BomGenerator;

impl BomGenerator {
    /// Generates a serial number in the `urn:uuid:` form CycloneDX expects
    pub fn generate_serial_number() -> String {
        format!("urn:uuid:{}", Uuid::new_v4())
    }

    /// Generates metadata with the current timestamp and one tool entry
    ///
    /// # Arguments
    /// * `tool_name` - Name of the tool writing the BOM
    /// * `tool_version` - Version of the tool
    pub fn generate_metadata(tool_name: &str, tool_version: &str) -> Metadata {
        Metadata {
            timestamp: Some(Utc::now()),
            tools: vec![Tool::new(tool_name, tool_version)],
            ..Metadata::default()
        }
    }

    /// Generates metadata naming this library as the tool
    ///
    /// This uses the compile-time version from Cargo.toml
    pub fn generate_default_metadata() -> Metadata {
        Self::generate_metadata(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_metadata() {
        let metadata = BomGenerator::generate_metadata("test-tool", "1.0.0");

        assert!(metadata.timestamp.is_some());
        assert_eq!(metadata.tools.len(), 1);
        assert_eq!(metadata.tools[0].name.as_deref(), Some("test-tool"));
        assert_eq!(metadata.tools[0].version.as_deref(), Some("1.0.0"));
        assert!(metadata.component.is_none());
    }

    #[test]
    fn test_generate_default_metadata() {
        let metadata = BomGenerator::generate_default_metadata();

        assert_eq!(metadata.tools[0].name.as_deref(), Some("cdx-normalize"));
        assert_eq!(
            metadata.tools[0].version.as_deref(),
            Some(env!("CARGO_PKG_VERSION"))
        );
    }

    #[test]
    fn test_generate_serial_number_unique() {
        let serial1 = BomGenerator::generate_serial_number();
        let serial2 = BomGenerator::generate_serial_number();

        // Each generation should create a unique UUID
        assert_ne!(serial1, serial2);
    }

    #[test]
    fn test_generate_serial_number_uuid_format() {
        let serial = BomGenerator::generate_serial_number();

        // Verify UUID format: urn:uuid:xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx
        assert!(serial.starts_with("urn:uuid:"));
        let uuid_part = serial.strip_prefix("urn:uuid:").unwrap();
        assert_eq!(uuid_part.len(), 36);
        assert_eq!(uuid_part.matches('-').count(), 4);
    }
}

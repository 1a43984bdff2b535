use crate::adapters::outbound::serializers::JsonSerializer;
use crate::adapters::outbound::spec::Spec;
use crate::application::dto::{NormalizerOptions, OutputFormat, SerializerOptions, SpecVersion};
use crate::application::factories::NormalizerFactory;
use crate::config::NormalizeConfig;
use crate::ports::inbound::{BomSerializationPort, SerializedBom};
use crate::ports::outbound::BomSerializer;
use crate::sbom_model::domain::Bom;
use crate::shared::Result;

/// SerializeBomUseCase - Turns a BOM into a CycloneDX document
///
/// This use case runs one normalization pass through the injected
/// serializer with the options it was configured with.
///
/// # Type Parameters
/// * `S` - BomSerializer implementation
pub struct SerializeBomUseCase<S> {
    serializer: S,
    spec_version: SpecVersion,
    format: OutputFormat,
    normalizer_options: NormalizerOptions,
    serializer_options: SerializerOptions,
}

impl<S: BomSerializer> SerializeBomUseCase<S> {
    /// Creates a new SerializeBomUseCase with an injected serializer
    pub fn new(
        serializer: S,
        spec_version: SpecVersion,
        format: OutputFormat,
        normalizer_options: NormalizerOptions,
        serializer_options: SerializerOptions,
    ) -> Self {
        Self {
            serializer,
            spec_version,
            format,
            normalizer_options,
            serializer_options,
        }
    }

    /// Executes the serialization use case
    pub fn execute(&self, bom: &Bom) -> Result<SerializedBom> {
        tracing::debug!(
            spec_version = %self.spec_version,
            format = %self.format,
            "Serializing BOM"
        );
        let content =
            self.serializer
                .serialize(bom, &self.normalizer_options, &self.serializer_options)?;
        Ok(SerializedBom::new(content, self.spec_version, self.format))
    }
}

impl SerializeBomUseCase<JsonSerializer<'static>> {
    /// Wires the shipped spec table and the JSON serializer from a config
    ///
    /// # Errors
    /// Returns an error if the configured version is unknown or has no JSON format.
    pub fn from_config(config: &NormalizeConfig) -> Result<Self> {
        let spec_version = config.spec_version()?;
        let factory = NormalizerFactory::new(Spec::for_version(spec_version));
        let serializer = JsonSerializer::new(factory)?;

        Ok(Self::new(
            serializer,
            spec_version,
            OutputFormat::Json,
            config.normalizer_options(),
            config.serializer_options(),
        ))
    }
}

impl<S: BomSerializer> BomSerializationPort for SerializeBomUseCase<S> {
    fn serialize_bom(&self, bom: &Bom) -> Result<SerializedBom> {
        self.execute(bom)
    }
}

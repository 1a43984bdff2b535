use crate::application::dto::{OutputFormat, SpecVersion};
use crate::ports::outbound::SpecCapabilities;
use crate::sbom_model::domain::{Component, ComponentType, ExternalReferenceType, HashAlgorithm};
use regex::Regex;
use std::sync::LazyLock;

static HEX_DIGEST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-fA-F0-9]+$").expect("static regex"));

/// Capability table of one CycloneDX version
///
/// This adapter implements the SpecCapabilities port with plain lookups.
/// One immutable instance exists per version; see [`Spec::for_version`].
#[derive(Debug)]
pub struct Spec {
    version: SpecVersion,
    formats: &'static [OutputFormat],
    component_types: &'static [ComponentType],
    hash_algorithms: &'static [HashAlgorithm],
    external_reference_types: &'static [ExternalReferenceType],
    supports_dependency_graph: bool,
    supports_tool_references: bool,
    requires_component_version: bool,
    supports_properties: bool,
}

impl Spec {
    /// The shipped capability table for `version`
    pub fn for_version(version: SpecVersion) -> &'static Spec {
        match version {
            SpecVersion::V1_1 => &SPEC_1_1,
            SpecVersion::V1_2 => &SPEC_1_2,
            SpecVersion::V1_3 => &SPEC_1_3,
            SpecVersion::V1_4 => &SPEC_1_4,
            SpecVersion::V1_5 => &SPEC_1_5,
        }
    }
}

impl SpecCapabilities for Spec {
    fn version(&self) -> SpecVersion {
        self.version
    }

    fn supports_format(&self, format: OutputFormat) -> bool {
        self.formats.contains(&format)
    }

    fn supports_component_type(&self, component_type: ComponentType) -> bool {
        self.component_types.contains(&component_type)
    }

    fn supports_hash_algorithm(&self, algorithm: HashAlgorithm) -> bool {
        self.hash_algorithms.contains(&algorithm)
    }

    /// Hex digests of the lengths produced by the supported algorithms
    fn supports_hash_value(&self, content: &str) -> bool {
        matches!(content.len(), 32 | 40 | 64 | 96 | 128) && HEX_DIGEST.is_match(content)
    }

    fn supports_external_reference_type(&self, reference_type: ExternalReferenceType) -> bool {
        self.external_reference_types.contains(&reference_type)
    }

    fn supports_properties(&self, _owner: &Component) -> bool {
        self.supports_properties
    }

    fn supports_tool_references(&self) -> bool {
        self.supports_tool_references
    }

    fn requires_component_version(&self) -> bool {
        self.requires_component_version
    }

    fn supports_dependency_graph(&self) -> bool {
        self.supports_dependency_graph
    }
}

const XML_ONLY: &[OutputFormat] = &[OutputFormat::Xml];
const XML_AND_JSON: &[OutputFormat] = &[OutputFormat::Xml, OutputFormat::Json];

const COMPONENT_TYPES_1_1: &[ComponentType] = &[
    ComponentType::Application,
    ComponentType::Framework,
    ComponentType::Library,
    ComponentType::OperatingSystem,
    ComponentType::Device,
    ComponentType::File,
];

const COMPONENT_TYPES_1_2: &[ComponentType] = &[
    ComponentType::Application,
    ComponentType::Framework,
    ComponentType::Library,
    ComponentType::Container,
    ComponentType::OperatingSystem,
    ComponentType::Device,
    ComponentType::Firmware,
    ComponentType::File,
];

const COMPONENT_TYPES_1_5: &[ComponentType] = &[
    ComponentType::Application,
    ComponentType::Framework,
    ComponentType::Library,
    ComponentType::Container,
    ComponentType::Platform,
    ComponentType::OperatingSystem,
    ComponentType::Device,
    ComponentType::DeviceDriver,
    ComponentType::Firmware,
    ComponentType::File,
    ComponentType::MachineLearningModel,
    ComponentType::Data,
];

const HASH_ALGORITHMS_1_1: &[HashAlgorithm] = &[
    HashAlgorithm::Md5,
    HashAlgorithm::Sha1,
    HashAlgorithm::Sha256,
    HashAlgorithm::Sha384,
    HashAlgorithm::Sha512,
    HashAlgorithm::Sha3_256,
    HashAlgorithm::Sha3_512,
];

const HASH_ALGORITHMS_1_2: &[HashAlgorithm] = &[
    HashAlgorithm::Md5,
    HashAlgorithm::Sha1,
    HashAlgorithm::Sha256,
    HashAlgorithm::Sha384,
    HashAlgorithm::Sha512,
    HashAlgorithm::Sha3_256,
    HashAlgorithm::Sha3_384,
    HashAlgorithm::Sha3_512,
    HashAlgorithm::Blake2b256,
    HashAlgorithm::Blake2b384,
    HashAlgorithm::Blake2b512,
    HashAlgorithm::Blake3,
];

const EXTERNAL_REFERENCE_TYPES_1_1: &[ExternalReferenceType] = &[
    ExternalReferenceType::Vcs,
    ExternalReferenceType::IssueTracker,
    ExternalReferenceType::Website,
    ExternalReferenceType::Advisories,
    ExternalReferenceType::Bom,
    ExternalReferenceType::MailingList,
    ExternalReferenceType::Social,
    ExternalReferenceType::Chat,
    ExternalReferenceType::Documentation,
    ExternalReferenceType::Support,
    ExternalReferenceType::Distribution,
    ExternalReferenceType::License,
    ExternalReferenceType::BuildMeta,
    ExternalReferenceType::BuildSystem,
    ExternalReferenceType::Other,
];

const EXTERNAL_REFERENCE_TYPES_1_4: &[ExternalReferenceType] = &[
    ExternalReferenceType::Vcs,
    ExternalReferenceType::IssueTracker,
    ExternalReferenceType::Website,
    ExternalReferenceType::Advisories,
    ExternalReferenceType::Bom,
    ExternalReferenceType::MailingList,
    ExternalReferenceType::Social,
    ExternalReferenceType::Chat,
    ExternalReferenceType::Documentation,
    ExternalReferenceType::Support,
    ExternalReferenceType::Distribution,
    ExternalReferenceType::License,
    ExternalReferenceType::BuildMeta,
    ExternalReferenceType::BuildSystem,
    ExternalReferenceType::ReleaseNotes,
    ExternalReferenceType::Other,
];

const EXTERNAL_REFERENCE_TYPES_1_5: &[ExternalReferenceType] = &[
    ExternalReferenceType::Vcs,
    ExternalReferenceType::IssueTracker,
    ExternalReferenceType::Website,
    ExternalReferenceType::Advisories,
    ExternalReferenceType::Bom,
    ExternalReferenceType::MailingList,
    ExternalReferenceType::Social,
    ExternalReferenceType::Chat,
    ExternalReferenceType::Documentation,
    ExternalReferenceType::Support,
    ExternalReferenceType::Distribution,
    ExternalReferenceType::DistributionIntake,
    ExternalReferenceType::License,
    ExternalReferenceType::BuildMeta,
    ExternalReferenceType::BuildSystem,
    ExternalReferenceType::ReleaseNotes,
    ExternalReferenceType::SecurityContact,
    ExternalReferenceType::ModelCard,
    ExternalReferenceType::Log,
    ExternalReferenceType::Configuration,
    ExternalReferenceType::Evidence,
    ExternalReferenceType::Formulation,
    ExternalReferenceType::Attestation,
    ExternalReferenceType::ThreatModel,
    ExternalReferenceType::AdversaryModel,
    ExternalReferenceType::RiskAssessment,
    ExternalReferenceType::VulnerabilityAssertion,
    ExternalReferenceType::ExploitabilityStatement,
    ExternalReferenceType::PentestReport,
    ExternalReferenceType::StaticAnalysisReport,
    ExternalReferenceType::DynamicAnalysisReport,
    ExternalReferenceType::RuntimeAnalysisReport,
    ExternalReferenceType::ComponentAnalysisReport,
    ExternalReferenceType::MaturityReport,
    ExternalReferenceType::CertificationReport,
    ExternalReferenceType::CodifiedInfrastructure,
    ExternalReferenceType::QualityMetrics,
    ExternalReferenceType::Poam,
    ExternalReferenceType::Other,
];

pub static SPEC_1_1: Spec = Spec {
    version: SpecVersion::V1_1,
    formats: XML_ONLY,
    component_types: COMPONENT_TYPES_1_1,
    hash_algorithms: HASH_ALGORITHMS_1_1,
    external_reference_types: EXTERNAL_REFERENCE_TYPES_1_1,
    supports_dependency_graph: false,
    supports_tool_references: false,
    requires_component_version: true,
    supports_properties: false,
};

pub static SPEC_1_2: Spec = Spec {
    version: SpecVersion::V1_2,
    formats: XML_AND_JSON,
    component_types: COMPONENT_TYPES_1_2,
    hash_algorithms: HASH_ALGORITHMS_1_2,
    external_reference_types: EXTERNAL_REFERENCE_TYPES_1_1,
    supports_dependency_graph: true,
    supports_tool_references: false,
    requires_component_version: true,
    supports_properties: false,
};

pub static SPEC_1_3: Spec = Spec {
    version: SpecVersion::V1_3,
    formats: XML_AND_JSON,
    component_types: COMPONENT_TYPES_1_2,
    hash_algorithms: HASH_ALGORITHMS_1_2,
    external_reference_types: EXTERNAL_REFERENCE_TYPES_1_1,
    supports_dependency_graph: true,
    supports_tool_references: false,
    requires_component_version: true,
    supports_properties: true,
};

pub static SPEC_1_4: Spec = Spec {
    version: SpecVersion::V1_4,
    formats: XML_AND_JSON,
    component_types: COMPONENT_TYPES_1_2,
    hash_algorithms: HASH_ALGORITHMS_1_2,
    external_reference_types: EXTERNAL_REFERENCE_TYPES_1_4,
    supports_dependency_graph: true,
    supports_tool_references: true,
    requires_component_version: false,
    supports_properties: true,
};

pub static SPEC_1_5: Spec = Spec {
    version: SpecVersion::V1_5,
    formats: XML_AND_JSON,
    component_types: COMPONENT_TYPES_1_5,
    hash_algorithms: HASH_ALGORITHMS_1_2,
    external_reference_types: EXTERNAL_REFERENCE_TYPES_1_5,
    supports_dependency_graph: true,
    supports_tool_references: true,
    requires_component_version: false,
    supports_properties: true,
};

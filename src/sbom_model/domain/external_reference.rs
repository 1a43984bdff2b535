use std::cmp::Ordering;

use super::repository::compare_optional;
use super::Comparable;

/// Kind of an external reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExternalReferenceType {
    Vcs,
    IssueTracker,
    Website,
    Advisories,
    Bom,
    MailingList,
    Social,
    Chat,
    Documentation,
    Support,
    Distribution,
    DistributionIntake,
    License,
    BuildMeta,
    BuildSystem,
    ReleaseNotes,
    SecurityContact,
    ModelCard,
    Log,
    Configuration,
    Evidence,
    Formulation,
    Attestation,
    ThreatModel,
    AdversaryModel,
    RiskAssessment,
    VulnerabilityAssertion,
    ExploitabilityStatement,
    PentestReport,
    StaticAnalysisReport,
    DynamicAnalysisReport,
    RuntimeAnalysisReport,
    ComponentAnalysisReport,
    MaturityReport,
    CertificationReport,
    CodifiedInfrastructure,
    QualityMetrics,
    Poam,
    Other,
}

impl ExternalReferenceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Vcs => "vcs",
            Self::IssueTracker => "issue-tracker",
            Self::Website => "website",
            Self::Advisories => "advisories",
            Self::Bom => "bom",
            Self::MailingList => "mailing-list",
            Self::Social => "social",
            Self::Chat => "chat",
            Self::Documentation => "documentation",
            Self::Support => "support",
            Self::Distribution => "distribution",
            Self::DistributionIntake => "distribution-intake",
            Self::License => "license",
            Self::BuildMeta => "build-meta",
            Self::BuildSystem => "build-system",
            Self::ReleaseNotes => "release-notes",
            Self::SecurityContact => "security-contact",
            Self::ModelCard => "model-card",
            Self::Log => "log",
            Self::Configuration => "configuration",
            Self::Evidence => "evidence",
            Self::Formulation => "formulation",
            Self::Attestation => "attestation",
            Self::ThreatModel => "threat-model",
            Self::AdversaryModel => "adversary-model",
            Self::RiskAssessment => "risk-assessment",
            Self::VulnerabilityAssertion => "vulnerability-assertion",
            Self::ExploitabilityStatement => "exploitability-statement",
            Self::PentestReport => "pentest-report",
            Self::StaticAnalysisReport => "static-analysis-report",
            Self::DynamicAnalysisReport => "dynamic-analysis-report",
            Self::RuntimeAnalysisReport => "runtime-analysis-report",
            Self::ComponentAnalysisReport => "component-analysis-report",
            Self::MaturityReport => "maturity-report",
            Self::CertificationReport => "certification-report",
            Self::CodifiedInfrastructure => "codified-infrastructure",
            Self::QualityMetrics => "quality-metrics",
            Self::Poam => "poam",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for ExternalReferenceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Pointer to a resource outside the BOM
#[derive(Debug, Clone, PartialEq)]
pub struct ExternalReference {
    pub url: String,
    pub reference_type: ExternalReferenceType,
    pub comment: Option<String>,
}

impl ExternalReference {
    pub fn new(url: impl Into<String>, reference_type: ExternalReferenceType) -> Self {
        Self {
            url: url.into(),
            reference_type,
            comment: None,
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

impl Comparable for ExternalReference {
    fn compare(&self, other: &Self) -> Ordering {
        self.reference_type
            .as_str()
            .cmp(other.reference_type.as_str())
            .then_with(|| self.url.cmp(&other.url))
            .then_with(|| compare_optional(self.comment.as_deref(), other.comment.as_deref()))
    }
}

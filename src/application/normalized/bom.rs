use super::{
    NormalizedComponent, NormalizedExternalReference, NormalizedHash,
    NormalizedOrganizationalContact, NormalizedOrganizationalEntity,
};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedBom {
    #[serde(rename = "$schema", skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    #[serde(rename = "bomFormat")]
    pub bom_format: String,
    #[serde(rename = "specVersion")]
    pub spec_version: String,
    pub version: u32,
    #[serde(rename = "serialNumber", skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<NormalizedMetadata>,
    pub components: Vec<NormalizedComponent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<Vec<NormalizedDependency>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NormalizedMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<NormalizedTool>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authors: Option<Vec<NormalizedOrganizationalContact>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<NormalizedComponent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacture: Option<NormalizedOrganizationalEntity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier: Option<NormalizedOrganizationalEntity>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NormalizedTool {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hashes: Option<Vec<NormalizedHash>>,
    #[serde(rename = "externalReferences", skip_serializing_if = "Option::is_none")]
    pub external_references: Option<Vec<NormalizedExternalReference>>,
}

/// One node of the flattened dependency graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedDependency {
    #[serde(rename = "ref")]
    pub bom_ref: String,
    #[serde(rename = "dependsOn", skip_serializing_if = "Option::is_none")]
    pub depends_on: Option<Vec<String>>,
}

use chrono::{DateTime, Utc};

use super::{Component, OrganizationalContact, OrganizationalEntity, Tool};

/// Document-level metadata block
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Metadata {
    pub timestamp: Option<DateTime<Utc>>,
    pub tools: Vec<Tool>,
    pub authors: Vec<OrganizationalContact>,
    /// The component the BOM describes
    pub component: Option<Component>,
    pub manufacture: Option<OrganizationalEntity>,
    pub supplier: Option<OrganizationalEntity>,
}

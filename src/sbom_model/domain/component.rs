use std::cmp::Ordering;

use super::repository::compare_optional;
use super::tree::PreOrder;
use super::{
    BomRef, BomRefRepository, Comparable, ComponentScope, ComponentType, ExternalReference,
    HashRepository, License, OrganizationalEntity, Property, Swid,
};

/// Software component, possibly containing nested components
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    pub component_type: ComponentType,
    pub name: String,
    pub bom_ref: BomRef,
    pub group: Option<String>,
    pub version: Option<String>,
    pub supplier: Option<OrganizationalEntity>,
    pub author: Option<String>,
    pub publisher: Option<String>,
    pub description: Option<String>,
    pub scope: Option<ComponentScope>,
    pub hashes: HashRepository,
    pub licenses: Vec<License>,
    pub copyright: Option<String>,
    pub cpe: Option<String>,
    pub purl: Option<String>,
    pub swid: Option<Swid>,
    pub external_references: Vec<ExternalReference>,
    pub properties: Vec<Property>,
    pub components: ComponentRepository,
    /// Refs of the components this one depends on
    pub dependencies: BomRefRepository,
}

impl Component {
    pub fn new(component_type: ComponentType, name: impl Into<String>) -> Self {
        Self {
            component_type,
            name: name.into(),
            bom_ref: BomRef::default(),
            group: None,
            version: None,
            supplier: None,
            author: None,
            publisher: None,
            description: None,
            scope: None,
            hashes: HashRepository::new(),
            licenses: Vec::new(),
            copyright: None,
            cpe: None,
            purl: None,
            swid: None,
            external_references: Vec::new(),
            properties: Vec::new(),
            components: ComponentRepository::new(),
            dependencies: BomRefRepository::new(),
        }
    }

    pub fn with_bom_ref(mut self, bom_ref: impl Into<String>) -> Self {
        self.bom_ref = BomRef::new(bom_ref);
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Adds a dependency edge. Duplicates collapse.
    pub fn depends_on(mut self, bom_ref: impl Into<String>) -> Self {
        self.dependencies.insert(BomRef::new(bom_ref));
        self
    }

    pub fn with_component(mut self, component: Component) -> Self {
        self.components.push(component);
        self
    }
}

impl Comparable for Component {
    fn compare(&self, other: &Self) -> Ordering {
        self.bom_ref
            .compare(&other.bom_ref)
            .then_with(|| compare_optional(self.purl.as_deref(), other.purl.as_deref()))
            .then_with(|| compare_optional(self.cpe.as_deref(), other.cpe.as_deref()))
            .then_with(|| compare_optional(self.group.as_deref(), other.group.as_deref()))
            .then_with(|| self.name.cmp(&other.name))
            .then_with(|| compare_optional(self.version.as_deref(), other.version.as_deref()))
    }
}

/// Ordered collection of sibling components
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComponentRepository(Vec<Component>);

impl ComponentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, component: Component) {
        self.0.push(component);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Component> {
        self.0.iter()
    }

    /// Pre-order walk over every component at every depth
    pub fn tree_iter(&self) -> PreOrder<'_> {
        PreOrder::new(&self.0)
    }
}

impl From<Vec<Component>> for ComponentRepository {
    fn from(components: Vec<Component>) -> Self {
        Self(components)
    }
}

impl FromIterator<Component> for ComponentRepository {
    fn from_iter<I: IntoIterator<Item = Component>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ComponentRepository {
    type Item = &'a Component;
    type IntoIter = std::slice::Iter<'a, Component>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

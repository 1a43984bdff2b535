use cdx_normalize::prelude::*;
use std::cell::Cell;

/// Mock SpecCapabilities for testing
///
/// Everything is supported until switched off through the builder methods.
/// The number of component type queries is recorded.
pub struct MockSpec {
    pub version: SpecVersion,
    pub json: bool,
    pub rejected_component_types: Vec<ComponentType>,
    pub rejected_hash_algorithms: Vec<HashAlgorithm>,
    pub rejected_reference_types: Vec<ExternalReferenceType>,
    pub dependency_graph: bool,
    pub tool_references: bool,
    pub properties: bool,
    pub component_version_required: bool,
    pub component_type_queries: Cell<usize>,
}

impl MockSpec {
    pub fn new() -> Self {
        Self {
            version: SpecVersion::V1_5,
            json: true,
            rejected_component_types: Vec::new(),
            rejected_hash_algorithms: Vec::new(),
            rejected_reference_types: Vec::new(),
            dependency_graph: true,
            tool_references: true,
            properties: true,
            component_version_required: false,
            component_type_queries: Cell::new(0),
        }
    }

    pub fn without_component_type(mut self, component_type: ComponentType) -> Self {
        self.rejected_component_types.push(component_type);
        self
    }

    pub fn without_hash_algorithm(mut self, algorithm: HashAlgorithm) -> Self {
        self.rejected_hash_algorithms.push(algorithm);
        self
    }

    pub fn without_reference_type(mut self, reference_type: ExternalReferenceType) -> Self {
        self.rejected_reference_types.push(reference_type);
        self
    }

    pub fn without_json(mut self) -> Self {
        self.json = false;
        self
    }

    pub fn without_dependency_graph(mut self) -> Self {
        self.dependency_graph = false;
        self
    }

    pub fn without_properties(mut self) -> Self {
        self.properties = false;
        self
    }

    pub fn requiring_component_version(mut self) -> Self {
        self.component_version_required = true;
        self
    }
}

impl Default for MockSpec {
    fn default() -> Self {
        Self::new()
    }
}

impl SpecCapabilities for MockSpec {
    fn version(&self) -> SpecVersion {
        self.version
    }

    fn supports_format(&self, format: OutputFormat) -> bool {
        match format {
            OutputFormat::Json => self.json,
            OutputFormat::Xml => true,
        }
    }

    fn supports_component_type(&self, component_type: ComponentType) -> bool {
        self.component_type_queries
            .set(self.component_type_queries.get() + 1);
        !self.rejected_component_types.contains(&component_type)
    }

    fn supports_hash_algorithm(&self, algorithm: HashAlgorithm) -> bool {
        !self.rejected_hash_algorithms.contains(&algorithm)
    }

    fn supports_hash_value(&self, content: &str) -> bool {
        !content.is_empty() && content.chars().all(|c| c.is_ascii_hexdigit())
    }

    fn supports_external_reference_type(&self, reference_type: ExternalReferenceType) -> bool {
        !self.rejected_reference_types.contains(&reference_type)
    }

    fn supports_properties(&self, _owner: &Component) -> bool {
        self.properties
    }

    fn supports_tool_references(&self) -> bool {
        self.tool_references
    }

    fn requires_component_version(&self) -> bool {
        self.component_version_required
    }

    fn supports_dependency_graph(&self) -> bool {
        self.dependency_graph
    }
}

use super::{Component, ComponentRepository, Metadata};

/// Root aggregate of a bill of materials
#[derive(Debug, Clone, PartialEq)]
pub struct Bom {
    pub version: u32,
    pub serial_number: Option<String>,
    pub metadata: Option<Metadata>,
    pub components: ComponentRepository,
}

impl Bom {
    pub fn new() -> Self {
        Self {
            version: 1,
            serial_number: None,
            metadata: None,
            components: ComponentRepository::new(),
        }
    }

    pub fn with_component(mut self, component: Component) -> Self {
        self.components.push(component);
        self
    }

    /// Root component from the metadata block, if any
    pub fn root_component(&self) -> Option<&Component> {
        self.metadata.as_ref().and_then(|m| m.component.as_ref())
    }
}

impl Default for Bom {
    fn default() -> Self {
        Self::new()
    }
}

use super::{non_empty, non_empty_list};
use crate::application::dto::NormalizerOptions;
use crate::application::factories::NormalizerFactory;
use crate::application::normalized::NormalizedComponent;
use crate::sbom_model::domain::{ordered, Component, ComponentRepository};

pub struct ComponentNormalizer<'s> {
    factory: NormalizerFactory<'s>,
}

impl<'s> ComponentNormalizer<'s> {
    pub fn new(factory: NormalizerFactory<'s>) -> Self {
        Self { factory }
    }

    /// Normalizes a component and its nested components
    ///
    /// Returns `None` when the target version does not know the component's type.
    /// The whole subtree is dropped with it.
    pub fn normalize(
        &self,
        data: &Component,
        options: &NormalizerOptions,
    ) -> Option<NormalizedComponent> {
        let spec = self.factory.spec();
        if !spec.supports_component_type(data.component_type) {
            tracing::debug!(
                name = %data.name,
                component_type = %data.component_type,
                spec_version = %spec.version(),
                "Skipping component with unsupported type"
            );
            return None;
        }

        let version = match non_empty(data.version.as_deref()) {
            Some(version) => Some(version),
            None if spec.requires_component_version() => Some(String::new()),
            None => None,
        };
        let bom_ref = if data.bom_ref.is_empty() {
            None
        } else {
            Some(data.bom_ref.value().to_string())
        };
        let properties = if spec.supports_properties(data) {
            self.factory
                .make_for_property()
                .normalize_repository(&data.properties, options)
        } else {
            Vec::new()
        };

        Some(NormalizedComponent {
            component_type: data.component_type.as_str().to_string(),
            name: data.name.clone(),
            group: non_empty(data.group.as_deref()),
            version,
            bom_ref,
            supplier: data.supplier.as_ref().map(|s| {
                self.factory
                    .make_for_organizational_entity()
                    .normalize(s, options)
            }),
            author: non_empty(data.author.as_deref()),
            publisher: non_empty(data.publisher.as_deref()),
            description: non_empty(data.description.as_deref()),
            scope: data.scope.map(|s| s.as_str().to_string()),
            hashes: non_empty_list(
                self.factory
                    .make_for_hash()
                    .normalize_repository(&data.hashes, options),
            ),
            licenses: non_empty_list(
                self.factory
                    .make_for_license()
                    .normalize_repository(&data.licenses, options),
            ),
            copyright: non_empty(data.copyright.as_deref()),
            cpe: non_empty(data.cpe.as_deref()),
            purl: non_empty(data.purl.as_deref()),
            swid: data
                .swid
                .as_ref()
                .map(|s| self.factory.make_for_swid().normalize(s, options)),
            external_references: non_empty_list(
                self.factory
                    .make_for_external_reference()
                    .normalize_repository(&data.external_references, options),
            ),
            properties: non_empty_list(properties),
            components: non_empty_list(self.normalize_repository(&data.components, options)),
        })
    }

    pub fn normalize_repository(
        &self,
        data: &ComponentRepository,
        options: &NormalizerOptions,
    ) -> Vec<NormalizedComponent> {
        ordered(data, options.sort_lists)
            .into_iter()
            .filter_map(|c| self.normalize(c, options))
            .collect()
    }
}

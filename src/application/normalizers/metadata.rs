use chrono::SecondsFormat;

use super::non_empty_list;
use crate::application::dto::NormalizerOptions;
use crate::application::factories::NormalizerFactory;
use crate::application::normalized::NormalizedMetadata;
use crate::sbom_model::domain::Metadata;

pub struct MetadataNormalizer<'s> {
    factory: NormalizerFactory<'s>,
}

impl<'s> MetadataNormalizer<'s> {
    pub fn new(factory: NormalizerFactory<'s>) -> Self {
        Self { factory }
    }

    pub fn normalize(&self, data: &Metadata, options: &NormalizerOptions) -> NormalizedMetadata {
        let entity_normalizer = self.factory.make_for_organizational_entity();

        NormalizedMetadata {
            timestamp: data
                .timestamp
                .map(|t| t.to_rfc3339_opts(SecondsFormat::Millis, true)),
            tools: non_empty_list(
                self.factory
                    .make_for_tool()
                    .normalize_repository(&data.tools, options),
            ),
            authors: non_empty_list(
                self.factory
                    .make_for_organizational_contact()
                    .normalize_repository(&data.authors, options),
            ),
            component: data
                .component
                .as_ref()
                .and_then(|c| self.factory.make_for_component().normalize(c, options)),
            manufacture: data
                .manufacture
                .as_ref()
                .map(|m| entity_normalizer.normalize(m, options)),
            supplier: data
                .supplier
                .as_ref()
                .map(|s| entity_normalizer.normalize(s, options)),
        }
    }
}

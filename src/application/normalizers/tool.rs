use super::{non_empty, non_empty_list};
use crate::application::dto::NormalizerOptions;
use crate::application::factories::NormalizerFactory;
use crate::application::normalized::NormalizedTool;
use crate::sbom_model::domain::{ordered, Tool};

pub struct ToolNormalizer<'s> {
    factory: NormalizerFactory<'s>,
}

impl<'s> ToolNormalizer<'s> {
    pub fn new(factory: NormalizerFactory<'s>) -> Self {
        Self { factory }
    }

    /// External references are only emitted when the target version allows them on tools
    pub fn normalize(&self, data: &Tool, options: &NormalizerOptions) -> NormalizedTool {
        let hashes = self
            .factory
            .make_for_hash()
            .normalize_repository(&data.hashes, options);
        let external_references = if self.factory.spec().supports_tool_references() {
            self.factory
                .make_for_external_reference()
                .normalize_repository(&data.external_references, options)
        } else {
            Vec::new()
        };

        NormalizedTool {
            vendor: non_empty(data.vendor.as_deref()),
            name: non_empty(data.name.as_deref()),
            version: non_empty(data.version.as_deref()),
            hashes: non_empty_list(hashes),
            external_references: non_empty_list(external_references),
        }
    }

    pub fn normalize_repository(
        &self,
        data: &[Tool],
        options: &NormalizerOptions,
    ) -> Vec<NormalizedTool> {
        ordered(data, options.sort_lists)
            .into_iter()
            .map(|t| self.normalize(t, options))
            .collect()
    }
}

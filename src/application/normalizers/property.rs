use crate::application::dto::NormalizerOptions;
use crate::application::normalized::NormalizedProperty;
use crate::sbom_model::domain::{ordered, Property};

pub struct PropertyNormalizer;

impl PropertyNormalizer {
    pub fn new() -> Self {
        Self
    }

    pub fn normalize(&self, data: &Property, _options: &NormalizerOptions) -> NormalizedProperty {
        NormalizedProperty {
            name: data.name.clone(),
            value: data.value.clone(),
        }
    }

    pub fn normalize_repository(
        &self,
        data: &[Property],
        options: &NormalizerOptions,
    ) -> Vec<NormalizedProperty> {
        ordered(data, options.sort_lists)
            .into_iter()
            .map(|p| self.normalize(p, options))
            .collect()
    }
}

impl Default for PropertyNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

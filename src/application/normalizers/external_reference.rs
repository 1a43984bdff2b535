use super::non_empty;
use crate::application::dto::NormalizerOptions;
use crate::application::factories::NormalizerFactory;
use crate::application::normalized::NormalizedExternalReference;
use crate::sbom_model::domain::{ordered, ExternalReference};

pub struct ExternalReferenceNormalizer<'s> {
    factory: NormalizerFactory<'s>,
}

impl<'s> ExternalReferenceNormalizer<'s> {
    pub fn new(factory: NormalizerFactory<'s>) -> Self {
        Self { factory }
    }

    pub fn normalize(
        &self,
        data: &ExternalReference,
        _options: &NormalizerOptions,
    ) -> Option<NormalizedExternalReference> {
        let spec = self.factory.spec();
        if !spec.supports_external_reference_type(data.reference_type) {
            return None;
        }
        Some(NormalizedExternalReference {
            url: data.url.clone(),
            reference_type: data.reference_type.as_str().to_string(),
            comment: non_empty(data.comment.as_deref()),
        })
    }

    pub fn normalize_repository(
        &self,
        data: &[ExternalReference],
        options: &NormalizerOptions,
    ) -> Vec<NormalizedExternalReference> {
        ordered(data, options.sort_lists)
            .into_iter()
            .filter_map(|r| self.normalize(r, options))
            .collect()
    }
}

use crate::application::dto::NormalizerOptions;
use crate::application::factories::NormalizerFactory;
use crate::application::normalized::NormalizedHash;
use crate::sbom_model::domain::{ordered, Hash, HashRepository};

pub struct HashNormalizer<'s> {
    factory: NormalizerFactory<'s>,
}

impl<'s> HashNormalizer<'s> {
    pub fn new(factory: NormalizerFactory<'s>) -> Self {
        Self { factory }
    }

    /// Omitted unless both the algorithm and the digest are valid for the target version
    pub fn normalize(&self, data: &Hash, _options: &NormalizerOptions) -> Option<NormalizedHash> {
        let spec = self.factory.spec();
        if !spec.supports_hash_algorithm(data.algorithm)
            || !spec.supports_hash_value(&data.content)
        {
            return None;
        }
        Some(NormalizedHash {
            alg: data.algorithm.as_str().to_string(),
            content: data.content.clone(),
        })
    }

    pub fn normalize_repository(
        &self,
        data: &HashRepository,
        options: &NormalizerOptions,
    ) -> Vec<NormalizedHash> {
        let hashes: Vec<Hash> = data.iter().collect();
        ordered(&hashes, options.sort_lists)
            .into_iter()
            .filter_map(|h| self.normalize(h, options))
            .collect()
    }
}

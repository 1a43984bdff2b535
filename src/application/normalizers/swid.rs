use super::non_empty;
use crate::application::dto::NormalizerOptions;
use crate::application::factories::NormalizerFactory;
use crate::application::normalized::NormalizedSwid;
use crate::sbom_model::domain::Swid;
use crate::shared::json_schema::is_iri_reference;

pub struct SwidNormalizer<'s> {
    factory: NormalizerFactory<'s>,
}

impl<'s> SwidNormalizer<'s> {
    pub fn new(factory: NormalizerFactory<'s>) -> Self {
        Self { factory }
    }

    pub fn normalize(&self, data: &Swid, options: &NormalizerOptions) -> NormalizedSwid {
        NormalizedSwid {
            tag_id: data.tag_id.clone(),
            name: data.name.clone(),
            version: non_empty(data.version.as_deref()),
            tag_version: data.tag_version,
            patch: data.patch,
            text: data
                .text
                .as_ref()
                .map(|t| self.factory.make_for_attachment().normalize(t, options)),
            url: non_empty(data.url.as_deref()).filter(|url| is_iri_reference(url)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::spec::SPEC_1_4;
    use crate::sbom_model::domain::Attachment;

    #[test]
    fn test_normalize_swid() {
        let factory = NormalizerFactory::new(&SPEC_1_4);
        let tag_id = "swidgen-242eb18a-503e-ca37-393b-cf156ef09691_9.1.1";
        let mut swid = Swid::new(tag_id, "Acme App");
        swid.version = Some("9.1.1".to_string());
        swid.tag_version = Some(2);
        swid.patch = Some(false);
        swid.text = Some(Attachment::new("PD94bWwgdmVyc2lvbj0iMS4wIj8+"));
        swid.url = Some("https://example.com/swid".to_string());

        let normalized = factory
            .make_for_swid()
            .normalize(&swid, &NormalizerOptions::default());

        assert_eq!(normalized.name, "Acme App");
        assert_eq!(normalized.version.as_deref(), Some("9.1.1"));
        assert_eq!(normalized.tag_version, Some(2));
        assert_eq!(normalized.patch, Some(false));
        assert!(normalized.text.is_some());
        assert_eq!(normalized.url.as_deref(), Some("https://example.com/swid"));
    }

    #[test]
    fn test_invalid_url_omitted() {
        let factory = NormalizerFactory::new(&SPEC_1_4);
        let mut swid = Swid::new("tag", "name");
        swid.url = Some("has spaces in it".to_string());
        swid.version = Some(String::new());

        let normalized = factory
            .make_for_swid()
            .normalize(&swid, &NormalizerOptions::default());
        assert!(normalized.url.is_none());
        assert!(normalized.version.is_none());
    }
}

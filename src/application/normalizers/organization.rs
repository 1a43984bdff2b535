use super::{non_empty, non_empty_list, normalize_strings};
use crate::application::dto::NormalizerOptions;
use crate::application::factories::NormalizerFactory;
use crate::application::normalized::{
    NormalizedOrganizationalContact, NormalizedOrganizationalEntity,
};
use crate::sbom_model::domain::{ordered, OrganizationalContact, OrganizationalEntity};
use crate::shared::json_schema::{is_idn_email, is_iri_reference};

pub struct OrganizationalContactNormalizer;

impl OrganizationalContactNormalizer {
    pub fn new() -> Self {
        Self
    }

    /// Emails that do not look like an `idn-email` are dropped
    pub fn normalize(
        &self,
        data: &OrganizationalContact,
        _options: &NormalizerOptions,
    ) -> NormalizedOrganizationalContact {
        NormalizedOrganizationalContact {
            name: non_empty(data.name.as_deref()),
            email: non_empty(data.email.as_deref()).filter(|email| is_idn_email(email)),
            phone: non_empty(data.phone.as_deref()),
        }
    }

    pub fn normalize_repository(
        &self,
        data: &[OrganizationalContact],
        options: &NormalizerOptions,
    ) -> Vec<NormalizedOrganizationalContact> {
        ordered(data, options.sort_lists)
            .into_iter()
            .map(|c| self.normalize(c, options))
            .collect()
    }
}

impl Default for OrganizationalContactNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

pub struct OrganizationalEntityNormalizer<'s> {
    factory: NormalizerFactory<'s>,
}

impl<'s> OrganizationalEntityNormalizer<'s> {
    pub fn new(factory: NormalizerFactory<'s>) -> Self {
        Self { factory }
    }

    pub fn normalize(
        &self,
        data: &OrganizationalEntity,
        options: &NormalizerOptions,
    ) -> NormalizedOrganizationalEntity {
        let urls = normalize_strings(data.url.iter().map(String::as_str), options.sort_lists)
            .into_iter()
            .filter(|url| is_iri_reference(url))
            .collect();
        let contacts = self
            .factory
            .make_for_organizational_contact()
            .normalize_repository(&data.contact, options);

        NormalizedOrganizationalEntity {
            name: non_empty(data.name.as_deref()),
            url: non_empty_list(urls),
            contact: non_empty_list(contacts),
        }
    }
}

use super::non_empty;
use crate::application::dto::NormalizerOptions;
use crate::application::factories::NormalizerFactory;
use crate::application::normalized::{
    NormalizedAttachment, NormalizedLicense, NormalizedNamedLicense, NormalizedSpdxLicense,
};
use crate::sbom_model::domain::{ordered, Attachment, License};

pub struct LicenseNormalizer<'s> {
    factory: NormalizerFactory<'s>,
}

impl<'s> LicenseNormalizer<'s> {
    pub fn new(factory: NormalizerFactory<'s>) -> Self {
        Self { factory }
    }

    pub fn normalize(&self, data: &License, options: &NormalizerOptions) -> NormalizedLicense {
        match data {
            License::Named(license) => NormalizedLicense::Named {
                license: NormalizedNamedLicense {
                    name: license.name.clone(),
                    text: self.normalize_text(license.text.as_ref(), options),
                    url: non_empty(license.url.as_deref()),
                },
            },
            License::Spdx(license) => NormalizedLicense::Spdx {
                license: NormalizedSpdxLicense {
                    id: license.id.clone(),
                    text: self.normalize_text(license.text.as_ref(), options),
                    url: non_empty(license.url.as_deref()),
                },
            },
            License::Expression(license) => NormalizedLicense::Expression {
                expression: license.expression.clone(),
            },
        }
    }

    pub fn normalize_repository(
        &self,
        data: &[License],
        options: &NormalizerOptions,
    ) -> Vec<NormalizedLicense> {
        ordered(data, options.sort_lists)
            .into_iter()
            .map(|l| self.normalize(l, options))
            .collect()
    }

    fn normalize_text(
        &self,
        text: Option<&Attachment>,
        options: &NormalizerOptions,
    ) -> Option<NormalizedAttachment> {
        text.map(|t| self.factory.make_for_attachment().normalize(t, options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::spec::SPEC_1_5;
    use crate::sbom_model::domain::{NamedLicense, SpdxLicense};
    use serde_json::{json, Value};

    fn to_json(license: &License) -> Value {
        let normalized = NormalizerFactory::new(&SPEC_1_5)
            .make_for_license()
            .normalize(license, &NormalizerOptions::default());
        serde_json::to_value(normalized).unwrap()
    }

    #[test]
    fn test_each_variant() {
        assert_eq!(
            to_json(&License::named("Custom")),
            json!({"license": {"name": "Custom"}})
        );
        assert_eq!(
            to_json(&License::spdx("MIT")),
            json!({"license": {"id": "MIT"}})
        );
        assert_eq!(
            to_json(&License::expression("MIT OR Apache-2.0")),
            json!({"expression": "MIT OR Apache-2.0"})
        );
    }

    #[test]
    fn test_spdx_text_and_url() {
        let license = License::Spdx(SpdxLicense {
            id: "MIT".to_string(),
            text: Some(Attachment::new("Permission is hereby granted")),
            url: Some("https://opensource.org/licenses/MIT".to_string()),
        });

        assert_eq!(
            to_json(&license),
            json!({"license": {
                "id": "MIT",
                "text": {"content": "Permission is hereby granted"},
                "url": "https://opensource.org/licenses/MIT"
            }})
        );
    }

    #[test]
    fn test_url_kept_verbatim() {
        let license = License::Named(NamedLicense {
            name: "Custom".to_string(),
            text: None,
            url: Some("https://example.com/my license.txt".to_string()),
        });

        assert_eq!(
            to_json(&license),
            json!({"license": {"name": "Custom", "url": "https://example.com/my license.txt"}})
        );
    }

    #[test]
    fn test_empty_url_omitted() {
        let license = License::Spdx(SpdxLicense {
            id: "MIT".to_string(),
            text: None,
            url: Some(String::new()),
        });

        assert_eq!(to_json(&license), json!({"license": {"id": "MIT"}}));
    }

    #[test]
    fn test_repository_sorted_by_variant_then_key() {
        let factory = NormalizerFactory::new(&SPEC_1_5);
        let licenses = vec![
            License::expression("BSD-3-Clause OR MIT"),
            License::spdx("MIT"),
            License::named("Proprietary"),
            License::spdx("Apache-2.0"),
        ];

        let list = factory
            .make_for_license()
            .normalize_repository(&licenses, &NormalizerOptions::sorted());
        assert_eq!(
            serde_json::to_value(list).unwrap(),
            json!([
                {"license": {"name": "Proprietary"}},
                {"license": {"id": "Apache-2.0"}},
                {"license": {"id": "MIT"}},
                {"expression": "BSD-3-Clause OR MIT"}
            ])
        );
    }
}

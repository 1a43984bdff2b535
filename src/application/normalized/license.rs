use super::NormalizedAttachment;
use serde::Serialize;

/// A normalized license choice; each variant has its own JSON shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum NormalizedLicense {
    Named { license: NormalizedNamedLicense },
    Spdx { license: NormalizedSpdxLicense },
    Expression { expression: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedNamedLicense {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<NormalizedAttachment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedSpdxLicense {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<NormalizedAttachment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_variant_shapes() {
        let named = NormalizedLicense::Named {
            license: NormalizedNamedLicense {
                name: "Custom".to_string(),
                text: None,
                url: None,
            },
        };
        let spdx = NormalizedLicense::Spdx {
            license: NormalizedSpdxLicense {
                id: "MIT".to_string(),
                text: None,
                url: Some("https://opensource.org/licenses/MIT".to_string()),
            },
        };
        let expression = NormalizedLicense::Expression {
            expression: "MIT OR Apache-2.0".to_string(),
        };

        assert_eq!(
            serde_json::to_value(&named).unwrap(),
            json!({"license": {"name": "Custom"}})
        );
        assert_eq!(
            serde_json::to_value(&spdx).unwrap(),
            json!({"license": {"id": "MIT", "url": "https://opensource.org/licenses/MIT"}})
        );
        assert_eq!(
            serde_json::to_value(&expression).unwrap(),
            json!({"expression": "MIT OR Apache-2.0"})
        );
    }
}

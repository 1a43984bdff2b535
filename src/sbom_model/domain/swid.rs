use super::Attachment;

/// ISO/IEC 19770-2 software identification tag
#[derive(Debug, Clone, PartialEq)]
pub struct Swid {
    pub tag_id: String,
    pub name: String,
    pub version: Option<String>,
    pub tag_version: Option<u32>,
    pub patch: Option<bool>,
    pub text: Option<Attachment>,
    pub url: Option<String>,
}

impl Swid {
    pub fn new(tag_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            tag_id: tag_id.into(),
            name: name.into(),
            version: None,
            tag_version: None,
            patch: None,
            text: None,
            url: None,
        }
    }
}

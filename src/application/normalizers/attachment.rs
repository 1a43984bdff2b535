use super::non_empty;
use crate::application::dto::NormalizerOptions;
use crate::application::normalized::NormalizedAttachment;
use crate::sbom_model::domain::Attachment;

pub struct AttachmentNormalizer;

impl AttachmentNormalizer {
    pub fn new() -> Self {
        Self
    }

    pub fn normalize(
        &self,
        data: &Attachment,
        _options: &NormalizerOptions,
    ) -> NormalizedAttachment {
        NormalizedAttachment {
            content: data.content.clone(),
            content_type: non_empty(data.content_type.as_deref()),
            encoding: data.encoding.map(|e| e.as_str().to_string()),
        }
    }
}

impl Default for AttachmentNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Encoding of attachment content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachmentEncoding {
    Base64,
}

impl AttachmentEncoding {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttachmentEncoding::Base64 => "base64",
        }
    }
}

/// Inline content, such as a license text
#[derive(Debug, Clone, PartialEq)]
pub struct Attachment {
    pub content: String,
    pub content_type: Option<String>,
    pub encoding: Option<AttachmentEncoding>,
}

impl Attachment {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            content_type: None,
            encoding: None,
        }
    }
}

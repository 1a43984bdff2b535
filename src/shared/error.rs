use crate::application::dto::{OutputFormat, SpecVersion};
use std::path::PathBuf;
use thiserror::Error;

/// Application-specific errors for BOM normalization and serialization.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum SbomError {
    #[error("CycloneDX {version} does not support {format} format\n\n💡 Hint: Choose a spec version that supports {format}, or a different output format")]
    UnsupportedFormat {
        version: SpecVersion,
        format: OutputFormat,
    },

    #[error("Unknown CycloneDX spec version: {value}\n\n💡 Hint: Supported versions are 1.1, 1.2, 1.3, 1.4 and 1.5")]
    UnknownSpecVersion { value: String },

    #[error("Failed to serialize BOM as {format}\nDetails: {details}")]
    Serialization {
        format: OutputFormat,
        details: String,
    },

    /// Validation error for configuration values
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}

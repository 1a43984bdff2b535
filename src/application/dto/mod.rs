/// Data Transfer Objects for application layer
///
/// DTOs carry options and identifiers between the caller, the
/// normalizers and the serializer adapters.
mod normalizer_options;
mod output_format;
mod spec_version;

pub use normalizer_options::{NormalizerOptions, SerializerOptions};
pub use output_format::OutputFormat;
pub use spec_version::SpecVersion;

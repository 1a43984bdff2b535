/// Serializer adapters for the CycloneDX output formats
mod json_serializer;

pub use json_serializer::JsonSerializer;

/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces the normalization core uses to
/// reach its collaborators: the version capability registry and the
/// text serialization backend.
pub mod bom_serializer;
pub mod spec_capabilities;

pub use bom_serializer::BomSerializer;
pub use spec_capabilities::SpecCapabilities;

/// Inbound ports (Driving ports) - Use case interfaces
///
/// These ports define the interfaces that callers use to interact
/// with the application core.
pub mod bom_serialization_port;

pub use bom_serialization_port::{BomSerializationPort, SerializedBom};

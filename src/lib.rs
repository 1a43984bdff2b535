//! cdx-normalize - Spec-aware CycloneDX BOM normalization
//!
//! This library turns an in-memory CycloneDX BOM object graph into a
//! document that conforms to one chosen CycloneDX spec version. Fields,
//! enum values and structures the target version does not know are
//! omitted, and the nested component tree is flattened into a validated
//! dependency graph.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`sbom_model`): The BOM object graph and tree traversal
//! - **Application Layer** (`application`): Normalizers, factories and use cases
//! - **Ports** (`ports`): Interface definitions for spec capabilities and serializers
//! - **Adapters** (`adapters`): Per-version spec tables and the JSON serializer
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```
//! use cdx_normalize::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let bom = Bom::new()
//!     .with_component(
//!         Component::new(ComponentType::Library, "serde")
//!             .with_bom_ref("pkg:cargo/serde@1.0.0")
//!             .with_version("1.0.0")
//!             .depends_on("pkg:cargo/serde_derive@1.0.0"),
//!     )
//!     .with_component(
//!         Component::new(ComponentType::Library, "serde_derive")
//!             .with_bom_ref("pkg:cargo/serde_derive@1.0.0")
//!             .with_version("1.0.0"),
//!     );
//!
//! let factory = NormalizerFactory::new(Spec::for_version(SpecVersion::V1_4));
//! let serializer = JsonSerializer::new(factory)?;
//! let json = serializer.serialize(
//!     &bom,
//!     &NormalizerOptions::sorted(),
//!     &SerializerOptions::pretty(),
//! )?;
//! assert!(json.contains("\"dependsOn\""));
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod ports;
pub mod sbom_model;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::serializers::JsonSerializer;
    pub use crate::adapters::outbound::spec::Spec;
    pub use crate::application::dto::{
        NormalizerOptions, OutputFormat, SerializerOptions, SpecVersion,
    };
    pub use crate::application::factories::NormalizerFactory;
    pub use crate::application::normalized::NormalizedBom;
    pub use crate::application::use_cases::SerializeBomUseCase;
    pub use crate::config::{discover_config, load_config_from_path, NormalizeConfig};
    pub use crate::ports::inbound::{BomSerializationPort, SerializedBom};
    pub use crate::ports::outbound::{BomSerializer, SpecCapabilities};
    pub use crate::sbom_model::domain::{
        Bom, BomRef, Component, ComponentType, ExternalReference, ExternalReferenceType,
        HashAlgorithm, License, Metadata, OrganizationalContact, OrganizationalEntity, Property,
        Tool,
    };
    pub use crate::sbom_model::services::BomGenerator;
    pub use crate::shared::Result;
}

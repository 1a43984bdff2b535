//! Normalized output values
//!
//! Version-gated, serialization-ready shapes of the domain entities.
//! Every optional field is an `Option` that is skipped when `None`, so a
//! field that was omitted stays distinguishable from one that is present
//! with an empty value.

pub mod bom;
pub mod component;
pub mod license;
pub mod organization;

pub use bom::{NormalizedBom, NormalizedDependency, NormalizedMetadata, NormalizedTool};
pub use component::{
    NormalizedAttachment, NormalizedComponent, NormalizedExternalReference, NormalizedHash,
    NormalizedProperty, NormalizedSwid,
};
pub use license::{NormalizedLicense, NormalizedNamedLicense, NormalizedSpdxLicense};
pub use organization::{NormalizedOrganizationalContact, NormalizedOrganizationalEntity};

pub mod attachment;
pub mod bom;
pub mod bom_ref;
pub mod component;
pub mod component_type;
pub mod external_reference;
pub mod hash;
pub mod license;
pub mod metadata;
pub mod organization;
pub mod property;
pub mod repository;
pub mod swid;
pub mod tool;
pub mod tree;

pub use attachment::{Attachment, AttachmentEncoding};
pub use bom::Bom;
pub use bom_ref::{BomRef, BomRefRepository};
pub use component::{Component, ComponentRepository};
pub use component_type::{ComponentScope, ComponentType};
pub use external_reference::{ExternalReference, ExternalReferenceType};
pub use hash::{Hash, HashAlgorithm, HashRepository};
pub use license::{License, LicenseExpression, NamedLicense, SpdxLicense};
pub use metadata::Metadata;
pub use organization::{OrganizationalContact, OrganizationalEntity};
pub use property::Property;
pub use repository::{ordered, Comparable};
pub use swid::Swid;
pub use tool::Tool;
pub use tree::PreOrder;

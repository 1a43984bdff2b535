//! Entity normalizers
//!
//! One normalizer per domain entity. Each maps a borrowed entity to a
//! newly allocated normalized value, or to `None` when the entity must be
//! omitted for the bound spec version. Normalizers are created by the
//! [`NormalizerFactory`](crate::application::factories::NormalizerFactory)
//! and never mutate their input.

mod attachment;
mod bom;
mod component;
mod dependency_graph;
mod external_reference;
mod hash;
mod license;
mod metadata;
mod organization;
mod property;
mod swid;
mod tool;

pub use attachment::AttachmentNormalizer;
pub use bom::BomNormalizer;
pub use component::ComponentNormalizer;
pub use dependency_graph::DependencyGraphNormalizer;
pub use external_reference::ExternalReferenceNormalizer;
pub use hash::HashNormalizer;
pub use license::LicenseNormalizer;
pub use metadata::MetadataNormalizer;
pub use organization::{OrganizationalContactNormalizer, OrganizationalEntityNormalizer};
pub use property::PropertyNormalizer;
pub use swid::SwidNormalizer;
pub use tool::ToolNormalizer;

/// Empty strings are treated as absent
pub(crate) fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

/// Empty lists are omitted
pub(crate) fn non_empty_list<T>(list: Vec<T>) -> Option<Vec<T>> {
    if list.is_empty() {
        None
    } else {
        Some(list)
    }
}

/// Stringifies and optionally sorts a list of plain strings
pub(crate) fn normalize_strings<'a, I>(values: I, sort: bool) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut list: Vec<String> = values.into_iter().map(str::to_string).collect();
    if sort {
        list.sort();
    }
    list
}

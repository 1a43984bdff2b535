use crate::application::normalizers::{
    AttachmentNormalizer, BomNormalizer, ComponentNormalizer, DependencyGraphNormalizer,
    ExternalReferenceNormalizer, HashNormalizer, LicenseNormalizer, MetadataNormalizer,
    OrganizationalContactNormalizer, OrganizationalEntityNormalizer, PropertyNormalizer,
    SwidNormalizer, ToolNormalizer,
};
use crate::ports::outbound::SpecCapabilities;

/// Factory for creating entity normalizers bound to one spec version
///
/// The factory holds a single reference to the version capabilities for its
/// whole lifetime, so no normalizer ever has to know which version it
/// targets. Normalizers borrow the factory and create their children
/// through it.
#[derive(Clone, Copy)]
pub struct NormalizerFactory<'s> {
    spec: &'s dyn SpecCapabilities,
}

impl<'s> NormalizerFactory<'s> {
    /// Creates a factory for the given spec capabilities
    ///
    /// # Examples
    /// ```
    /// use cdx_normalize::adapters::outbound::spec::SPEC_1_4;
    /// use cdx_normalize::application::factories::NormalizerFactory;
    /// use cdx_normalize::ports::outbound::SpecCapabilities;
    ///
    /// let factory = NormalizerFactory::new(&SPEC_1_4);
    /// assert_eq!(factory.spec().version().as_str(), "1.4");
    /// ```
    pub fn new(spec: &'s dyn SpecCapabilities) -> Self {
        Self { spec }
    }

    pub fn spec(&self) -> &'s dyn SpecCapabilities {
        self.spec
    }

    pub fn make_for_bom(&self) -> BomNormalizer<'s> {
        BomNormalizer::new(*self)
    }

    pub fn make_for_metadata(&self) -> MetadataNormalizer<'s> {
        MetadataNormalizer::new(*self)
    }

    pub fn make_for_component(&self) -> ComponentNormalizer<'s> {
        ComponentNormalizer::new(*self)
    }

    pub fn make_for_tool(&self) -> ToolNormalizer<'s> {
        ToolNormalizer::new(*self)
    }

    pub fn make_for_organizational_contact(&self) -> OrganizationalContactNormalizer {
        OrganizationalContactNormalizer::new()
    }

    pub fn make_for_organizational_entity(&self) -> OrganizationalEntityNormalizer<'s> {
        OrganizationalEntityNormalizer::new(*self)
    }

    pub fn make_for_hash(&self) -> HashNormalizer<'s> {
        HashNormalizer::new(*self)
    }

    pub fn make_for_license(&self) -> LicenseNormalizer<'s> {
        LicenseNormalizer::new(*self)
    }

    pub fn make_for_swid(&self) -> SwidNormalizer<'s> {
        SwidNormalizer::new(*self)
    }

    pub fn make_for_external_reference(&self) -> ExternalReferenceNormalizer<'s> {
        ExternalReferenceNormalizer::new(*self)
    }

    pub fn make_for_attachment(&self) -> AttachmentNormalizer {
        AttachmentNormalizer::new()
    }

    pub fn make_for_property(&self) -> PropertyNormalizer {
        PropertyNormalizer::new()
    }

    pub fn make_for_dependency_graph(&self) -> DependencyGraphNormalizer<'s> {
        DependencyGraphNormalizer::new(*self)
    }
}

impl std::fmt::Debug for NormalizerFactory<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NormalizerFactory")
            .field("spec_version", &self.spec.version())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::spec::{SPEC_1_2, SPEC_1_5};
    use crate::application::dto::SpecVersion;

    #[test]
    fn test_factory_binds_spec() {
        let factory = NormalizerFactory::new(&SPEC_1_2);
        assert_eq!(factory.spec().version(), SpecVersion::V1_2);
    }

    #[test]
    fn test_debug_names_spec_version() {
        let factory = NormalizerFactory::new(&SPEC_1_5);
        assert_eq!(
            format!("{:?}", factory),
            "NormalizerFactory { spec_version: V1_5 }"
        );
    }
}

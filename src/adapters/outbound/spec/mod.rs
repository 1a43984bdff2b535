mod cyclonedx_spec;

pub use cyclonedx_spec::{Spec, SPEC_1_1, SPEC_1_2, SPEC_1_3, SPEC_1_4, SPEC_1_5};

pub mod serializers;
pub mod spec;

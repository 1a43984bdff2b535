pub mod bom_generator;

pub use bom_generator::BomGenerator;

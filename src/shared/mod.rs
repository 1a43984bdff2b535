pub mod error;
pub mod json_schema;
pub mod result;
pub mod security;

pub use result::Result;

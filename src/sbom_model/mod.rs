//! Read-only CycloneDX object model and the services that stamp it.

pub mod domain;
pub mod services;

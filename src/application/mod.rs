/// Application layer - Use cases, DTOs and normalizers
///
/// This layer contains the version-aware normalization pipeline and the
/// use case that drives it through the outbound ports.
pub mod dto;
pub mod factories;
pub mod normalized;
pub mod normalizers;
pub mod use_cases;

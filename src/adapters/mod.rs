/// Adapters layer - Infrastructure implementations
///
/// This layer contains concrete implementations of the outbound ports:
/// the per-version CycloneDX capability tables and the output serializers.
pub mod outbound;

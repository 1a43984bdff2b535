mod normalizer_factory;

pub use normalizer_factory::NormalizerFactory;

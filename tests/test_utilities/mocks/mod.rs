/// Mock implementations for testing
mod mock_spec;

pub use mock_spec::MockSpec;

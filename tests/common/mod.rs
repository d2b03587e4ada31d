//! Common utilities for integration tests

pub mod mock_models;
pub mod test_helpers;

// Re-export commonly used items
#[allow(unused_imports)]
pub use mock_models::{ConstantGrowth, ExponentialDecay};
#[allow(unused_imports)]
pub use test_helpers::{fast_config, relative_error, vs_integral_closed_form};

//! Common test utilities

pub mod hub_mock;
pub mod test_fixtures;

#[allow(unused_imports)]
pub use hub_mock::{MockHub, TEST_TOKEN};

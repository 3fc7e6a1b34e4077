//! Home Assistant client abstraction
//!
//! The dispatcher talks to the hub only through [`HubClient`], so tests can
//! swap the HTTP implementation for a mock.

pub mod http_client;

pub use http_client::HassHttpClient;

use crate::config::SkillConfig;
use crate::error::Result;
use crate::intents::ServiceCall;
use async_trait::async_trait;

/// Outcome of a service call as reported by the hub
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HubResponse {
    /// HTTP status code
    pub status: u16,
}

impl HubResponse {
    pub fn new(status: u16) -> Self {
        Self { status }
    }

    /// The hub answers service calls with exactly 200 on success
    pub fn is_success(&self) -> bool {
        self.status == 200
    }
}

/// Trait for hub client implementations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HubClient: Send + Sync {
    /// Fire a single service call.
    ///
    /// Non-success statuses are returned as a [`HubResponse`]; `Err` is
    /// reserved for transport failures.
    async fn call_service(&self, call: &ServiceCall) -> Result<HubResponse>;
}

/// Create the HTTP client for the configured hub
pub fn create_client(config: &SkillConfig) -> Result<HassHttpClient> {
    HassHttpClient::new(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_200_is_success() {
        assert!(HubResponse::new(200).is_success());
        assert!(!HubResponse::new(201).is_success());
        assert!(!HubResponse::new(401).is_success());
        assert!(!HubResponse::new(500).is_success());
    }
}

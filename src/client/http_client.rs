//! HTTP client for the Home Assistant REST API
//!
//! Every request is a JSON `POST` carrying the long-lived access token as
//! bearer credential. No retries: one call, one answer.

use crate::client::{HubClient, HubResponse};
use crate::config::SkillConfig;
use crate::error::{Result, SkillError};
use crate::intents::ServiceCall;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, ClientBuilder};
use tracing::{debug, warn};

/// HTTP client for a Home Assistant instance
pub struct HassHttpClient {
    client: Client,
    config: SkillConfig,
}

impl HassHttpClient {
    /// Create a new HTTP client
    pub fn new(config: &SkillConfig) -> Result<Self> {
        let mut client_builder = ClientBuilder::new()
            .user_agent(format!("hass-lights-skill/{}", env!("CARGO_PKG_VERSION")))
            .default_headers(Self::default_headers(config)?);

        if let Some(timeout) = config.timeout {
            client_builder = client_builder.timeout(timeout);
        }

        let client = client_builder
            .build()
            .map_err(|e| SkillError::connection(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    fn default_headers(config: &SkillConfig) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();

        let mut auth_value = HeaderValue::from_str(&format!("Bearer {}", config.hass_token()))
            .map_err(|e| SkillError::config(format!("Invalid hass_token: {e}")))?;
        auth_value.set_sensitive(true);

        headers.insert(AUTHORIZATION, auth_value);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }
}

#[async_trait]
impl HubClient for HassHttpClient {
    async fn call_service(&self, call: &ServiceCall) -> Result<HubResponse> {
        let url = self.config.service_url(call.endpoint)?;

        let response = self
            .client
            .post(url)
            .json(&call.payload)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    SkillError::connection(format!("Hub not reachable: {e}"))
                } else {
                    SkillError::Http(e)
                }
            })?;

        let status = response.status();
        if status.is_success() {
            debug!("Service {} answered {status}", call.endpoint);
        } else {
            let body = response.text().await.unwrap_or_default();
            warn!("Service {} answered {status}: {body}", call.endpoint);
        }

        Ok(HubResponse::new(status.as_u16()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_token_with_newline() {
        let config = SkillConfig::new("http://hub".parse().unwrap(), "abc\ndef");
        let err = HassHttpClient::new(&config).err().expect("should fail");
        assert!(err.is_config_error());
    }

    #[test]
    fn test_default_headers() {
        let config = SkillConfig::new("http://hub".parse().unwrap(), "abc");
        let headers = HassHttpClient::default_headers(&config).unwrap();

        assert_eq!(headers[AUTHORIZATION], "Bearer abc");
        assert!(headers[AUTHORIZATION].is_sensitive());
        assert_eq!(headers[CONTENT_TYPE], "application/json");
    }
}

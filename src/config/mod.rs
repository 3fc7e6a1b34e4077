//! Configuration management for the lights skill
//!
//! Settings are read once at startup from the `[skill]` section of an INI
//! file and are immutable afterwards. The dispatcher borrows the resulting
//! [`SkillConfig`] for its whole lifetime.

use crate::error::{Result, SkillError};
use crate::intents::ServiceEndpoint;
use serde::Deserialize;
use std::path::Path;
use std::{env, fmt, time::Duration};
use url::Url;

/// Config file looked up when none is given on the command line
pub const DEFAULT_CONFIG_PATH: &str = "config.ini";

/// Environment variable carrying the supervisor token inside Hass.io
pub const HASSIO_TOKEN_ENV: &str = "HASSIO_TOKEN";

/// Hub URL reachable from add-ons through the supervisor proxy
pub const HASSIO_INTERNAL_HOST: &str = "http://hassio/homeassistant";

pub const DEFAULT_CONFIRMATION_SUCCESS: &str = "Okay";
pub const DEFAULT_CONFIRMATION_FAILURE: &str = "Fehler";

/// Raw `[skill]` section as found in the config file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SkillSection {
    pub hass_token: Option<String>,
    pub hass_host: Option<String>,
    pub confirmation_success: Option<String>,
    pub confirmation_failure: Option<String>,
    /// Only the literal `True` (any case) enables confirmations
    pub enable_confirmation: Option<String>,

    /// Request timeout for hub calls (e.g. "10s")
    #[serde(default, with = "humantime_serde")]
    pub hass_timeout: Option<Duration>,
}

#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    #[serde(default)]
    skill: SkillSection,
}

/// Resolved skill configuration
#[derive(Clone)]
pub struct SkillConfig {
    /// Base URL of the Home Assistant instance
    pub hass_host: Url,

    /// Long-lived access token used as bearer credential
    hass_token: String,

    /// Phrase spoken after a successful action
    pub confirmation_success: String,

    /// Phrase spoken after a failed companion action
    pub confirmation_failure: String,

    /// Speak a confirmation at all
    pub enable_confirmation: bool,

    /// Timeout applied to each hub request, client default when unset
    pub timeout: Option<Duration>,
}

impl fmt::Debug for SkillConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SkillConfig")
            .field("hass_host", &self.hass_host.as_str())
            .field("hass_token", &"***")
            .field("confirmation_success", &self.confirmation_success)
            .field("confirmation_failure", &self.confirmation_failure)
            .field("enable_confirmation", &self.enable_confirmation)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl SkillConfig {
    /// Configuration with default phrases and confirmations disabled
    pub fn new(hass_host: Url, hass_token: impl Into<String>) -> Self {
        Self {
            hass_host,
            hass_token: hass_token.into(),
            confirmation_success: DEFAULT_CONFIRMATION_SUCCESS.to_string(),
            confirmation_failure: DEFAULT_CONFIRMATION_FAILURE.to_string(),
            enable_confirmation: false,
            timeout: None,
        }
    }

    /// Load configuration from an INI file plus the process environment.
    ///
    /// A missing file is not an error; the environment token may be enough.
    pub fn load(path: &Path) -> Result<Self> {
        let section = Self::read_section(path)?;
        let config = Self::from_section(section, env::var(HASSIO_TOKEN_ENV).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Read the raw `[skill]` section from an INI file
    pub fn read_section(path: &Path) -> Result<SkillSection> {
        let settings = ::config::Config::builder()
            .add_source(
                ::config::File::from(path)
                    .format(::config::FileFormat::Ini)
                    .required(false),
            )
            .build()?;

        let raw: RawConfig = settings.try_deserialize()?;
        Ok(raw.skill)
    }

    /// Resolve a raw section, falling back to the Hass.io environment.
    ///
    /// The token comes from the section or from `env_token`. Without an
    /// explicit host, the internal supervisor URL is used, but only when an
    /// environment token exists.
    pub fn from_section(section: SkillSection, env_token: Option<String>) -> Result<Self> {
        let env_token = non_blank(env_token);
        let has_env_token = env_token.is_some();

        let hass_token = non_blank(section.hass_token).or(env_token).ok_or_else(|| {
            SkillError::config(format!(
                "No hub token configured: set hass_token or {HASSIO_TOKEN_ENV}"
            ))
        })?;

        let host = match non_blank(section.hass_host) {
            Some(host) => host,
            None if has_env_token => HASSIO_INTERNAL_HOST.to_string(),
            None => {
                return Err(SkillError::config(
                    "No hub host configured: set hass_host",
                ))
            }
        };
        let hass_host = Url::parse(host.trim())
            .map_err(|e| SkillError::config(format!("Invalid hass_host '{host}': {e}")))?;

        let enable_confirmation = section
            .enable_confirmation
            .is_some_and(|value| value.trim().eq_ignore_ascii_case("true"));

        Ok(Self {
            hass_host,
            hass_token,
            confirmation_success: section
                .confirmation_success
                .unwrap_or_else(|| DEFAULT_CONFIRMATION_SUCCESS.to_string()),
            confirmation_failure: section
                .confirmation_failure
                .unwrap_or_else(|| DEFAULT_CONFIRMATION_FAILURE.to_string()),
            enable_confirmation,
            timeout: section.hass_timeout,
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.hass_host.scheme() != "http" && self.hass_host.scheme() != "https" {
            return Err(SkillError::config("hass_host must use http or https scheme"));
        }

        if self.hass_token.trim().is_empty() {
            return Err(SkillError::config("hass_token cannot be empty"));
        }

        if self.timeout.is_some_and(|timeout| timeout.is_zero()) {
            return Err(SkillError::config("hass_timeout must be greater than zero"));
        }

        Ok(())
    }

    pub fn hass_token(&self) -> &str {
        &self.hass_token
    }

    /// Full URL of a service endpoint.
    ///
    /// The endpoint path is appended to the host, so a base URL with a path
    /// (such as the supervisor proxy) keeps its prefix.
    pub fn service_url(&self, endpoint: ServiceEndpoint) -> Result<Url> {
        let base = self.hass_host.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{base}{}", endpoint.path()))?)
    }
}

/// INI files carry unset keys as `key=`, which reads as an empty string
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}

//! Home Assistant service endpoints and request payloads

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed set of Home Assistant service endpoints used by the skill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceEndpoint {
    LightsOn,
    LightsOff,
    GroupOn,
    GroupOff,
    AutomationOn,
    AutomationOff,
}

impl ServiceEndpoint {
    /// REST path relative to the hub base URL
    pub fn path(self) -> &'static str {
        match self {
            ServiceEndpoint::LightsOn => "/api/services/light/turn_on",
            ServiceEndpoint::LightsOff => "/api/services/light/turn_off",
            ServiceEndpoint::GroupOn => "/api/services/homeassistant/turn_on",
            ServiceEndpoint::GroupOff => "/api/services/homeassistant/turn_off",
            ServiceEndpoint::AutomationOn => "/api/services/automation/turn_on",
            ServiceEndpoint::AutomationOff => "/api/services/automation/turn_off",
        }
    }
}

impl fmt::Display for ServiceEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// JSON body of a service call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServicePayload {
    pub entity_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brightness: Option<serde_json::Value>,
}

/// A resolved hub request: endpoint plus payload
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceCall {
    pub endpoint: ServiceEndpoint,
    pub payload: ServicePayload,
}

impl ServiceCall {
    pub fn new(endpoint: ServiceEndpoint, entity_id: impl Into<String>) -> Self {
        Self {
            endpoint,
            payload: ServicePayload {
                entity_id: entity_id.into(),
                brightness: None,
            },
        }
    }

    /// Attach a brightness slot value to the payload
    #[must_use]
    pub fn with_brightness(mut self, brightness: &str) -> Self {
        self.payload.brightness = Some(brightness_value(brightness));
        self
    }

    pub fn entity_id(&self) -> &str {
        &self.payload.entity_id
    }
}

/// Convert a brightness slot into its JSON representation.
///
/// NLU number slots arrive as strings like `"120"` or `"120.0"`; those are
/// sent as integers. Anything else, including whole numbers outside the
/// `i64` range, is passed through as a string and left for the hub to reject.
fn brightness_value(raw: &str) -> serde_json::Value {
    let trimmed = raw.trim();
    if let Ok(value) = trimmed.parse::<i64>() {
        return value.into();
    }
    // i64::MAX as f64 rounds up to 2^63, so the half-open range is exact
    let integral = i64::MIN as f64..i64::MAX as f64;
    match trimmed.parse::<f64>() {
        Ok(value) if value.fract() == 0.0 && integral.contains(&value) => (value as i64).into(),
        _ => serde_json::Value::String(raw.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_payload_without_brightness_has_only_entity_id() {
        let call = ServiceCall::new(ServiceEndpoint::LightsOff, "light.kitchen_1");
        assert_eq!(
            serde_json::to_value(&call.payload).unwrap(),
            json!({"entity_id": "light.kitchen_1"})
        );
    }

    #[test]
    fn test_brightness_values() {
        assert_eq!(brightness_value("120"), json!(120));
        assert_eq!(brightness_value(" 80 "), json!(80));
        assert_eq!(brightness_value("200.0"), json!(200));
        assert_eq!(brightness_value("50.5"), json!("50.5"));
        assert_eq!(brightness_value("hell"), json!("hell"));
    }

    #[test]
    fn test_out_of_range_brightness_kept_as_string() {
        assert_eq!(brightness_value("1e300"), json!("1e300"));
        assert_eq!(brightness_value("-1e19"), json!("-1e19"));
        assert_eq!(brightness_value("inf"), json!("inf"));
        assert_eq!(brightness_value("1e3"), json!(1000));
    }

    #[test]
    fn test_payload_with_brightness() {
        let call =
            ServiceCall::new(ServiceEndpoint::LightsOn, "light.desk").with_brightness("64");
        assert_eq!(
            serde_json::to_value(&call.payload).unwrap(),
            json!({"entity_id": "light.desk", "brightness": 64})
        );
    }

    #[test]
    fn test_endpoint_paths() {
        assert_eq!(
            ServiceEndpoint::GroupOn.to_string(),
            "/api/services/homeassistant/turn_on"
        );
        assert_eq!(
            ServiceEndpoint::AutomationOff.path(),
            "/api/services/automation/turn_off"
        );
    }
}

//! Light control intents understood by the skill
//!
//! Intents arrive from the NLU pipeline as namespaced strings such as
//! `s710:turnOnLight`. They are parsed once into [`Intent`] so that every
//! mapping decision downstream is an exhaustive `match`.

pub mod lighting;
pub mod service_call;
pub mod slots;

pub use lighting::resolve;
pub use service_call::{ServiceCall, ServiceEndpoint, ServicePayload};
pub use slots::{normalize_room, Slots};

use std::fmt;
use std::str::FromStr;

/// Namespace prefix the NLU assistant puts in front of every intent name
pub const INTENT_NAMESPACE: &str = "s710";

/// Closed set of intents handled by the skill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    TurnOnLight,
    TurnOffLight,
    TurnOnAllLights,
    TurnOffAllLights,
    /// Disable the lights-off automation and switch the light on
    KeepLightOn,
    /// Disable the lights-on automation and switch the light off
    KeepLightOff,
    /// Re-enable both the lights-on and lights-off automations
    EnableAutomatic,
    EnableAutomaticOff,
    SetLightBrightness,
}

impl Intent {
    /// Every intent, in registration order
    pub const ALL: [Intent; 9] = [
        Intent::KeepLightOn,
        Intent::TurnOnLight,
        Intent::KeepLightOff,
        Intent::TurnOffLight,
        Intent::EnableAutomatic,
        Intent::EnableAutomaticOff,
        Intent::TurnOnAllLights,
        Intent::TurnOffAllLights,
        Intent::SetLightBrightness,
    ];

    /// Intent name without namespace
    pub fn name(self) -> &'static str {
        match self {
            Intent::TurnOnLight => "turnOnLight",
            Intent::TurnOffLight => "turnOffLight",
            Intent::TurnOnAllLights => "turnOnAllLights",
            Intent::TurnOffAllLights => "turnOffAllLights",
            Intent::KeepLightOn => "keepLightOn",
            Intent::KeepLightOff => "keepLightOff",
            Intent::EnableAutomatic => "enableAutomatic",
            Intent::EnableAutomaticOff => "enableAutomaticOff",
            Intent::SetLightBrightness => "setLightBrightness",
        }
    }

    /// Fully qualified name as registered with the NLU pipeline
    pub fn qualified_name(self) -> String {
        format!("{INTENT_NAMESPACE}:{}", self.name())
    }

    /// Intent whose service call is fired after this one succeeded.
    ///
    /// Compound intents toggle an automation first and then act on the
    /// light (or the opposite automation) for the same slots.
    pub fn companion(self) -> Option<Intent> {
        match self {
            Intent::KeepLightOn => Some(Intent::TurnOnLight),
            Intent::KeepLightOff => Some(Intent::TurnOffLight),
            Intent::EnableAutomatic => Some(Intent::EnableAutomaticOff),
            Intent::TurnOnLight
            | Intent::TurnOffLight
            | Intent::TurnOnAllLights
            | Intent::TurnOffAllLights
            | Intent::EnableAutomaticOff
            | Intent::SetLightBrightness => None,
        }
    }
}

/// Qualified names of every intent the skill registers with the NLU pipeline
pub fn registered_intents() -> Vec<String> {
    Intent::ALL.iter().map(|intent| intent.qualified_name()).collect()
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{INTENT_NAMESPACE}:{}", self.name())
    }
}

/// Error returned for intent names outside the handled set
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown intent: {0}")]
pub struct UnknownIntent(pub String);

impl FromStr for Intent {
    type Err = UnknownIntent;

    /// Parses a namespaced intent name (`s710:turnOnLight`)
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let name = s
            .strip_prefix(INTENT_NAMESPACE)
            .and_then(|rest| rest.strip_prefix(':'))
            .ok_or_else(|| UnknownIntent(s.to_string()))?;

        Intent::ALL
            .into_iter()
            .find(|intent| intent.name() == name)
            .ok_or_else(|| UnknownIntent(s.to_string()))
    }
}

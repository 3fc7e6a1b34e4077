//! Request and response types exchanged with the voice pipeline

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Locale of every spoken response
pub const LOCALE: &str = "de_DE";

/// A recognized intent delivered by the NLU pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentRequest {
    pub session_id: String,

    /// Location of the voice device that heard the command
    pub site_id: String,

    /// Namespaced intent name, e.g. `s710:turnOnLight`
    pub intent_name: String,

    /// Slot name to raw slot value
    #[serde(default)]
    pub slots: HashMap<String, String>,
}

impl IntentRequest {
    pub fn new(
        session_id: impl Into<String>,
        site_id: impl Into<String>,
        intent_name: impl Into<String>,
    ) -> Self {
        Self {
            session_id: session_id.into(),
            site_id: site_id.into(),
            intent_name: intent_name.into(),
            slots: HashMap::new(),
        }
    }

    #[must_use]
    pub fn with_slot(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.slots.insert(name.into(), value.into());
        self
    }
}

/// Completion signal handed back to the pipeline for speech output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Completion {
    pub session_id: String,
    pub site_id: String,
    pub intent_name: String,

    /// Text to speak, `None` for a silent completion
    pub message: Option<String>,

    pub locale: String,
}

impl Completion {
    /// Completion answering the given request
    pub fn for_request(request: &IntentRequest, message: Option<String>) -> Self {
        Self {
            session_id: request.session_id.clone(),
            site_id: request.site_id.clone(),
            intent_name: request.intent_name.clone(),
            message,
            locale: LOCALE.to_string(),
        }
    }
}

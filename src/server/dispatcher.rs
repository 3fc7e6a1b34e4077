//! Intent dispatcher
//!
//! Turns one [`IntentRequest`] into at most two hub service calls and a
//! [`Completion`]. The handler never fails: every problem ends up as a
//! spoken failure phrase.

use crate::client::HubClient;
use crate::config::SkillConfig;
use crate::intents::{self, Intent, ServiceCall, Slots};
use crate::server::models::{Completion, IntentRequest};
use tracing::{debug, error, instrument, warn};

/// Spoken when the action could not be carried out at all
pub const ACTION_FAILED_MESSAGE: &str = "Aktion konnte nicht durchgeführt werden";

/// Dispatches light intents to the hub
pub struct IntentDispatcher<'a, C> {
    config: &'a SkillConfig,
    client: C,
}

impl<'a, C: HubClient> IntentDispatcher<'a, C> {
    pub fn new(config: &'a SkillConfig, client: C) -> Self {
        Self { config, client }
    }

    /// Intent names to register with the NLU pipeline
    pub fn intent_list(&self) -> Vec<String> {
        intents::registered_intents()
    }

    /// Handle one intent.
    ///
    /// A failure of the first service call aborts with the generic failure
    /// phrase. For compound intents the companion call runs afterwards and
    /// its outcome alone selects the confirmation phrase.
    #[instrument(
        skip_all,
        fields(session_id = %request.session_id, intent = %request.intent_name)
    )]
    pub async fn handle(&self, request: &IntentRequest) -> Completion {
        let slots = Slots::from_map(&request.slots);
        let intent = request.intent_name.parse::<Intent>().ok();

        let resolved = intent.and_then(|intent| intents::resolve(intent, &slots, &request.site_id));
        let Some(call) = resolved else {
            error!("Service/service data could not be determined");
            return Completion::for_request(request, Some(ACTION_FAILED_MESSAGE.to_string()));
        };

        if !self.fire(&call).await {
            return Completion::for_request(request, Some(ACTION_FAILED_MESSAGE.to_string()));
        }

        let mut succeeded = true;

        if let Some(companion) = intent.and_then(Intent::companion) {
            succeeded = match intents::resolve(companion, &slots, &request.site_id) {
                Some(call) => self.fire(&call).await,
                None => false,
            };

            if !succeeded {
                warn!("Companion intent {companion} failed");
            }
        }

        Completion::for_request(request, self.confirmation(succeeded))
    }

    /// Fire a service call, reporting whether the hub accepted it
    async fn fire(&self, call: &ServiceCall) -> bool {
        debug!(
            "Firing service [{} -> {}] with [{:?}]",
            self.config.hass_host, call.endpoint, call.payload
        );

        match self.client.call_service(call).await {
            Ok(response) => response.is_success(),
            Err(e) => {
                warn!("Service {} failed: {e}", call.endpoint);
                false
            }
        }
    }

    fn confirmation(&self, succeeded: bool) -> Option<String> {
        if !self.config.enable_confirmation {
            return None;
        }

        Some(if succeeded {
            self.config.confirmation_success.clone()
        } else {
            self.config.confirmation_failure.clone()
        })
    }
}

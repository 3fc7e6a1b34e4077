//! Intent to service call resolution
//!
//! Pure mapping from an intent and its slots to the Home Assistant service
//! call that carries it out. Light-targeting intents pick their scope with a
//! fixed precedence: a named lamp beats a named room, and without either the
//! site of the originating voice device is used.

use crate::intents::service_call::{ServiceCall, ServiceEndpoint};
use crate::intents::slots::Slots;
use crate::intents::Intent;

/// Entity id of the hub group containing every light
pub const ALL_LIGHTS_GROUP: &str = "group.all_lights";

/// Scope a light-targeting intent acts on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target<'a> {
    Lamp(&'a str),
    Room(&'a str),
    Site(&'a str),
}

impl<'a> Target<'a> {
    fn select(slots: &'a Slots, site_id: &'a str) -> Self {
        if let Some(lamp) = slots.lamp_id.as_deref() {
            Target::Lamp(lamp)
        } else if let Some(room) = slots.room_id.as_deref() {
            Target::Room(room)
        } else {
            Target::Site(site_id)
        }
    }

    fn id(self) -> &'a str {
        match self {
            Target::Lamp(id) | Target::Room(id) | Target::Site(id) => id,
        }
    }
}

/// Resolve an intent to its service call.
///
/// Returns `None` when the slots do not allow a mapping; callers treat that
/// as a hard failure.
pub fn resolve(intent: Intent, slots: &Slots, site_id: &str) -> Option<ServiceCall> {
    let target = Target::select(slots, site_id);

    match intent {
        Intent::TurnOnLight => Some(switch_light(
            target,
            ServiceEndpoint::LightsOn,
            ServiceEndpoint::GroupOn,
        )),
        Intent::TurnOffLight => Some(switch_light(
            target,
            ServiceEndpoint::LightsOff,
            ServiceEndpoint::GroupOff,
        )),
        Intent::TurnOnAllLights => Some(all_lights(ServiceEndpoint::GroupOn)),
        Intent::TurnOffAllLights => Some(all_lights(ServiceEndpoint::GroupOff)),
        Intent::KeepLightOn => Some(automation(
            ServiceEndpoint::AutomationOff,
            "lights_off",
            target,
        )),
        Intent::KeepLightOff => Some(automation(
            ServiceEndpoint::AutomationOff,
            "lights_on",
            target,
        )),
        Intent::EnableAutomatic => Some(automation(
            ServiceEndpoint::AutomationOn,
            "lights_on",
            target,
        )),
        Intent::EnableAutomaticOff => Some(automation(
            ServiceEndpoint::AutomationOn,
            "lights_off",
            target,
        )),
        Intent::SetLightBrightness => set_light_brightness(slots),
    }
}

/// A lamp is addressed directly, rooms and sites through their light group
fn switch_light(
    target: Target<'_>,
    lamp_endpoint: ServiceEndpoint,
    group_endpoint: ServiceEndpoint,
) -> ServiceCall {
    match target {
        Target::Lamp(lamp) => ServiceCall::new(lamp_endpoint, format!("light.{lamp}")),
        Target::Room(scope) | Target::Site(scope) => {
            ServiceCall::new(group_endpoint, format!("group.lights_{scope}"))
        }
    }
}

fn all_lights(endpoint: ServiceEndpoint) -> ServiceCall {
    ServiceCall::new(endpoint, ALL_LIGHTS_GROUP)
}

/// Automations are named `automation.<kind>_<scope>` for every scope
fn automation(endpoint: ServiceEndpoint, kind: &str, target: Target<'_>) -> ServiceCall {
    ServiceCall::new(endpoint, format!("automation.{kind}_{}", target.id()))
}

fn set_light_brightness(slots: &Slots) -> Option<ServiceCall> {
    let lamp = slots.lamp_id.as_deref()?;
    let brightness = slots.brightness.as_deref()?;
    Some(
        ServiceCall::new(ServiceEndpoint::LightsOn, format!("light.{lamp}"))
            .with_brightness(brightness),
    )
}

//! Home Assistant lights skill
//!
//! Translates light control intents from a voice assistant into Home
//! Assistant REST service calls and answers with a short confirmation.
//!
//! # Flow
//!
//! - [`intents::Slots`] extracts and normalizes the slot values
//! - [`intents::resolve`] maps the intent to a [`intents::ServiceCall`]
//! - [`server::IntentDispatcher`] fires the call (and a companion call for
//!   compound intents) through a [`client::HubClient`]
//! - a [`server::Completion`] carries the phrase to speak

pub mod client;
pub mod config;
pub mod error;
pub mod intents;
pub mod logging;
pub mod server;

// Re-export main types for convenience
pub use config::SkillConfig;
pub use error::{Result, SkillError};
pub use intents::Intent;
pub use server::{Completion, IntentDispatcher, IntentRequest};

//! Intent handling entry points
//!
//! The dispatcher holds the request logic; `stdio` exposes it to a voice
//! pipeline over newline-delimited JSON.

pub mod dispatcher;
pub mod models;
pub mod stdio;

pub use dispatcher::{IntentDispatcher, ACTION_FAILED_MESSAGE};
pub use models::{Completion, IntentRequest, LOCALE};

//! Cross-domain message and effect plumbing.

pub mod messages;

pub use messages::{AppEvent, AppMessage, Effect, UpdateOutcome};

//! Top-level state and the message router.

use crate::common::{AppMessage, UpdateOutcome};
use crate::domains::{browse, detail};

/// Aggregate client state: one sub-state per screen domain.
#[derive(Debug, Clone, Default)]
pub struct App {
    pub browse: browse::BrowseState,
    pub detail: detail::DetailState,
}

impl App {
    /// Route a message to its domain's update function.
    pub fn update(&mut self, message: AppMessage) -> UpdateOutcome {
        match message {
            AppMessage::Browse(message) => browse::update(&mut self.browse, message),
            AppMessage::Detail(message) => detail::update(&mut self.detail, message),
        }
    }
}

//! Message routing between domains and the shell.
//!
//! Domain update functions are pure; anything that touches the network
//! or the navigation stack is described as data here and executed
//! outside the update loop.

use cinedex_model::MovieId;

use crate::domains::{browse, detail};

/// The main domain message router.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// Browse screen (search list + suggestions)
    Browse(browse::Message),
    /// Detail screen
    Detail(detail::Message),
}

impl From<browse::Message> for AppMessage {
    fn from(message: browse::Message) -> Self {
        AppMessage::Browse(message)
    }
}

impl From<detail::Message> for AppMessage {
    fn from(message: detail::Message) -> Self {
        AppMessage::Detail(message)
    }
}

/// Asynchronous work requested by an update, executed by the shell via
/// [`crate::Runtime`]. Each completed effect feeds one follow-up
/// message back into the update loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Committed search driving the primary result list.
    FetchSearch { query: String },
    /// Live-typing suggestion lookup, tagged with the query it was
    /// issued for so stale responses can be discarded.
    FetchSuggestions { query: String },
    /// Single-movie fetch for the detail screen.
    FetchDetails { id: MovieId },
}

/// Events routed to collaborators outside the update loop. The
/// navigation shell owns the screen stack; controllers only announce
/// where the user is going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// Navigate to the detail screen for the given movie.
    NavigateToDetail(MovieId),
}

/// Result of a domain update: effects to execute plus events to route.
#[derive(Debug, Default, PartialEq)]
pub struct UpdateOutcome {
    pub effects: Vec<Effect>,
    pub events: Vec<AppEvent>,
}

impl UpdateOutcome {
    /// An update with nothing to execute or route.
    pub fn none() -> Self {
        Self::default()
    }

    /// An update requesting a single effect.
    pub fn effect(effect: Effect) -> Self {
        Self {
            effects: vec![effect],
            events: Vec::new(),
        }
    }

    /// An update routing a single event.
    pub fn event(event: AppEvent) -> Self {
        Self {
            effects: Vec::new(),
            events: vec![event],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty() && self.events.is_empty()
    }
}

//! Browse domain: the searchable movie list.
//!
//! Owns the live (per-keystroke) query, the committed (last submitted)
//! query, the primary result list, and the suggestion overlay. The
//! screen's presentation is a pure function of [`BrowseState`].

pub mod messages;
pub mod suggestions;
pub mod types;
pub mod update;

pub use messages::Message;
pub use types::{BrowseState, LoadPhase};
pub use update::update;

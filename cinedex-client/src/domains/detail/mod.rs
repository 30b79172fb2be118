//! Detail domain: one fetched movie plus the synopsis expansion state.

pub mod messages;
pub mod types;
pub mod update;

pub use messages::Message;
pub use types::{DetailPhase, DetailState, HeightTransition, OverviewExpansion};
pub use update::update;

//! Screen controllers for the Cinedex catalog client.
//!
//! Two screens, modeled as independent domains with explicit state and
//! pure update functions: [`domains::browse`] (searchable movie list
//! with live-typing suggestions) and [`domains::detail`] (single movie
//! with an expandable synopsis).
//!
//! Updates never perform I/O. Each `update` call returns an
//! [`common::UpdateOutcome`] carrying the effects a shell must execute
//! (remote fetches, via [`runtime::Runtime`]) and the cross-domain
//! events it must route (navigation). Rendering and the navigation
//! stack itself are external collaborators.

pub mod app;
pub mod common;
pub mod domains;
pub mod runtime;

pub use app::App;
pub use common::{AppEvent, AppMessage, Effect, UpdateOutcome};
pub use runtime::Runtime;

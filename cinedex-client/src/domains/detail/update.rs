//! Detail domain update logic.

use crate::common::{Effect, UpdateOutcome};

use super::messages::Message;
use super::types::{DetailPhase, DetailState};

pub fn update(state: &mut DetailState, message: Message) -> UpdateOutcome {
    match message {
        Message::Mounted(id) => {
            // Fresh mount: previous record, expansion flag, and any
            // in-flight transition are discarded.
            *state = DetailState::default();
            state.phase = DetailPhase::Loading(id);
            UpdateOutcome::effect(Effect::FetchDetails { id })
        }

        Message::DetailsReceived { id, result } => {
            match &state.phase {
                DetailPhase::Loading(pending) if *pending == id => {}
                _ => {
                    tracing::debug!(%id, "details response for superseded mount discarded");
                    return UpdateOutcome::none();
                }
            }
            match result {
                Ok(details) => {
                    // Initial layout animates up from zero to the
                    // collapsed synopsis height.
                    let transition = state.overview.retarget(&details.overview);
                    state.transition = Some(transition);
                    state.phase = DetailPhase::Loaded(details);
                }
                Err(reason) => {
                    tracing::warn!(%id, %reason, "details fetch failed");
                    state.phase = DetailPhase::Failed(reason);
                }
            }
            UpdateOutcome::none()
        }

        Message::OverviewToggled => {
            // The toggle is only reachable once loaded.
            if let DetailPhase::Loaded(details) = &state.phase {
                let transition = state.overview.toggle(&details.overview);
                state.transition = Some(transition);
            }
            UpdateOutcome::none()
        }
    }
}

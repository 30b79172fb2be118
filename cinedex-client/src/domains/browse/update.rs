//! Browse domain update logic.

use crate::common::{AppEvent, Effect, UpdateOutcome};

use super::messages::Message;
use super::suggestions::{self, SuggestionPlan};
use super::types::{BrowseState, LoadPhase};

pub fn update(state: &mut BrowseState, message: Message) -> UpdateOutcome {
    match message {
        Message::Mounted => {
            // Initial committed search with the (empty) committed
            // query; the collaborator returns its default result set.
            state.primary = LoadPhase::Loading;
            UpdateOutcome::effect(Effect::FetchSearch {
                query: state.committed_query.clone(),
            })
        }

        Message::QueryChanged(text) => {
            state.live_query = text;
            match suggestions::plan(&state.live_query) {
                SuggestionPlan::Clear => {
                    state.suggestions.clear();
                    UpdateOutcome::none()
                }
                SuggestionPlan::Fetch(query) => {
                    UpdateOutcome::effect(Effect::FetchSuggestions { query })
                }
            }
        }

        Message::Submitted => {
            state.committed_query = state.live_query.clone();
            state.suggestions.clear();
            state.primary = LoadPhase::Loading;
            tracing::debug!(query = %state.committed_query, "search committed");
            UpdateOutcome::effect(Effect::FetchSearch {
                query: state.committed_query.clone(),
            })
        }

        Message::SuggestionsReceived { query, result } => {
            // Discard responses for anything but the current live
            // query; a slow lookup for an earlier keystroke must not
            // overwrite a newer one.
            if query != state.live_query {
                tracing::debug!(%query, live = %state.live_query, "stale suggestions discarded");
                return UpdateOutcome::none();
            }
            match result {
                Ok(list) => state.suggestions = suggestions::cap(list),
                // Suggestion failures are non-fatal; keep whatever is
                // showing and wait for the next keystroke.
                Err(reason) => tracing::warn!(%query, %reason, "suggestion lookup failed"),
            }
            UpdateOutcome::none()
        }

        Message::ResultsReceived { query, result } => {
            if query != state.committed_query {
                tracing::debug!(%query, committed = %state.committed_query, "stale results discarded");
                return UpdateOutcome::none();
            }
            match result {
                Ok(list) => {
                    state.results = list;
                    state.primary = LoadPhase::Loaded;
                }
                Err(reason) => {
                    tracing::warn!(%query, %reason, "committed search failed");
                    state.primary = LoadPhase::Failed(reason);
                }
            }
            UpdateOutcome::none()
        }

        Message::SuggestionSelected(movie) => {
            // Fills the input with the chosen title and navigates;
            // deliberately does not commit a new primary search.
            state.live_query = movie.title.clone();
            state.suggestions.clear();
            UpdateOutcome::event(AppEvent::NavigateToDetail(movie.id))
        }

        Message::ResultSelected(movie) => {
            UpdateOutcome::event(AppEvent::NavigateToDetail(movie.id))
        }
    }
}

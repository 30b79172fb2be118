//! Effect executor.
//!
//! The bridge between pure domain updates and the async gateway: each
//! [`Effect`] is performed against a [`CatalogProvider`] and folded
//! back into exactly one follow-up [`AppMessage`]. Errors never escape
//! here; they travel as message payloads so the state machines decide
//! what failure means.

use cinedex_core::CatalogProvider;

use crate::common::{AppMessage, Effect};
use crate::domains::{browse, detail};

/// Executes effects against a catalog provider.
#[derive(Debug, Clone)]
pub struct Runtime<P> {
    provider: P,
}

impl<P: CatalogProvider> Runtime<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Perform one effect to completion and return the follow-up
    /// message. Concurrent effects are the shell's concern; each call
    /// suspends only its own task.
    pub async fn perform(&self, effect: Effect) -> AppMessage {
        match effect {
            Effect::FetchSearch { query } => {
                let result = self
                    .provider
                    .search_movies(&query)
                    .await
                    .map_err(|error| error.to_string());
                browse::Message::ResultsReceived { query, result }.into()
            }
            Effect::FetchSuggestions { query } => {
                let result = self
                    .provider
                    .search_movies(&query)
                    .await
                    .map_err(|error| error.to_string());
                browse::Message::SuggestionsReceived { query, result }.into()
            }
            Effect::FetchDetails { id } => {
                let result = self
                    .provider
                    .movie_details(id)
                    .await
                    .map_err(|error| error.to_string());
                detail::Message::DetailsReceived { id, result }.into()
            }
        }
    }
}

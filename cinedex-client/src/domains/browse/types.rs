//! Browse domain state.

use cinedex_model::MovieSummary;

/// Lifecycle of the primary result list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadPhase {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// A committed search is outstanding.
    Loading,
    /// Results present (possibly empty).
    Loaded,
    /// The committed search failed; the reason is shown with a retry
    /// affordance instead of leaving the screen loading forever.
    Failed(String),
}

/// Browse screen state.
///
/// The query string has two concurrently tracked projections: the live
/// text (every keystroke) and the committed text (last submit). The
/// two result sets are fetched independently; suggestions overlay the
/// primary list and never filter it.
#[derive(Debug, Clone, Default)]
pub struct BrowseState {
    /// Search text as currently typed.
    pub live_query: String,
    /// Search text last explicitly submitted.
    pub committed_query: String,
    /// Primary result list, driven by the committed query.
    pub results: Vec<MovieSummary>,
    /// Suggestion overlay, driven by the live query. Capped at
    /// [`super::suggestions::SUGGESTION_LIMIT`].
    pub suggestions: Vec<MovieSummary>,
    /// Lifecycle of the primary list.
    pub primary: LoadPhase,
}

impl BrowseState {
    /// Rendering contract: the suggestion overlay is visible exactly
    /// when the suggestion set is non-empty.
    pub fn suggestions_visible(&self) -> bool {
        !self.suggestions.is_empty()
    }
}

//! Browse domain messages.

use cinedex_model::MovieSummary;

/// Browse domain messages.
///
/// `SuggestionsReceived` and `ResultsReceived` carry the query they
/// were issued for; responses that no longer match the corresponding
/// current query are discarded by the update function.
#[derive(Debug, Clone)]
pub enum Message {
    // User actions
    /// Screen mounted; kicks off the initial (empty-query) search.
    Mounted,
    /// Live query text changed (one message per keystroke).
    QueryChanged(String),
    /// Live query committed (submit).
    Submitted,
    /// A suggestion was tapped.
    SuggestionSelected(MovieSummary),
    /// A primary result row was tapped.
    ResultSelected(MovieSummary),

    // Gateway responses
    /// Suggestion lookup finished.
    SuggestionsReceived {
        query: String,
        result: Result<Vec<MovieSummary>, String>,
    },
    /// Committed search finished.
    ResultsReceived {
        query: String,
        result: Result<Vec<MovieSummary>, String>,
    },
}

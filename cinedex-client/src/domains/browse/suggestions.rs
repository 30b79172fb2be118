//! Suggestion policy for the live query.
//!
//! Logically separable from the rest of the browse domain: given the
//! live text, decide whether a lookup is warranted, and cap whatever
//! the catalog returns. No local re-ranking; collaborator order is
//! kept.

use cinedex_model::MovieSummary;

/// Maximum number of suggestions shown in the overlay.
pub const SUGGESTION_LIMIT: usize = 5;

/// Minimum live-query length (in chars) before a lookup is issued.
/// Shorter queries clear the overlay synchronously, keeping the first
/// keystroke from flooding the gateway.
pub const MIN_QUERY_CHARS: usize = 2;

/// What to do with the suggestion overlay after a keystroke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestionPlan {
    /// Clear the overlay without a remote call.
    Clear,
    /// Issue a lookup for this query.
    Fetch(String),
}

/// Decide the overlay's fate for the given live query.
pub fn plan(live_query: &str) -> SuggestionPlan {
    if live_query.chars().count() < MIN_QUERY_CHARS {
        SuggestionPlan::Clear
    } else {
        SuggestionPlan::Fetch(live_query.to_string())
    }
}

/// Truncate catalog results to the overlay cap, preserving order.
pub fn cap(mut results: Vec<MovieSummary>) -> Vec<MovieSummary> {
    results.truncate(SUGGESTION_LIMIT);
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use cinedex_model::MovieId;

    fn summaries(count: usize) -> Vec<MovieSummary> {
        (0..count)
            .map(|i| MovieSummary {
                id: MovieId(i as u64),
                title: format!("Movie {i}"),
                poster_path: None,
            })
            .collect()
    }

    #[test]
    fn short_queries_clear_without_fetching() {
        assert_eq!(plan(""), SuggestionPlan::Clear);
        assert_eq!(plan("i"), SuggestionPlan::Clear);
        // One char, even multibyte.
        assert_eq!(plan("é"), SuggestionPlan::Clear);
    }

    #[test]
    fn two_chars_or_more_fetch() {
        assert_eq!(plan("in"), SuggestionPlan::Fetch("in".into()));
        assert_eq!(plan("éé"), SuggestionPlan::Fetch("éé".into()));
    }

    #[test]
    fn cap_truncates_to_limit_in_order() {
        let capped = cap(summaries(8));
        assert_eq!(capped.len(), SUGGESTION_LIMIT);
        assert_eq!(capped[0].id, MovieId(0));
        assert_eq!(capped[4].id, MovieId(4));

        assert_eq!(cap(summaries(3)).len(), 3);
    }
}

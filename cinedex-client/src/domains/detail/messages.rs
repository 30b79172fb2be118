//! Detail domain messages.

use cinedex_model::{MovieDetails, MovieId};

/// Detail domain messages.
#[derive(Debug, Clone)]
pub enum Message {
    /// Screen mounted for the given movie; resets state and fetches.
    Mounted(MovieId),
    /// Single-movie fetch finished. Tagged with the requested id so a
    /// response for a superseded mount is discarded.
    DetailsReceived {
        id: MovieId,
        result: Result<MovieDetails, String>,
    },
    /// The synopsis expand/collapse button was tapped.
    OverviewToggled,
}

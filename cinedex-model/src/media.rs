//! Lightweight movie summaries for list and suggestion contexts.

use serde::{Deserialize, Serialize};

use crate::ids::MovieId;
use crate::image::{self, PosterSize};

/// Minimal catalog entry as returned by a free-text search.
///
/// Identity is `id`; two summaries with the same id describe the same
/// movie regardless of when they were fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieSummary {
    pub id: MovieId,
    pub title: String,
    pub poster_path: Option<String>,
}

impl MovieSummary {
    /// Displayable poster URL, or `None` when the catalog has no poster
    /// for this movie (in which case no image is rendered).
    pub fn poster_url(&self, image_base: &str, size: PosterSize) -> Option<String> {
        self.poster_path
            .as_deref()
            .map(|path| image::poster_url(image_base, size, path))
    }
}

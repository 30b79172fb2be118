//! Full catalog record for a single movie.

use serde::{Deserialize, Serialize};

use crate::ids::MovieId;
use crate::image::{self, PosterSize};

/// Genre tag attached to a movie, in the catalog's own order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: u64,
    pub name: String,
}

/// Full movie record fetched by identifier.
///
/// One instance lives per detail screen invocation, owned exclusively
/// by the detail controller and replaced wholesale on refetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetails {
    pub id: MovieId,
    pub title: String,
    #[serde(default)]
    pub overview: String,
    pub vote_average: f32,
    #[serde(default)]
    pub release_date: String,
    pub poster_path: Option<String>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    pub runtime: Option<u32>,
}

impl MovieDetails {
    /// Runtime in minutes, when present and non-zero. A zero runtime is
    /// treated as unknown and the line is omitted from display.
    pub fn runtime_minutes(&self) -> Option<u32> {
        match self.runtime {
            Some(0) | None => None,
            Some(minutes) => Some(minutes),
        }
    }

    /// Comma-joined genre names in catalog order, or `None` when the
    /// genre list is empty and the line is omitted.
    pub fn genre_line(&self) -> Option<String> {
        if self.genres.is_empty() {
            return None;
        }
        Some(
            self.genres
                .iter()
                .map(|genre| genre.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        )
    }

    /// Displayable poster URL, or `None` when the movie has no poster.
    pub fn poster_url(&self, image_base: &str, size: PosterSize) -> Option<String> {
        self.poster_path
            .as_deref()
            .map(|path| image::poster_url(image_base, size, path))
    }
}

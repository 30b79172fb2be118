//! Poster image URL construction.
//!
//! The catalog returns bare poster paths (e.g. `/abc123.jpg`); a
//! displayable URL is the image base joined with a size segment and the
//! path. Image loading itself is the presentation layer's concern.

use serde::{Deserialize, Serialize};

/// Default image base used when no override is configured.
pub const DEFAULT_IMAGE_BASE: &str = "https://image.tmdb.org/t/p";

/// Poster size segments understood by the image CDN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PosterSize {
    W92,
    W154,
    W185,
    W342,
    W500,
    W780,
    Original,
}

impl PosterSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            PosterSize::W92 => "w92",
            PosterSize::W154 => "w154",
            PosterSize::W185 => "w185",
            PosterSize::W342 => "w342",
            PosterSize::W500 => "w500",
            PosterSize::W780 => "w780",
            PosterSize::Original => "original",
        }
    }
}

/// Build a displayable poster URL from a bare poster path.
///
/// `poster_path` is expected to carry its leading slash, as returned by
/// the catalog.
pub fn poster_url(image_base: &str, size: PosterSize, poster_path: &str) -> String {
    format!("{}/{}{}", image_base, size.as_str(), poster_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn poster_url_joins_base_size_and_path() {
        let url = poster_url(DEFAULT_IMAGE_BASE, PosterSize::W500, "/abc123.jpg");
        assert_eq!(url, "https://image.tmdb.org/t/p/w500/abc123.jpg");
    }

    #[test]
    fn size_segments_match_cdn_names() {
        assert_eq!(PosterSize::W92.as_str(), "w92");
        assert_eq!(PosterSize::Original.as_str(), "original");
    }
}

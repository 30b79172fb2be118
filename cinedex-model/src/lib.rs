//! Shared data types for the Cinedex catalog client.
//!
//! Everything here is a plain value type deserialized from the remote
//! catalog's JSON responses. Instances are immutable once received and
//! superseded wholesale by the next fetch, never mutated in place.

pub mod details;
pub mod ids;
pub mod image;
pub mod media;

pub use details::{Genre, MovieDetails};
pub use ids::MovieId;
pub use image::PosterSize;
pub use media::MovieSummary;

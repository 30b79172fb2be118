//! Catalog provider seam.

mod tmdb;

pub use tmdb::TmdbProvider;

use async_trait::async_trait;
use cinedex_model::{MovieDetails, MovieId, MovieSummary};

use crate::error::Result;

/// The two query shapes the client issues against the remote catalog.
///
/// Implemented by the real HTTP gateway and by in-memory fakes in
/// tests; controllers only ever see this trait.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Free-text search. An empty query is permitted and returns the
    /// collaborator's default result set.
    async fn search_movies(&self, query: &str) -> Result<Vec<MovieSummary>>;

    /// Fetch the full record for a single movie by identifier.
    async fn movie_details(&self, id: MovieId) -> Result<MovieDetails>;
}

#[async_trait]
impl<P: CatalogProvider> CatalogProvider for &P {
    async fn search_movies(&self, query: &str) -> Result<Vec<MovieSummary>> {
        (**self).search_movies(query).await
    }

    async fn movie_details(&self, id: MovieId) -> Result<MovieDetails> {
        (**self).movie_details(id).await
    }
}

#[async_trait]
impl<P: CatalogProvider> CatalogProvider for std::sync::Arc<P> {
    async fn search_movies(&self, query: &str) -> Result<Vec<MovieSummary>> {
        (**self).search_movies(query).await
    }

    async fn movie_details(&self, id: MovieId) -> Result<MovieDetails> {
        (**self).movie_details(id).await
    }
}

//! Shared test support: an in-memory catalog provider that records
//! calls.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use cinedex_core::{CatalogProvider, ProviderError};
use cinedex_model::{Genre, MovieDetails, MovieId, MovieSummary};

/// In-memory stand-in for the remote catalog. Seeded per test with
/// canned search results and movie records; every search call is
/// recorded so tests can assert on gateway traffic.
#[derive(Default)]
pub struct FakeCatalog {
    search_results: Mutex<HashMap<String, Vec<MovieSummary>>>,
    movies: Mutex<HashMap<MovieId, MovieDetails>>,
    search_calls: Mutex<Vec<String>>,
    fail_search: Mutex<bool>,
}

impl FakeCatalog {
    pub fn with_search(self, query: &str, results: Vec<MovieSummary>) -> Self {
        self.search_results
            .lock()
            .unwrap()
            .insert(query.to_string(), results);
        self
    }

    pub fn with_movie(self, details: MovieDetails) -> Self {
        self.movies.lock().unwrap().insert(details.id, details);
        self
    }

    /// Make every subsequent search fail at the transport level.
    pub fn failing_search(self) -> Self {
        *self.fail_search.lock().unwrap() = true;
        self
    }

    pub fn search_calls(&self) -> Vec<String> {
        self.search_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CatalogProvider for FakeCatalog {
    async fn search_movies(&self, query: &str) -> Result<Vec<MovieSummary>, ProviderError> {
        self.search_calls.lock().unwrap().push(query.to_string());
        if *self.fail_search.lock().unwrap() {
            return Err(ProviderError::Api {
                status: 503,
                message: "catalog unavailable".into(),
            });
        }
        Ok(self
            .search_results
            .lock()
            .unwrap()
            .get(query)
            .cloned()
            .unwrap_or_default())
    }

    async fn movie_details(&self, id: MovieId) -> Result<MovieDetails, ProviderError> {
        self.movies
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or(ProviderError::NotFound(id))
    }
}

pub fn summary(id: u64, title: &str) -> MovieSummary {
    MovieSummary {
        id: MovieId(id),
        title: title.to_string(),
        poster_path: Some(format!("/poster-{id}.jpg")),
    }
}

pub fn summaries(count: usize) -> Vec<MovieSummary> {
    (0..count)
        .map(|i| summary(i as u64 + 1, &format!("Movie {}", i + 1)))
        .collect()
}

pub fn movie(id: u64, overview: &str) -> MovieDetails {
    MovieDetails {
        id: MovieId(id),
        title: format!("Movie {id}"),
        overview: overview.to_string(),
        vote_average: 7.5,
        release_date: "2010-07-15".to_string(),
        poster_path: Some(format!("/poster-{id}.jpg")),
        genres: vec![
            Genre { id: 28, name: "Action".into() },
            Genre { id: 878, name: "Science Fiction".into() },
        ],
        runtime: Some(148),
    }
}

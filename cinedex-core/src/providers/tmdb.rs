//! Reqwest-backed TMDB gateway.
//!
//! Two endpoints, consumed as-is:
//! `GET /search/movie?api_key=…&query=<text>` and
//! `GET /movie/<id>?api_key=…`. No retries, no caching; a failure is
//! returned to the caller exactly once.

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use async_trait::async_trait;
use cinedex_model::{MovieDetails, MovieId, MovieSummary};

use crate::config::TmdbConfig;
use crate::error::{ProviderError, Result};

/// Envelope around paged search results. Only the first page is ever
/// requested.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    results: Vec<MovieSummary>,
}

/// HTTP implementation of [`crate::CatalogProvider`].
#[derive(Debug, Clone)]
pub struct TmdbProvider {
    client: Client,
    config: TmdbConfig,
}

impl TmdbProvider {
    pub fn new(config: TmdbConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Build an endpoint URL under the configured API base.
    fn build_url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}/{}", self.config.api_base, path)
    }

    /// Issue a GET with the access credential attached and decode the
    /// body, mapping the collaborator's status codes onto the error
    /// taxonomy.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
        not_found: Option<MovieId>,
    ) -> Result<T> {
        let url = self.build_url(path);
        tracing::debug!(%url, "catalog request");

        let response = self
            .client
            .get(&url)
            .query(&[("api_key", self.config.api_key.as_str())])
            .query(query)
            .send()
            .await?;

        match (response.status(), not_found) {
            (StatusCode::OK, _) => {
                let body = response.text().await?;
                Ok(serde_json::from_str(&body)?)
            }
            (StatusCode::NOT_FOUND, Some(id)) => Err(ProviderError::NotFound(id)),
            (status, _) => {
                let message = response.text().await.unwrap_or_default();
                Err(ProviderError::Api {
                    status: status.as_u16(),
                    message,
                })
            }
        }
    }
}

#[async_trait]
impl crate::CatalogProvider for TmdbProvider {
    async fn search_movies(&self, query: &str) -> Result<Vec<MovieSummary>> {
        let response: SearchResponse = self
            .get_json("/search/movie", &[("query", query)], None)
            .await?;
        tracing::debug!(query, count = response.results.len(), "search results");
        Ok(response.results)
    }

    async fn movie_details(&self, id: MovieId) -> Result<MovieDetails> {
        let details: MovieDetails = self
            .get_json(&format!("/movie/{id}"), &[], Some(id))
            .await?;
        tracing::debug!(%id, title = %details.title, "movie details");
        Ok(details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> TmdbProvider {
        TmdbProvider::new(TmdbConfig::new("secret"))
    }

    #[test]
    fn build_url_joins_base_and_path() {
        let provider = provider();
        assert_eq!(
            provider.build_url("/search/movie"),
            "https://api.themoviedb.org/3/search/movie"
        );
        assert_eq!(
            provider.build_url("movie/27205"),
            "https://api.themoviedb.org/3/movie/27205"
        );
    }

    #[test]
    fn search_envelope_decodes_catalog_shape() {
        let body = r#"{
            "page": 1,
            "results": [
                { "id": 27205, "title": "Inception", "poster_path": "/inception.jpg" },
                { "id": 64956, "title": "Inception: The Cobol Job", "poster_path": null }
            ],
            "total_pages": 1,
            "total_results": 2
        }"#;
        let parsed: SearchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.results.len(), 2);
        assert_eq!(parsed.results[0].id, MovieId(27205));
        assert_eq!(parsed.results[1].poster_path, None);
    }

    #[test]
    fn malformed_body_maps_to_decode_error() {
        let parsed: std::result::Result<SearchResponse, _> =
            serde_json::from_str(r#"{ "results": "not a list" }"#);
        let error = ProviderError::from(parsed.unwrap_err());
        assert!(matches!(error, ProviderError::Decode(_)));
    }
}

//! Injected gateway configuration.
//!
//! The access credential is never hard-coded; it is supplied at startup
//! either directly or from the environment (`.env` files are honored
//! via dotenvy).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use cinedex_model::image::DEFAULT_IMAGE_BASE;

/// Default catalog API base.
pub const DEFAULT_API_BASE: &str = "https://api.themoviedb.org/3";

const API_KEY_VAR: &str = "TMDB_API_KEY";
const API_BASE_VAR: &str = "TMDB_API_BASE";
const IMAGE_BASE_VAR: &str = "TMDB_IMAGE_BASE";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing API key: set {API_KEY_VAR}")]
    MissingApiKey,
}

/// Process-wide gateway configuration, supplied at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TmdbConfig {
    /// Access credential for the remote catalog.
    pub api_key: String,
    /// Catalog API base, without a trailing slash.
    pub api_base: String,
    /// Image CDN base, without a trailing slash.
    pub image_base: String,
}

impl TmdbConfig {
    /// Build a configuration with the default service endpoints.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_base: DEFAULT_API_BASE.to_string(),
            image_base: DEFAULT_IMAGE_BASE.to_string(),
        }
    }

    /// Load configuration from the environment. A `.env` file in the
    /// working directory is loaded first when present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_key = lookup(API_KEY_VAR)
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;
        let mut config = Self::new(api_key);
        if let Some(base) = lookup(API_BASE_VAR) {
            config.api_base = base;
        }
        if let Some(base) = lookup(IMAGE_BASE_VAR) {
            config.image_base = base;
        }
        Ok(config)
    }
}

use cinedex_model::MovieId;
use thiserror::Error;

/// Failures surfaced by the remote catalog gateway.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Transport or connectivity failure.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Response body did not match the expected shape.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The identifier has no corresponding catalog item.
    #[error("movie {0} not found")]
    NotFound(MovieId),

    /// Any other non-success status from the collaborator.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
}

pub type Result<T> = std::result::Result<T, ProviderError>;

//! Error types for gallery operations.

use thiserror::Error;

use crate::graphql::GraphqlError;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GalleryError>;

/// Errors that can occur while talking to the gif backend.
#[derive(Debug, Error)]
pub enum GalleryError {
    /// The request never produced a response (DNS, TLS, fetch rejection...).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("backend returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The GraphQL layer reported one or more errors.
    #[error("graphql error: {}", join_messages(.0))]
    Graphql(Vec<GraphqlError>),

    /// A successful response did not carry the expected field.
    #[error("response is missing `{0}`")]
    MissingData(&'static str),

    #[error("malformed response: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Problems with the backend configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("endpoint must be an absolute http(s) URL, got {0:?}")]
    InvalidEndpoint(String),

    #[error("authentication type {0} requires {1}")]
    MissingCredential(&'static str, &'static str),

    #[error("unsupported authentication type {0:?}")]
    UnsupportedAuth(String),
}

fn join_messages(errors: &[GraphqlError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

//! Error types for search requests and configuration loading.

use std::path::PathBuf;

/// Anything that can go wrong between issuing a search and decoding its body.
/// The controller treats every variant the same way: log and hide.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("search endpoint returned HTTP {status}")]
    Status { status: u16 },

    #[error("malformed search response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error(transparent)]
    Url(#[from] url::ParseError),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("could not parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid base URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        source: url::ParseError,
    },
}

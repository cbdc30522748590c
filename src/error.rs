//! Error types for similar-posts
//!
//! Missing data (an empty collection, a corpus with no tags at all) is a
//! normal outcome and never surfaces here; errors are reserved for caller
//! mistakes such as invalid configuration.

use thiserror::Error;

/// Convenience result type for similar-posts operations
pub type Result<T> = std::result::Result<T, SimilarPostsError>;

#[derive(Debug, Error)]
pub enum SimilarPostsError {
    /// Configuration rejected at pipeline entry; values are never clamped
    #[error("invalid configuration: {field}: {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

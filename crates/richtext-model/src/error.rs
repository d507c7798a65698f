//! Error types for document construction.

/// Error while building a [`Document`](crate::Document) from JSON.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum DocumentError {
    /// JSON deserialization error.
    #[error("JSON error")]
    Json(#[from] serde_json::Error),
}

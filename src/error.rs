//! Error types for the ResilientDB client library.

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during client operations.
///
/// Transport failures never surface with their original shape; every public
/// operation wraps them into one of these variants with the underlying
/// message embedded.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Caller supplied a filter with zero keys. Detected locally, before
    /// any request is sent.
    #[error("filter object cannot be empty")]
    EmptyFilter,

    /// A commit envelope was sent but the service reported non-success,
    /// or the transport itself failed.
    #[error("commit transaction {kind} failed: {message}")]
    Commit { kind: String, message: String },

    /// A find request returned non-success or missing data, or the
    /// transport failed.
    #[error("get transactions failed: {0}")]
    Query(String),

    /// A find-by-id request returned non-success or missing data, or the
    /// transport failed.
    #[error("find by id failed: {0}")]
    FindById(String),

    /// The underlying HTTP client could not be constructed.
    #[error("configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// Returns the error message without the variant prefix.
    pub fn message(&self) -> String {
        match self {
            ClientError::EmptyFilter => "filter object cannot be empty".to_string(),
            ClientError::Commit { message, .. } => message.clone(),
            ClientError::Query(msg) => msg.clone(),
            ClientError::FindById(msg) => msg.clone(),
            ClientError::Config(msg) => msg.clone(),
        }
    }

    /// Returns the transaction kind if this is a commit failure.
    pub fn kind(&self) -> Option<&str> {
        match self {
            ClientError::Commit { kind, .. } => Some(kind),
            _ => None,
        }
    }

    /// Returns true if the filter was rejected locally as empty.
    pub fn is_empty_filter(&self) -> bool {
        matches!(self, ClientError::EmptyFilter)
    }

    /// Returns true if this is a commit failure.
    pub fn is_commit_failure(&self) -> bool {
        matches!(self, ClientError::Commit { .. })
    }

    /// Returns true if this is a query failure (find or find-by-id).
    pub fn is_query_failure(&self) -> bool {
        matches!(self, ClientError::Query(_) | ClientError::FindById(_))
    }
}

use crate::connectors::RemoteCallError;
use thiserror::Error;

/// Failures reading or writing the key-value store. Always absorbed by
/// the message store; they never reach the conversation flow.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
    #[error("Storage quota exceeded: {needed} bytes, limit {limit}")]
    QuotaExceeded { needed: usize, limit: usize },
    #[error("Corrupt payload under {key}: {reason}")]
    Corrupt { key: String, reason: String },
    #[error("Encode failed: {0}")]
    Encode(String),
}

/// A malformed pattern catalog. Raised once at construction, never at match time.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("Rule #{index} has non-positive priority")]
    NonPositivePriority { index: usize },
    #[error("Catalog must contain exactly one fallback rule, found {found}")]
    FallbackCount { found: usize },
    #[error("Rules #{first} and #{second} are identical")]
    DuplicateRule { first: usize, second: usize },
}

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("{0}")]
    Validation(String),
    #[error("A message is already being answered")]
    SessionBusy,
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Remote(#[from] RemoteCallError),
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

//! Error types for Vitrine

use thiserror::Error;

/// Main error type for Vitrine operations
#[derive(Error, Debug)]
pub enum VitrineError {
    /// Catalog resource could not be parsed
    #[error("Catalog parse error: {0}")]
    CatalogParse(#[from] serde_json::Error),

    /// Catalog content violates an invariant (empty image list, duplicate id)
    #[error("Catalog invalid: {0}")]
    CatalogInvalid(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// System clipboard was unavailable or rejected the write
    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

/// Error produced by a [`MessageTransport`](crate::contact::MessageTransport)
/// when a contact message cannot be delivered.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SendError {
    /// The transport rejected or failed to deliver the message
    #[error("Delivery failed: {0}")]
    Failed(String),

    /// The transport is not configured / reachable
    #[error("Transport unavailable: {0}")]
    Unavailable(String),
}

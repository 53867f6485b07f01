//! Error types for editor operations.

use thiserror::Error;

/// Result type for editor operations.
pub type EditorResult<T> = Result<T, EditorError>;

/// Errors that can occur in editor operations.
///
/// Internal store mutations never fail (they apply or no-op); these
/// variants cover the validated boundaries around the core.
#[derive(Debug, Error)]
pub enum EditorError {
    /// User-supplied input failed validation.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Document serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

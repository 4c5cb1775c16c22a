//! Error handling for the investment registry
//!
//! This module provides the error taxonomy shared by every registry
//! operation: lookup misses, logical-key conflicts, and storage failures.

use thiserror::Error;

/// Main error type for registry operations
#[derive(Error, Debug)]
pub enum RegistryError {
    /// The addressed record does not exist. Never retried.
    #[error("project not found: {id_root}")]
    NotFound { id_root: String },

    /// Creation would duplicate a logical business key.
    #[error("project with id_investasi '{id_investasi}' already exists")]
    Conflict { id_investasi: String },

    /// Storage or aggregation failure. The underlying message is passed
    /// through verbatim, not sanitized.
    #[error("{message}")]
    Internal { message: String },
}

impl RegistryError {
    pub fn not_found(id_root: impl Into<String>) -> Self {
        Self::NotFound {
            id_root: id_root.into(),
        }
    }

    pub fn conflict(id_investasi: impl Into<String>) -> Self {
        Self::Conflict {
            id_investasi: id_investasi.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict { .. })
    }
}

#[cfg(feature = "database")]
impl From<sqlx::Error> for RegistryError {
    fn from(err: sqlx::Error) -> Self {
        Self::Internal {
            message: err.to_string(),
        }
    }
}

/// Result type alias for registry operations
pub type RegistryResult<T> = Result<T, RegistryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RegistryError::not_found("P/19.02.022-001");
        assert_eq!(err.to_string(), "project not found: P/19.02.022-001");

        let err = RegistryError::conflict("INV-2025-001");
        assert_eq!(
            err.to_string(),
            "project with id_investasi 'INV-2025-001' already exists"
        );
    }

    #[test]
    fn test_internal_message_verbatim() {
        // Storage messages must survive untouched
        let err = RegistryError::internal("relation \"project_invest\" does not exist");
        assert_eq!(
            err.to_string(),
            "relation \"project_invest\" does not exist"
        );
    }

    #[test]
    fn test_classification() {
        assert!(RegistryError::not_found("x").is_not_found());
        assert!(!RegistryError::not_found("x").is_conflict());
        assert!(RegistryError::conflict("y").is_conflict());
    }
}

//! Contract error types for boards service
//!
//! These errors are transport-agnostic; the REST layer maps them to HTTP.

use thiserror::Error;

/// Kind of entity a lookup was made for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Board,
    Task,
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Board => f.write_str("Board"),
            Self::Task => f.write_str("Task"),
        }
    }
}

/// Boards service domain errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardsError {
    /// Board or task does not exist
    #[error("{resource} not found")]
    NotFound {
        /// Entity kind
        resource: Resource,
        /// Identifier that was looked up
        id: i32,
    },

    /// Storage backend failure (connection, constraint violation, ...)
    #[error("internal error: {detail}")]
    Internal {
        /// Driver message, only exposed to callers in development mode
        detail: String,
    },
}

impl BoardsError {
    pub fn board_not_found(id: i32) -> Self {
        Self::NotFound {
            resource: Resource::Board,
            id,
        }
    }

    pub fn task_not_found(id: i32) -> Self {
        Self::NotFound {
            resource: Resource::Task,
            id,
        }
    }

    /// Wrap a storage error, logging the full chain
    pub fn internal(error: anyhow::Error) -> Self {
        tracing::error!(error = ?error, "storage operation failed");
        Self::Internal {
            detail: format!("{error:#}"),
        }
    }
}

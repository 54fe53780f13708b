//! Error types for todo list operations.

use std::fmt::Display;

/// Broad category of a [`TodoListError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A value did not satisfy the todo item contract
    Type,
    /// An index did not address an existing position
    Index,
    /// Input could not be parsed at all
    Serialization,
}

/// Error type for todo list operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TodoListError {
    /// Value rejected at the dynamic boundary because it is not a todo
    #[error("can only add Todo objects: {0}")]
    InvalidItem(String),

    /// Index that is negative, fractional, non-finite or out of range
    #[error("invalid index: {index}")]
    InvalidIndex {
        /// Rendering of the offending index as the caller supplied it
        index: String,
    },

    /// Malformed JSON or a list document with the wrong shape
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl TodoListError {
    pub(crate) fn invalid_index(index: impl Display) -> Self {
        Self::InvalidIndex {
            index: index.to_string(),
        }
    }

    /// Returns the category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidItem(_) => ErrorKind::Type,
            Self::InvalidIndex { .. } => ErrorKind::Index,
            Self::Serialization(_) => ErrorKind::Serialization,
        }
    }
}

impl From<serde_json::Error> for TodoListError {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization(error.to_string())
    }
}

/// Result type for todo list operations.
pub type Result<T> = std::result::Result<T, TodoListError>;

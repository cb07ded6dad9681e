//! Error types for the todo list domain.

use crate::todo::TodoId;
use crate::todo_list::ListId;
use crate::validation::ValidationFailure;
use thiserror::Error;

/// Errors raised by direct data-model operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// Positional access past the end of a list
    #[error("index {index} out of range for a list of {len} todos")]
    IndexOutOfRange {
        /// Requested position
        index: usize,
        /// Current list length
        len: usize,
    },

    /// No todo with the given id
    #[error("todo {0} not found")]
    TodoNotFound(TodoId),
}

/// Reasons a command was rejected by the reducer.
///
/// A rejected command never changes state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// User-correctable input problems, one entry per failed rule
    #[error("validation failed: {}", join_messages(.0))]
    Validation(Vec<ValidationFailure>),

    /// The list id matches nothing in the session
    #[error("todo list {0} not found")]
    ListNotFound(ListId),

    /// The todo id matches nothing in the list
    #[error("todo {todo_id} not found in list {list_id}")]
    TodoNotFound {
        /// List that was searched
        list_id: ListId,
        /// Todo that was missing
        todo_id: TodoId,
    },
}

impl CommandError {
    /// True for the two not-found variants
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::ListNotFound(_) | Self::TodoNotFound { .. })
    }
}

fn join_messages(failures: &[ValidationFailure]) -> String {
    failures
        .iter()
        .map(|failure| failure.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

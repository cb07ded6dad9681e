//! # Todolists Core
//!
//! Domain model and business rules for session-backed todo lists.
//!
//! This crate is the functional core of the application: it owns no I/O and
//! knows nothing about HTTP or session stores.
//!
//! ## Core Concepts
//!
//! - **Todo**: a single task with a title and a done flag
//! - **`TodoList`**: an ordered, named collection of todos
//! - **`TodoLists`**: everything one session owns, persisted as a whole
//! - **Display order**: incomplete first, then title ignoring case
//! - **Reducer**: `(TodoLists, ListsAction) → Result<ListsEvent, CommandError>`
//!
//! ## Example
//!
//! ```
//! use todolists_core::{ListsAction, ListsReducer, Reducer, TodoLists};
//!
//! let mut state = TodoLists::new();
//! let reducer = ListsReducer::new();
//!
//! let event = reducer
//!     .reduce(&mut state, ListsAction::CreateList { title: "Groceries".into() })
//!     .unwrap();
//! assert_eq!(event.message(), "The todo list has been created");
//!
//! // Duplicate titles are rejected and leave the state unchanged
//! let rejected = reducer.reduce(&mut state, ListsAction::CreateList { title: "Groceries".into() });
//! assert!(rejected.is_err());
//! assert_eq!(state.len(), 1);
//! ```

pub mod error;
pub mod lists;
pub mod reducer;
pub mod sort;
pub mod todo;
pub mod todo_list;
pub mod validation;

// Re-export commonly used types
pub use error::{CommandError, ModelError};
pub use lists::TodoLists;
pub use reducer::{ListsAction, ListsEvent, ListsReducer, Reducer};
pub use sort::{sort_todo_lists, sort_todos, DisplayOrder};
pub use todo::{Todo, TodoId};
pub use todo_list::{ListId, TodoList};
pub use validation::{ValidationFailure, MAX_TITLE_LENGTH};

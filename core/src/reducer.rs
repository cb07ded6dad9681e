//! Command processing for a session's todo lists.
//!
//! Every mutation a route can make is expressed as a [`ListsAction`]. The
//! reducer validates the command, applies it to [`TodoLists`] in place and
//! reports what happened as a [`ListsEvent`]. Rejected commands leave the state
//! exactly as they found it.

use crate::error::CommandError;
use crate::lists::TodoLists;
use crate::todo::TodoId;
use crate::todo_list::ListId;
use crate::validation;
use serde::{Deserialize, Serialize};

/// The reducer abstraction: `(State, Action) → Result<Event, Error>`.
///
/// Reducers are deterministic and perform no I/O, which keeps all business
/// rules testable without an HTTP stack or a session store.
pub trait Reducer {
    /// The state this reducer operates on
    type State;

    /// The commands this reducer accepts
    type Action;

    /// What a successful command reports
    type Event;

    /// Why a command can be rejected
    type Error;

    /// Validates `action` and applies it to `state`.
    ///
    /// # Errors
    ///
    /// Returns `Self::Error` when the command is rejected. Implementations
    /// must leave `state` untouched in that case.
    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
    ) -> Result<Self::Event, Self::Error>;
}

/// Commands accepted by [`ListsReducer`]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListsAction {
    /// Create a new, empty list
    CreateList {
        /// Raw title as submitted
        title: String,
    },

    /// Rename an existing list
    RenameList {
        /// List to rename
        list_id: ListId,
        /// Raw title as submitted
        title: String,
    },

    /// Delete a list and all of its todos
    DeleteList {
        /// List to delete
        list_id: ListId,
    },

    /// Mark every todo of a list done
    CompleteAll {
        /// List to complete
        list_id: ListId,
    },

    /// Append a todo to a list
    AddTodo {
        /// Owning list
        list_id: ListId,
        /// Raw title as submitted
        title: String,
    },

    /// Flip a todo between done and undone
    ToggleTodo {
        /// Owning list
        list_id: ListId,
        /// Todo to toggle
        todo_id: TodoId,
    },

    /// Remove a todo from its list
    DeleteTodo {
        /// Owning list
        list_id: ListId,
        /// Todo to remove
        todo_id: TodoId,
    },
}

/// Facts reported by [`ListsReducer`] after a command succeeded
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListsEvent {
    /// A list was created
    ListCreated {
        /// Id assigned to the list
        list_id: ListId,
        /// Trimmed title
        title: String,
    },

    /// A list was renamed
    ListRenamed {
        /// Renamed list
        list_id: ListId,
        /// Trimmed new title
        title: String,
    },

    /// A list was deleted
    ListDeleted {
        /// Deleted list
        list_id: ListId,
        /// Its title
        title: String,
    },

    /// Every todo of a list was marked done
    AllCompleted {
        /// Completed list
        list_id: ListId,
    },

    /// A todo was appended
    TodoAdded {
        /// Owning list
        list_id: ListId,
        /// Id assigned to the todo
        todo_id: TodoId,
        /// Trimmed title
        title: String,
    },

    /// A todo changed done-state
    TodoToggled {
        /// Owning list
        list_id: ListId,
        /// Toggled todo
        todo_id: TodoId,
        /// Its title
        title: String,
        /// Done-state after the toggle
        done: bool,
    },

    /// A todo was removed
    TodoDeleted {
        /// Owning list
        list_id: ListId,
        /// Removed todo
        todo_id: TodoId,
        /// Its title
        title: String,
    },
}

impl ListsEvent {
    /// The confirmation shown to the user
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::ListCreated { .. } => "The todo list has been created".to_string(),
            Self::ListRenamed { .. } => "Todo title changed!".to_string(),
            Self::ListDeleted { .. } => "Todo list deleted.".to_string(),
            Self::AllCompleted { .. } => "Marked all tasks complete!".to_string(),
            Self::TodoAdded { .. } => "Task added to list!".to_string(),
            Self::TodoToggled {
                title, done: true, ..
            } => format!("\"{title}\" marked complete!"),
            Self::TodoToggled {
                title, done: false, ..
            } => format!("\"{title}\" marked incomplete!"),
            Self::TodoDeleted { title, .. } => format!("Removed \"{title}\"!"),
        }
    }
}

/// Reducer for a session's [`TodoLists`]
#[derive(Clone, Copy, Debug, Default)]
pub struct ListsReducer;

impl ListsReducer {
    /// Creates a new `ListsReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn create_list(state: &mut TodoLists, title: &str) -> Result<ListsEvent, CommandError> {
        let title = validation::new_list_title(title, state).map_err(CommandError::Validation)?;
        let list_id = state.create(title.clone());
        Ok(ListsEvent::ListCreated { list_id, title })
    }

    fn rename_list(
        state: &mut TodoLists,
        list_id: ListId,
        title: &str,
    ) -> Result<ListsEvent, CommandError> {
        if state.get(list_id).is_none() {
            return Err(CommandError::ListNotFound(list_id));
        }
        let title =
            validation::renamed_list_title(title, state).map_err(CommandError::Validation)?;
        let list = state
            .get_mut(list_id)
            .ok_or(CommandError::ListNotFound(list_id))?;
        list.set_title(title.clone());
        Ok(ListsEvent::ListRenamed { list_id, title })
    }

    fn delete_list(state: &mut TodoLists, list_id: ListId) -> Result<ListsEvent, CommandError> {
        let list = state
            .remove(list_id)
            .ok_or(CommandError::ListNotFound(list_id))?;
        Ok(ListsEvent::ListDeleted {
            list_id,
            title: list.title().to_string(),
        })
    }

    fn complete_all(state: &mut TodoLists, list_id: ListId) -> Result<ListsEvent, CommandError> {
        state
            .get_mut(list_id)
            .ok_or(CommandError::ListNotFound(list_id))?
            .mark_all_done();
        Ok(ListsEvent::AllCompleted { list_id })
    }

    fn add_todo(
        state: &mut TodoLists,
        list_id: ListId,
        title: &str,
    ) -> Result<ListsEvent, CommandError> {
        let list = state
            .get_mut(list_id)
            .ok_or(CommandError::ListNotFound(list_id))?;
        let title = validation::todo_title(title).map_err(CommandError::Validation)?;
        let todo_id = list.add(title.clone());
        Ok(ListsEvent::TodoAdded {
            list_id,
            todo_id,
            title,
        })
    }

    fn toggle_todo(
        state: &mut TodoLists,
        list_id: ListId,
        todo_id: TodoId,
    ) -> Result<ListsEvent, CommandError> {
        let todo = state
            .get_mut(list_id)
            .ok_or(CommandError::ListNotFound(list_id))?
            .find_by_id_mut(todo_id)
            .ok_or(CommandError::TodoNotFound { list_id, todo_id })?;
        let done = todo.toggle();
        Ok(ListsEvent::TodoToggled {
            list_id,
            todo_id,
            title: todo.title().to_string(),
            done,
        })
    }

    fn delete_todo(
        state: &mut TodoLists,
        list_id: ListId,
        todo_id: TodoId,
    ) -> Result<ListsEvent, CommandError> {
        let list = state
            .get_mut(list_id)
            .ok_or(CommandError::ListNotFound(list_id))?;
        let todo = list
            .remove(todo_id)
            .map_err(|_| CommandError::TodoNotFound { list_id, todo_id })?;
        Ok(ListsEvent::TodoDeleted {
            list_id,
            todo_id,
            title: todo.title().to_string(),
        })
    }
}

impl Reducer for ListsReducer {
    type State = TodoLists;
    type Action = ListsAction;
    type Event = ListsEvent;
    type Error = CommandError;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
    ) -> Result<Self::Event, Self::Error> {
        match action {
            ListsAction::CreateList { title } => Self::create_list(state, &title),
            ListsAction::RenameList { list_id, title } => {
                Self::rename_list(state, list_id, &title)
            }
            ListsAction::DeleteList { list_id } => Self::delete_list(state, list_id),
            ListsAction::CompleteAll { list_id } => Self::complete_all(state, list_id),
            ListsAction::AddTodo { list_id, title } => Self::add_todo(state, list_id, &title),
            ListsAction::ToggleTodo { list_id, todo_id } => {
                Self::toggle_todo(state, list_id, todo_id)
            }
            ListsAction::DeleteTodo { list_id, todo_id } => {
                Self::delete_todo(state, list_id, todo_id)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_messages_follow_new_state() {
        let complete = ListsEvent::TodoToggled {
            list_id: ListId::new(1),
            todo_id: TodoId::new(1),
            title: "Milk".to_string(),
            done: true,
        };
        assert_eq!(complete.message(), "\"Milk\" marked complete!");

        let incomplete = ListsEvent::TodoToggled {
            list_id: ListId::new(1),
            todo_id: TodoId::new(1),
            title: "Milk".to_string(),
            done: false,
        };
        assert_eq!(incomplete.message(), "\"Milk\" marked incomplete!");
    }

    #[test]
    fn delete_todo_message_names_title() {
        let event = ListsEvent::TodoDeleted {
            list_id: ListId::new(1),
            todo_id: TodoId::new(2),
            title: "Eggs".to_string(),
        };
        assert_eq!(event.message(), "Removed \"Eggs\"!");
    }
}

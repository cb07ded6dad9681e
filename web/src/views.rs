//! View documents rendered by the handlers.
//!
//! Every page is a JSON document. Lists and todos appear in display order
//! (incomplete first, then by title ignoring case).

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use todolists_core::{sort_todos, ListId, Todo, TodoId, TodoList, TodoLists, ValidationFailure};

/// One-shot notices carried across a redirect.
///
/// Stored in the session after a successful command and removed the next
/// time a page is rendered.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    /// Confirmation messages
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub success: Vec<String>,
    /// Error messages
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub error: Vec<String>,
}

impl Flash {
    /// Whether there is nothing to show
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.success.is_empty() && self.error.is_empty()
    }

    /// Add one error notice per failed validation rule
    #[must_use]
    pub fn with_failures(mut self, failures: &[ValidationFailure]) -> Self {
        self.error
            .extend(failures.iter().map(|failure| failure.message.clone()));
        self
    }
}

/// A list as shown in listings and page headers
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSummary {
    /// List id
    pub id: ListId,
    /// List title
    pub title: String,
    /// Non-empty and every todo done
    pub done: bool,
    /// Todos not yet done
    pub remaining: usize,
    /// Total todos
    pub size: usize,
}

impl From<&TodoList> for ListSummary {
    fn from(list: &TodoList) -> Self {
        Self {
            id: list.id(),
            title: list.title().to_string(),
            done: list.is_done(),
            remaining: list.remaining(),
            size: list.size(),
        }
    }
}

/// A todo row on the list page
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoView {
    /// Todo id
    pub id: TodoId,
    /// Todo title
    pub title: String,
    /// Done flag
    pub done: bool,
}

impl From<&Todo> for TodoView {
    fn from(todo: &Todo) -> Self {
        Self {
            id: todo.id(),
            title: todo.title().to_string(),
            done: todo.is_done(),
        }
    }
}

/// `GET /lists`
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ListsView {
    /// Lists in display order
    pub lists: Vec<ListSummary>,
    /// Pending notices
    #[serde(default, skip_serializing_if = "Flash::is_empty")]
    pub flash: Flash,
}

impl ListsView {
    /// Render every list of the session
    #[must_use]
    pub fn new(lists: &TodoLists, flash: Flash) -> Self {
        Self {
            lists: lists.sorted().into_iter().map(ListSummary::from).collect(),
            flash,
        }
    }
}

/// `GET /lists/new`, and the re-rendered form when creation fails
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct NewListView {
    /// Title as submitted, empty on first render
    pub todo_list_title: String,
    /// Failed validation rules
    #[serde(default)]
    pub errors: Vec<ValidationFailure>,
    /// Pending notices
    #[serde(default, skip_serializing_if = "Flash::is_empty")]
    pub flash: Flash,
}

/// `GET /lists/:list_id`, and the re-rendered page when adding a todo fails
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ListView {
    /// The list itself
    pub list: ListSummary,
    /// Todos in display order
    pub todos: Vec<TodoView>,
    /// Todo title as submitted, empty on first render
    #[serde(default)]
    pub todo_title: String,
    /// Failed validation rules
    #[serde(default)]
    pub errors: Vec<ValidationFailure>,
    /// Pending notices
    #[serde(default, skip_serializing_if = "Flash::is_empty")]
    pub flash: Flash,
}

impl ListView {
    /// Render `list` with no form input
    #[must_use]
    pub fn new(list: &TodoList, flash: Flash) -> Self {
        Self {
            list: ListSummary::from(list),
            todos: sort_todos(list).into_iter().map(TodoView::from).collect(),
            todo_title: String::new(),
            errors: Vec::new(),
            flash,
        }
    }

    /// Attach a rejected todo submission
    #[must_use]
    pub fn rejected(mut self, todo_title: String, errors: Vec<ValidationFailure>) -> Self {
        self.todo_title = todo_title;
        self.errors = errors;
        self
    }
}

/// `GET /lists/:list_id/edit`, and the re-rendered form when renaming fails
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EditListView {
    /// The list being edited
    pub list: ListSummary,
    /// Title in the form field
    pub todo_list_title: String,
    /// Failed validation rules
    #[serde(default)]
    pub errors: Vec<ValidationFailure>,
    /// Pending notices
    #[serde(default, skip_serializing_if = "Flash::is_empty")]
    pub flash: Flash,
}

impl EditListView {
    /// Render the form prefilled with the current title
    #[must_use]
    pub fn new(list: &TodoList, flash: Flash) -> Self {
        Self {
            list: ListSummary::from(list),
            todo_list_title: list.title().to_string(),
            errors: Vec::new(),
            flash,
        }
    }
}

/// Render a view as a 200 page
pub fn page<V: Serialize>(view: V) -> Response {
    Json(view).into_response()
}

/// Render a form view that failed validation
pub fn rejected_form<V: Serialize>(view: V) -> Response {
    (StatusCode::UNPROCESSABLE_ENTITY, Json(view)).into_response()
}

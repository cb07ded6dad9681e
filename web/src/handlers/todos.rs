//! Todo commands within a list.

use super::lists::{applied, list_path};
use crate::{
    extractors::{Dispatched, ListPath, TitleForm, TodoPath, TodoSession},
    views::{self, ListView},
    WebResult,
};
use axum::response::{IntoResponse, Redirect, Response};
use serde::Deserialize;
use todolists_core::ListsAction;

/// Body of the add-todo form
#[derive(Debug, Default, Deserialize)]
pub struct TodoForm {
    /// Submitted title, untrimmed
    #[serde(default)]
    pub todo_title: String,
}

/// `POST /lists/:list_id/todos`
pub async fn create_todo(
    mut session: TodoSession,
    ListPath(list_id): ListPath,
    TitleForm(form): TitleForm<TodoForm>,
) -> WebResult<Response> {
    let action = ListsAction::AddTodo {
        list_id,
        title: form.todo_title.clone(),
    };

    match session.dispatch(action).await? {
        Dispatched::Applied(event) => {
            tracing::info!(?event, "Todo added");
            Ok(Redirect::to(&list_path(list_id)).into_response())
        }
        Dispatched::Rejected(errors) => {
            let flash = session.take_flash().await?.with_failures(&errors);
            let view = ListView::new(session.list(list_id)?, flash).rejected(form.todo_title, errors);
            Ok(views::rejected_form(view))
        }
    }
}

/// `POST /lists/:list_id/todos/:todo_id/toggle`
pub async fn toggle_todo(
    mut session: TodoSession,
    TodoPath(list_id, todo_id): TodoPath,
) -> WebResult<Redirect> {
    let event = applied(
        session
            .dispatch(ListsAction::ToggleTodo { list_id, todo_id })
            .await?,
    )?;
    tracing::info!(?event, "Todo toggled");
    Ok(Redirect::to(&list_path(list_id)))
}

/// `POST /lists/:list_id/todos/:todo_id/destroy`
pub async fn destroy_todo(
    mut session: TodoSession,
    TodoPath(list_id, todo_id): TodoPath,
) -> WebResult<Redirect> {
    let event = applied(
        session
            .dispatch(ListsAction::DeleteTodo { list_id, todo_id })
            .await?,
    )?;
    tracing::info!(?event, "Todo deleted");
    Ok(Redirect::to(&list_path(list_id)))
}

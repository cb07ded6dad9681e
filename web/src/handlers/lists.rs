//! Todo list pages and commands.
//!
//! Successful commands redirect (303) so a browser refresh doesn't resubmit
//! the form. Rejected titles re-render the originating form with 422.

use crate::{
    error::AppError,
    extractors::{Dispatched, ListPath, TitleForm, TodoSession},
    views::{self, EditListView, ListView, ListsView, NewListView},
    WebResult,
};
use axum::response::{IntoResponse, Redirect, Response};
use serde::Deserialize;
use todolists_core::{CommandError, ListId, ListsAction, ListsEvent};

/// Body of the new-list and rename forms
#[derive(Debug, Default, Deserialize)]
pub struct ListForm {
    /// Submitted title, untrimmed
    #[serde(default)]
    pub todo_list_title: String,
}

pub(crate) fn list_path(list_id: ListId) -> String {
    format!("/lists/{list_id}")
}

/// Commands without form input can't fail validation.
pub(crate) fn applied(dispatched: Dispatched) -> Result<ListsEvent, AppError> {
    match dispatched {
        Dispatched::Applied(event) => Ok(event),
        Dispatched::Rejected(failures) => Err(CommandError::Validation(failures).into()),
    }
}

/// `GET /` redirects to the listing.
#[allow(clippy::unused_async)]
pub async fn index() -> Redirect {
    Redirect::to("/lists")
}

/// `GET /lists`
pub async fn list_lists(session: TodoSession) -> WebResult<Response> {
    let flash = session.take_flash().await?;
    Ok(views::page(ListsView::new(session.lists(), flash)))
}

/// `GET /lists/new`
pub async fn new_list(session: TodoSession) -> WebResult<Response> {
    let flash = session.take_flash().await?;
    Ok(views::page(NewListView {
        flash,
        ..NewListView::default()
    }))
}

/// `POST /lists`
pub async fn create_list(
    mut session: TodoSession,
    TitleForm(form): TitleForm<ListForm>,
) -> WebResult<Response> {
    let action = ListsAction::CreateList {
        title: form.todo_list_title.clone(),
    };

    match session.dispatch(action).await? {
        Dispatched::Applied(event) => {
            tracing::info!(?event, "Todo list created");
            Ok(Redirect::to("/lists").into_response())
        }
        Dispatched::Rejected(errors) => {
            let flash = session.take_flash().await?.with_failures(&errors);
            Ok(views::rejected_form(NewListView {
                todo_list_title: form.todo_list_title,
                errors,
                flash,
            }))
        }
    }
}

/// `GET /lists/:list_id`
pub async fn show_list(session: TodoSession, ListPath(list_id): ListPath) -> WebResult<Response> {
    let list = session.list(list_id)?;
    let flash = session.take_flash().await?;
    Ok(views::page(ListView::new(list, flash)))
}

/// `GET /lists/:list_id/edit`
pub async fn edit_list(session: TodoSession, ListPath(list_id): ListPath) -> WebResult<Response> {
    let list = session.list(list_id)?;
    let flash = session.take_flash().await?;
    Ok(views::page(EditListView::new(list, flash)))
}

/// `POST /lists/:list_id/edit`
pub async fn rename_list(
    mut session: TodoSession,
    ListPath(list_id): ListPath,
    TitleForm(form): TitleForm<ListForm>,
) -> WebResult<Response> {
    let action = ListsAction::RenameList {
        list_id,
        title: form.todo_list_title.clone(),
    };

    match session.dispatch(action).await? {
        Dispatched::Applied(event) => {
            tracing::info!(?event, "Todo list renamed");
            Ok(Redirect::to(&list_path(list_id)).into_response())
        }
        Dispatched::Rejected(errors) => {
            let flash = session.take_flash().await?.with_failures(&errors);
            let mut view = EditListView::new(session.list(list_id)?, flash);
            view.todo_list_title = form.todo_list_title;
            view.errors = errors;
            Ok(views::rejected_form(view))
        }
    }
}

/// `POST /lists/:list_id/destroy`
pub async fn destroy_list(
    mut session: TodoSession,
    ListPath(list_id): ListPath,
) -> WebResult<Redirect> {
    let event = applied(session.dispatch(ListsAction::DeleteList { list_id }).await?)?;
    tracing::info!(?event, "Todo list deleted");
    Ok(Redirect::to("/lists"))
}

/// `POST /lists/:list_id/complete_all`
pub async fn complete_all(
    mut session: TodoSession,
    ListPath(list_id): ListPath,
) -> WebResult<Redirect> {
    let event = applied(session.dispatch(ListsAction::CompleteAll { list_id }).await?)?;
    tracing::info!(?event, "All todos completed");
    Ok(Redirect::to(&list_path(list_id)))
}

//! Custom Axum extractors.
//!
//! - `TodoSession`: the session's todo lists plus its flash messages
//! - `ListPath` / `TodoPath`: numeric ids from the request path
//! - `TitleForm`: a url-encoded form body, empty when none was sent
//!
//! # Examples
//!
//! ```ignore
//! async fn handler(session: TodoSession, ListPath(list_id): ListPath) -> WebResult<Response> {
//!     let list = session.list(list_id)?;
//!     Ok(views::page(ListView::new(list, session.take_flash().await?)))
//! }
//! ```

use crate::{error::AppError, views::Flash};
use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::{header, request::Parts},
    Form,
};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use todolists_core::{
    CommandError, ListId, ListsAction, ListsEvent, ListsReducer, Reducer, TodoId, TodoList,
    TodoLists, ValidationFailure,
};
use tower_sessions::Session;

/// Session key holding the serialized [`TodoLists`]
pub const LISTS_KEY: &str = "todo_lists";

/// Session key holding the pending [`Flash`]
pub const FLASH_KEY: &str = "flash";

/// Result of dispatching a command against the session.
#[derive(Debug)]
pub enum Dispatched {
    /// The command was applied and persisted
    Applied(ListsEvent),
    /// The submitted title failed validation; nothing changed
    Rejected(Vec<ValidationFailure>),
}

/// The todo lists owned by the requesting session.
///
/// Rehydrated from the session store on extraction; an absent entry starts
/// as an empty collection. Changes are written back by [`TodoSession::dispatch`].
#[derive(Debug)]
pub struct TodoSession {
    session: Session,
    lists: TodoLists,
}

#[async_trait]
impl<S> FromRequestParts<S> for TodoSession
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(|(_, message)| AppError::internal(message))?;

        let lists = session
            .get::<TodoLists>(LISTS_KEY)
            .await?
            .unwrap_or_default();

        Ok(Self { session, lists })
    }
}

impl TodoSession {
    /// All lists of this session
    #[must_use]
    pub const fn lists(&self) -> &TodoLists {
        &self.lists
    }

    /// Look up one list, or 404
    ///
    /// # Errors
    ///
    /// Returns a not-found `AppError` when the session has no such list.
    pub fn list(&self, list_id: ListId) -> Result<&TodoList, AppError> {
        self.lists
            .get(list_id)
            .ok_or_else(|| CommandError::ListNotFound(list_id).into())
    }

    /// Run `action` through the reducer and persist the result.
    ///
    /// On success the event's confirmation is queued as a flash message.
    ///
    /// # Errors
    ///
    /// Not-found rejections become 404s; session store failures become 500s.
    pub async fn dispatch(&mut self, action: ListsAction) -> Result<Dispatched, AppError> {
        match ListsReducer::new().reduce(&mut self.lists, action) {
            Ok(event) => {
                self.session.insert(LISTS_KEY, &self.lists).await?;
                self.notify_success(event.message()).await?;
                Ok(Dispatched::Applied(event))
            }
            Err(CommandError::Validation(failures)) => Ok(Dispatched::Rejected(failures)),
            Err(err) => Err(err.into()),
        }
    }

    /// Remove and return the pending flash messages
    ///
    /// # Errors
    ///
    /// Fails when the session store is unavailable.
    pub async fn take_flash(&self) -> Result<Flash, AppError> {
        Ok(self
            .session
            .remove::<Flash>(FLASH_KEY)
            .await?
            .unwrap_or_default())
    }

    /// Queue a confirmation for the next rendered page
    ///
    /// # Errors
    ///
    /// Fails when the session store is unavailable.
    pub async fn notify_success(&self, message: impl Into<String>) -> Result<(), AppError> {
        let mut flash = self
            .session
            .get::<Flash>(FLASH_KEY)
            .await?
            .unwrap_or_default();
        flash.success.push(message.into());
        self.session.insert(FLASH_KEY, flash).await?;
        Ok(())
    }
}

/// `:list_id` path segment
#[derive(Debug, Clone, Copy)]
pub struct ListPath(pub ListId);

#[async_trait]
impl<S> FromRequestParts<S> for ListPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let params = path_params(parts, state).await?;
        let list_id = parse_param(&params, "list_id", parts)?;
        Ok(Self(list_id))
    }
}

/// `:list_id` and `:todo_id` path segments
#[derive(Debug, Clone, Copy)]
pub struct TodoPath(pub ListId, pub TodoId);

#[async_trait]
impl<S> FromRequestParts<S> for TodoPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let params = path_params(parts, state).await?;
        let list_id = parse_param(&params, "list_id", parts)?;
        let todo_id = parse_param(&params, "todo_id", parts)?;
        Ok(Self(list_id, todo_id))
    }
}

/// Url-encoded form body with `AppError` rejections.
///
/// A request without a `Content-Type` yields `T::default()`, so a bodyless
/// submission still reaches the not-found and "required" checks.
#[derive(Debug, Clone, Default)]
pub struct TitleForm<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for TitleForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default + Send,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !req.headers().contains_key(header::CONTENT_TYPE) {
            return Ok(Self(T::default()));
        }
        let Form(form) = Form::<T>::from_request(req, state).await?;
        Ok(Self(form))
    }
}

async fn path_params<S: Send + Sync>(
    parts: &mut Parts,
    state: &S,
) -> Result<HashMap<String, String>, AppError> {
    match Path::<HashMap<String, String>>::from_request_parts(parts, state).await {
        Ok(Path(params)) => Ok(params),
        Err(_) => Err(AppError::no_route(parts.uri.path())),
    }
}

/// Ids that don't parse as integers route to not-found.
fn parse_param<T: std::str::FromStr>(
    params: &HashMap<String, String>,
    name: &str,
    parts: &Parts,
) -> Result<T, AppError> {
    params
        .get(name)
        .and_then(|raw| raw.parse().ok())
        .ok_or_else(|| AppError::no_route(parts.uri.path()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::get, Router};
    use axum_test::TestServer;

    async fn show(TodoPath(list_id, todo_id): TodoPath) -> String {
        format!("{list_id}/{todo_id}")
    }

    fn server() -> TestServer {
        let app = Router::new().route("/lists/:list_id/todos/:todo_id", get(show));
        TestServer::new(app).expect("test server")
    }

    #[tokio::test]
    async fn test_todo_path_parses_ids() {
        let response = server().get("/lists/4/todos/9").await;
        response.assert_status_ok();
        response.assert_text("4/9");
    }

    #[tokio::test]
    async fn test_non_numeric_id_is_not_found() {
        let response = server().get("/lists/four/todos/9").await;
        response.assert_status(StatusCode::NOT_FOUND);
    }
}

//! HTTP shell for session-backed todo lists.
//!
//! This crate wires the functional core in `todolists-core` to Axum,
//! implementing the "Functional Core, Imperative Shell" pattern.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         Imperative Shell (Axum)         │  ← HTTP, forms, JSON views
//! │  - Session load / save                  │  ← Cookies, flash messages
//! │  - Response rendering                   │  ← Access logging
//! ├─────────────────────────────────────────┤
//! │         Functional Core                 │
//! │  - ListsReducer                         │  ← Validation, mutation
//! │  - Sorting                              │  ← No I/O, no side effects
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Request Flow
//!
//! 1. **HTTP Request** arrives at an Axum handler
//! 2. **Extract** the session's `TodoLists`, path ids, and form body
//! 3. **Build Action** from the extracted data
//! 4. **Reduce** the action against the session state
//! 5. **Persist** the state and queue a flash message
//! 6. **Respond** with a redirect, a re-rendered form, or an error
//!
//! # Example
//!
//! ```no_run
//! use todolists_web::{build_router, Config};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::from_env();
//! let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
//! axum::serve(listener, build_router(&config)).await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod views;

use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;

// Re-export key types for convenience
pub use config::Config;
pub use error::AppError;
pub use extractors::TodoSession;
pub use views::Flash;

/// Result type alias for web handlers.
pub type WebResult<T> = Result<T, AppError>;

/// Build the application router with session and tracing layers.
#[must_use]
pub fn build_router(config: &Config) -> Router {
    use handlers::{lists, todos};

    Router::new()
        .route("/", get(lists::index))
        .route("/health", get(handlers::health_check))
        .route("/lists", get(lists::list_lists).post(lists::create_list))
        .route("/lists/new", get(lists::new_list))
        .route("/lists/:list_id", get(lists::show_list))
        .route(
            "/lists/:list_id/edit",
            get(lists::edit_list).post(lists::rename_list),
        )
        .route("/lists/:list_id/destroy", post(lists::destroy_list))
        .route("/lists/:list_id/complete_all", post(lists::complete_all))
        .route("/lists/:list_id/todos", post(todos::create_todo))
        .route(
            "/lists/:list_id/todos/:todo_id/toggle",
            post(todos::toggle_todo),
        )
        .route(
            "/lists/:list_id/todos/:todo_id/destroy",
            post(todos::destroy_todo),
        )
        .fallback(handlers::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(middleware::trace_layer())
                .layer(middleware::session_layer(&config.session)),
        )
}

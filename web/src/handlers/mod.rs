//! HTTP request handlers.
//!
//! This module contains all HTTP handlers organized by resource.

pub mod health;
pub mod lists;
pub mod todos;

use crate::error::AppError;
use axum::http::Uri;

// Re-export common handler utilities
pub use health::health_check;

/// Fallback for paths no route matches.
#[allow(clippy::unused_async)]
pub async fn not_found(uri: Uri) -> AppError {
    AppError::no_route(uri.path())
}

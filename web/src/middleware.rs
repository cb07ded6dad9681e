//! Axum middleware for sessions and request logging.
//!
//! # Example
//!
//! ```ignore
//! use axum::Router;
//! use todolists_web::middleware::{session_layer, trace_layer};
//!
//! let app = Router::new()
//!     .route("/lists", get(list_lists))
//!     .layer(session_layer(&config.session))
//!     .layer(trace_layer());
//! ```

use crate::config::SessionConfig;
use tower_http::{
    classify::{ServerErrorsAsFailures, SharedClassifier},
    trace::TraceLayer,
};
use tower_sessions::{cookie::time::Duration, Expiry, MemoryStore, SessionManagerLayer};

/// Cookie-keyed sessions held in process memory.
///
/// The cookie is HTTP-only, scoped to `/`, and expires after
/// `max_age_days` without a request.
///
/// `MemoryStore` is a development store: sessions vanish on restart, and
/// expired records are never swept, so memory grows with every visitor.
#[must_use]
pub fn session_layer(config: &SessionConfig) -> SessionManagerLayer<MemoryStore> {
    SessionManagerLayer::new(MemoryStore::default())
        .with_name(config.cookie_name.clone())
        .with_secure(config.secure)
        .with_http_only(true)
        .with_path("/")
        .with_expiry(Expiry::OnInactivity(Duration::days(config.max_age_days)))
}

/// Access log: one span per request, logged by `tower_http::trace`.
#[must_use]
pub fn trace_layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
}

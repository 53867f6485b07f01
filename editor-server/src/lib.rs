//! # Pagecraft Editor Server Library
//!
//! Shared state and router assembly for the editor server.
//! This library is used by both the binary and integration tests.

use std::sync::{Arc, RwLock};

use axum::{
    routing::{get, post},
    Router,
};
use editor_core::EditorStore;

pub mod health;
pub mod metrics;
pub mod routes;
pub mod validation;

/// Shared application state.
#[derive(Clone, Default)]
pub struct AppState {
    /// The single editor store instance, serialized behind one lock.
    pub store: Arc<RwLock<EditorStore>>,
}

impl AppState {
    /// Create state around a fresh empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Run a closure against the store, recovering from lock poisoning the
    /// way a reader would expect: the last completed write wins.
    pub fn with_store<T>(&self, f: impl FnOnce(&mut EditorStore) -> T) -> T {
        let mut store = self
            .store
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        f(&mut store)
    }
}

/// Build the API router over the given state.
///
/// The binary layers CORS, request IDs, and tracing on top; tests drive
/// this router directly.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health/live", get(health::liveness))
        .route("/health/ready", get(health::readiness))
        .route("/health", get(health::readiness))
        .route("/api/ai/generate", post(routes::generate_handler))
        .route(
            "/api/document",
            get(routes::get_document).put(routes::replace_document),
        )
        .route("/api/document/undo", post(routes::undo_document))
        .route("/api/document/redo", post(routes::redo_document))
        .route("/api/document/clear", post(routes::clear_document))
        .route("/api/templates", get(routes::list_templates))
        .route("/api/templates/load", post(routes::load_template))
        .with_state(state)
}

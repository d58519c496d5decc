//! Shared state and HTTP API for the Linkhub server.

mod auth;
mod error;
mod routes;

pub use auth::{Authenticator, StaticToken, bearer_token};
pub use error::{ApiError, ApiResult};

use axum::Router;
use axum::http::HeaderMap;
use axum::routing::{get, post, put};
use linkhub_store::FileStore;
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// State shared by all request handlers.
pub struct AppState {
    store: FileStore,
    auth: Option<Box<dyn Authenticator>>,
    /// Serializes read-modify-write cycles so concurrent mutations in this
    /// process can't clobber each other's snapshots.
    write_lock: Mutex<()>,
}

impl AppState {
    /// Creates the shared state. With `auth` set to `None` the API is
    /// read-only: every mutating route answers 401 and private links stay
    /// hidden.
    #[must_use]
    pub fn new(store: FileStore, auth: Option<Box<dyn Authenticator>>) -> Self {
        Self {
            store,
            auth,
            write_lock: Mutex::new(()),
        }
    }

    pub(crate) fn is_admin(&self, headers: &HeaderMap) -> bool {
        match (&self.auth, auth::bearer_token(headers)) {
            (Some(auth), Some(token)) => auth.verify(token),
            _ => false,
        }
    }

    pub(crate) fn require_admin(&self, headers: &HeaderMap) -> Result<(), ApiError> {
        if self.is_admin(headers) {
            Ok(())
        } else {
            Err(ApiError::Unauthorized)
        }
    }
}

/// Build the HTTP API router with the given shared state.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .route(
            "/api/links",
            get(routes::list_links).post(routes::create_link),
        )
        .route("/api/links/reorder", post(routes::reorder_links))
        .route(
            "/api/links/{id}",
            put(routes::update_link).delete(routes::delete_link),
        )
        .route("/api/backup/export", get(routes::export_links))
        .route("/api/backup/import", post(routes::import_links))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// The UI is served from a different origin in development, so the API
// stays open to any origin.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods(tower_http::cors::Any)
        .allow_headers(tower_http::cors::Any)
}

//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        Method,
    },
    routing::get,
    Router,
};
use sqlx::PgPool;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::kernel::{BaseCorpus, PgCorpus};
use crate::server::routes::{health_handler, search_posts_handler};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub corpus: Arc<dyn BaseCorpus>,
}

impl AppState {
    /// State backed by the Postgres corpus.
    pub fn new(pool: PgPool) -> Self {
        Self {
            corpus: Arc::new(PgCorpus::new(pool.clone())),
            db_pool: pool,
        }
    }

    /// State over an injected corpus (tests swap in a mock here).
    pub fn with_corpus(pool: PgPool, corpus: Arc<dyn BaseCorpus>) -> Self {
        Self {
            db_pool: pool,
            corpus,
        }
    }
}

/// Build the Axum application router.
///
/// The search route is intentionally unauthenticated: the post
/// picker has open read access by contract.
pub fn build_app(state: AppState) -> Router {
    // CORS configuration - the picker runs inside the editor, which
    // may be served from another origin during development
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]);

    Router::new()
        .route("/rmlb/v1/search-posts", get(search_posts_handler))
        .route("/health", get(health_handler))
        .layer(Extension(state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

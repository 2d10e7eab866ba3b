use axum::{
    extract::{Extension, Query},
    Json,
};
use serde::Deserialize;

use crate::domains::search::{search_posts, SearchResponse};
use crate::server::app::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub search: String,
    pub page: Option<i64>,
}

/// Post picker endpoint: `GET /rmlb/v1/search-posts?search=...&page=N`
///
/// Returns up to five published posts matching the query plus the
/// total page count. A failed corpus read degrades to an empty result
/// set with `max_pages: 1` rather than surfacing an error to the
/// editor; the failure is logged for diagnostics.
pub async fn search_posts_handler(
    Extension(state): Extension<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<SearchResponse> {
    match search_posts(state.corpus.as_ref(), &params.search, params.page).await {
        Ok(response) => Json(response),
        Err(e) => {
            tracing::error!(error = %e, search = %params.search, "Post search failed");
            Json(SearchResponse::degraded())
        }
    }
}

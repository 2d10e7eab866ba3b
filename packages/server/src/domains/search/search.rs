//! Interactive post search backing the block editor's post picker.
//!
//! Single-page request/response: a free-text query and a 1-based page
//! number yield up to five published posts plus the total page count.
//! A purely numeric query is treated as an exact-ID lookup, which
//! means a post titled "2024" cannot be found by text search; the
//! picker depends on this for its "paste an ID" flow.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::common::PostId;
use crate::domains::posts::PostSummary;
use crate::kernel::BaseCorpus;

/// Results per picker page.
pub const SEARCH_PAGE_SIZE: u32 = 5;

/// One row of the picker's result list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostPick {
    pub id: PostId,
    pub title: String,
    pub link: String,
}

impl From<PostSummary> for PostPick {
    fn from(post: PostSummary) -> Self {
        Self {
            id: post.id,
            title: post.title,
            link: post.link,
        }
    }
}

/// Response body for the picker endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub posts: Vec<PostPick>,
    pub max_pages: u64,
}

impl SearchResponse {
    /// The degraded response served when the corpus is unreachable:
    /// no results, one page. Observably a success, per the picker's
    /// contract.
    pub fn degraded() -> Self {
        Self {
            posts: Vec::new(),
            max_pages: 1,
        }
    }
}

/// The selection record the editor persists as block attributes, and
/// renders as a link when present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostSelection {
    pub post_id: PostId,
    pub post_title: String,
    pub post_link: String,
}

impl From<PostPick> for PostSelection {
    fn from(pick: PostPick) -> Self {
        Self {
            post_id: pick.id,
            post_title: pick.title,
            post_link: pick.link,
        }
    }
}

/// Strip control characters and surrounding whitespace from a raw
/// query before it reaches the corpus.
fn sanitize_query(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_control())
        .collect::<String>()
        .trim()
        .to_string()
}

fn is_numeric(query: &str) -> bool {
    !query.is_empty() && query.chars().all(|c| c.is_ascii_digit())
}

/// Search published posts for the picker.
///
/// `page` defaults to 1 when absent or less than 1. `max_pages` is
/// `ceil(total / 5)`, so a query with no matches reports zero pages.
pub async fn search_posts(
    corpus: &dyn BaseCorpus,
    raw_query: &str,
    page: Option<i64>,
) -> Result<SearchResponse> {
    let query = sanitize_query(raw_query);
    let page = page.unwrap_or(1).max(1) as u32;

    // Numeric query: restrict to the post with that exact ID.
    if is_numeric(&query) {
        let posts = match query.parse::<PostId>() {
            Ok(id) => corpus
                .find_published_by_id(id)
                .await?
                .map(PostPick::from)
                .into_iter()
                .collect(),
            // Overflows i64; no post can have this ID.
            Err(_) => Vec::new(),
        };
        let max_pages = if posts.is_empty() { 0 } else { 1 };
        // Pages past the single result are empty but keep the count.
        let posts = if page > 1 { Vec::new() } else { posts };
        return Ok(SearchResponse { posts, max_pages });
    }

    let result = corpus.search(&query, page, SEARCH_PAGE_SIZE).await?;
    let max_pages = result.total.div_ceil(u64::from(SEARCH_PAGE_SIZE));

    Ok(SearchResponse {
        posts: result.posts.into_iter().map(PostPick::from).collect(),
        max_pages,
    })
}

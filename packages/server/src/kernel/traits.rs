// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Business logic (like the marker scan) lives in domain functions
// that use these traits.
//
// Naming convention: Base* for trait names (e.g., BaseCorpus)

use anyhow::Result;
use async_trait::async_trait;

use crate::common::{DateRange, PostId};
use crate::domains::posts::{PostStatus, PostSummary};

// =============================================================================
// Corpus Trait (Infrastructure - read-only post store access)
// =============================================================================

/// Constraints for one page of a corpus traversal.
#[derive(Debug, Clone)]
pub struct PageFilter {
    pub status: PostStatus,
    pub range: DateRange,
    /// Best-effort text-match hint. A PREFILTER only: the store may
    /// match it against titles or excerpts as well as content, so a
    /// returned post is not guaranteed to contain the hint in its
    /// body.
    pub text_hint: Option<String>,
}

impl PageFilter {
    /// Published posts in `range`, optionally narrowed by a text hint.
    pub fn published(range: DateRange, text_hint: Option<String>) -> Self {
        Self {
            status: PostStatus::Publish,
            range,
            text_hint,
        }
    }
}

/// One page of interactive search results plus the total match count.
#[derive(Debug, Clone)]
pub struct SearchPage {
    pub posts: Vec<PostSummary>,
    pub total: u64,
}

impl SearchPage {
    pub fn empty() -> Self {
        Self {
            posts: Vec::new(),
            total: 0,
        }
    }
}

/// Read-only access to the external post store.
///
/// Every method is a fresh read against the store; implementations
/// must not serve results from a cache. Nothing here mutates the
/// corpus.
#[async_trait]
pub trait BaseCorpus: Send + Sync {
    /// Fetch one page of posts matching `filter`.
    ///
    /// `page_index` is 1-based. A page shorter than `page_size` means
    /// the traversal is exhausted; implementations never owe a total
    /// count for paged traversals.
    async fn query_page(
        &self,
        filter: &PageFilter,
        page_index: u32,
        page_size: u32,
    ) -> Result<Vec<PostSummary>>;

    /// The authoritative stored content body for one post, read
    /// directly from the store (never a cached copy). `None` when the
    /// post does not exist.
    async fn content(&self, id: PostId) -> Result<Option<String>>;

    /// Look up a single published post by identifier.
    async fn find_published_by_id(&self, id: PostId) -> Result<Option<PostSummary>>;

    /// Free-text search over published posts: up to `per_page` results
    /// for the given 1-based `page`, plus the total match count.
    async fn search(&self, query: &str, page: u32, per_page: u32) -> Result<SearchPage>;
}

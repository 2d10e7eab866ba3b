// Mock implementations for testing
//
// Provides an in-memory corpus that can be injected wherever a
// BaseCorpus is expected. Calls are recorded so tests can assert on
// request counts, not just results.

use anyhow::Result;
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use std::str::FromStr;
use std::sync::{Arc, Mutex};

use crate::common::PostId;
use crate::domains::posts::{PostStatus, PostSummary};
use crate::kernel::traits::{BaseCorpus, PageFilter, SearchPage};

// =============================================================================
// Mock Corpus
// =============================================================================

/// A post seeded into the mock corpus.
#[derive(Debug, Clone)]
pub struct MockPost {
    pub id: PostId,
    pub title: String,
    pub link: String,
    pub excerpt: String,
    pub content: String,
    pub status: PostStatus,
    pub published_at: NaiveDate,
}

impl MockPost {
    /// A published post dated today with empty body fields.
    pub fn new(id: i64, title: &str) -> Self {
        Self {
            id: PostId(id),
            title: title.to_string(),
            link: format!("https://example.org/?p={}", id),
            excerpt: String::new(),
            content: String::new(),
            status: PostStatus::Publish,
            published_at: Utc::now().date_naive(),
        }
    }

    pub fn content(mut self, content: &str) -> Self {
        self.content = content.to_string();
        self
    }

    pub fn excerpt(mut self, excerpt: &str) -> Self {
        self.excerpt = excerpt.to_string();
        self
    }

    pub fn status(mut self, status: PostStatus) -> Self {
        self.status = status;
        self
    }

    /// Set the publish date from a `YYYY-MM-DD` string (panics on bad
    /// input; this is test scaffolding).
    pub fn published_on(mut self, date: &str) -> Self {
        self.published_at = NaiveDate::from_str(date).expect("valid test date");
        self
    }

    fn summary(&self) -> PostSummary {
        PostSummary {
            id: self.id,
            title: self.title.clone(),
            link: self.link.clone(),
            status: self.status.to_string(),
            published_at: self.published_at,
        }
    }

    /// Case-insensitive hint match over title, excerpt, and content -
    /// the same imprecision the real prefilter has.
    fn matches_hint(&self, hint: &str) -> bool {
        let hint = hint.to_lowercase();
        self.title.to_lowercase().contains(&hint)
            || self.excerpt.to_lowercase().contains(&hint)
            || self.content.to_lowercase().contains(&hint)
    }
}

/// Arguments captured from a query_page call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageCallArgs {
    pub page_index: u32,
    pub page_size: u32,
}

pub struct MockCorpus {
    posts: Vec<MockPost>,
    fail_all: bool,
    page_calls: Arc<Mutex<Vec<PageCallArgs>>>,
    content_calls: Arc<Mutex<Vec<PostId>>>,
    search_calls: Arc<Mutex<Vec<String>>>,
}

impl MockCorpus {
    pub fn new() -> Self {
        Self {
            posts: Vec::new(),
            fail_all: false,
            page_calls: Arc::new(Mutex::new(Vec::new())),
            content_calls: Arc::new(Mutex::new(Vec::new())),
            search_calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A corpus whose every call fails, for transport-failure paths.
    pub fn failing() -> Self {
        Self {
            fail_all: true,
            ..Self::new()
        }
    }

    pub fn with_post(mut self, post: MockPost) -> Self {
        self.posts.push(post);
        self
    }

    /// Get all recorded page requests with their arguments
    pub fn page_calls(&self) -> Vec<PageCallArgs> {
        self.page_calls.lock().unwrap().clone()
    }

    /// Get all post IDs whose content was fetched
    pub fn content_calls(&self) -> Vec<PostId> {
        self.content_calls.lock().unwrap().clone()
    }

    /// Get all recorded search queries
    pub fn search_calls(&self) -> Vec<String> {
        self.search_calls.lock().unwrap().clone()
    }

    /// Total number of corpus requests of any kind
    pub fn total_requests(&self) -> usize {
        self.page_calls.lock().unwrap().len()
            + self.content_calls.lock().unwrap().len()
            + self.search_calls.lock().unwrap().len()
    }

    fn check_failure(&self) -> Result<()> {
        if self.fail_all {
            anyhow::bail!("mock corpus configured to fail");
        }
        Ok(())
    }
}

impl Default for MockCorpus {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseCorpus for MockCorpus {
    async fn query_page(
        &self,
        filter: &PageFilter,
        page_index: u32,
        page_size: u32,
    ) -> Result<Vec<PostSummary>> {
        self.page_calls.lock().unwrap().push(PageCallArgs {
            page_index,
            page_size,
        });
        self.check_failure()?;

        let mut matching: Vec<&MockPost> = self
            .posts
            .iter()
            .filter(|p| p.status == filter.status)
            .filter(|p| filter.range.contains(p.published_at))
            .filter(|p| match &filter.text_hint {
                Some(hint) => p.matches_hint(hint),
                None => true,
            })
            .collect();
        matching.sort_by_key(|p| (p.published_at, p.id));

        let start = (page_index.saturating_sub(1) as usize) * page_size as usize;
        let page = matching
            .into_iter()
            .skip(start)
            .take(page_size as usize)
            .map(MockPost::summary)
            .collect();

        Ok(page)
    }

    async fn content(&self, id: PostId) -> Result<Option<String>> {
        self.content_calls.lock().unwrap().push(id);
        self.check_failure()?;

        Ok(self
            .posts
            .iter()
            .find(|p| p.id == id)
            .map(|p| p.content.clone()))
    }

    async fn find_published_by_id(&self, id: PostId) -> Result<Option<PostSummary>> {
        self.search_calls.lock().unwrap().push(id.to_string());
        self.check_failure()?;

        Ok(self
            .posts
            .iter()
            .find(|p| p.id == id && p.status == PostStatus::Publish)
            .map(MockPost::summary))
    }

    async fn search(&self, query: &str, page: u32, per_page: u32) -> Result<SearchPage> {
        self.search_calls.lock().unwrap().push(query.to_string());
        self.check_failure()?;

        let mut matching: Vec<&MockPost> = self
            .posts
            .iter()
            .filter(|p| p.status == PostStatus::Publish)
            .filter(|p| p.matches_hint(query))
            .collect();
        // Newest first, like the production corpus.
        matching.sort_by_key(|p| std::cmp::Reverse((p.published_at, p.id)));

        let total = matching.len() as u64;
        let start = (page.saturating_sub(1) as usize) * per_page as usize;
        let posts = matching
            .into_iter()
            .skip(start)
            .take(per_page as usize)
            .map(MockPost::summary)
            .collect();

        Ok(SearchPage { posts, total })
    }
}

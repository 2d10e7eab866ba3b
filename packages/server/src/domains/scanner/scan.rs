//! Marker scan over the post corpus.
//!
//! Finds published posts whose stored content embeds the read-more
//! block's opening signature, within an inclusive date range. The
//! corpus is visited in fixed-size pages; the text hint narrows each
//! page cheaply and an authoritative per-post content check corrects
//! for the hint's imprecision.
//!
//! The scan is stateless across invocations: every run starts at page
//! 1 and walks to exhaustion.

use std::collections::VecDeque;
use std::sync::Arc;

use thiserror::Error;

use crate::common::{DateRange, DateRangeError, PostId};
use crate::kernel::{BaseCorpus, PageFilter};

/// Opening signature the block serializer writes into post content.
pub const BLOCK_SIGNATURE: &str = "<!-- wp:create-block/read-more-link-block";

/// Posts fetched per page request during a scan.
pub const SCAN_PAGE_SIZE: u32 = 100;

#[derive(Debug, Error)]
pub enum ScanError {
    /// Malformed or inverted date bounds. Raised before any corpus
    /// request is issued.
    #[error(transparent)]
    InvalidInput(#[from] DateRangeError),

    #[error("corpus request failed: {0}")]
    Corpus(#[from] anyhow::Error),
}

/// A lazy, finite, non-restartable sequence of IDs of published posts
/// whose content contains the marker.
///
/// Pull IDs with [`next_id`](Self::next_id); the scan fetches corpus
/// pages on demand and buffers verified IDs from the current page.
/// Emission order is ascending page order, discovery order within a
/// page.
pub struct MarkerScan {
    corpus: Arc<dyn BaseCorpus>,
    filter: PageFilter,
    marker: String,
    page_size: u32,
    next_page: u32,
    pending: VecDeque<PostId>,
    exhausted: bool,
}

impl MarkerScan {
    /// Scan `range` for posts containing `marker`.
    pub fn new(corpus: Arc<dyn BaseCorpus>, range: DateRange, marker: &str) -> Self {
        Self {
            filter: PageFilter::published(range, Some(marker.to_string())),
            corpus,
            marker: marker.to_string(),
            page_size: SCAN_PAGE_SIZE,
            next_page: 1,
            pending: VecDeque::new(),
            exhausted: false,
        }
    }

    /// Build a scan from optional `YYYY-MM-DD` bound strings, applying
    /// the default 30-day window for missing bounds.
    ///
    /// Fails fast on an unparseable or inverted bound; no corpus
    /// request is issued in that case.
    pub fn over(
        corpus: Arc<dyn BaseCorpus>,
        date_after: Option<&str>,
        date_before: Option<&str>,
        marker: &str,
    ) -> Result<Self, ScanError> {
        let range = DateRange::parse(date_after, date_before)?;
        Ok(Self::new(corpus, range, marker))
    }

    /// Override the page size (page requests scale inversely; the
    /// emitted sequence is unchanged).
    pub fn page_size(mut self, size: u32) -> Self {
        self.page_size = size.max(1);
        self
    }

    /// The date range this scan covers.
    pub fn range(&self) -> DateRange {
        self.filter.range
    }

    /// Next matching post ID, or `None` once the corpus is exhausted.
    ///
    /// Termination: a page returning fewer rows than the page size
    /// marks the traversal exhausted without a trailing empty request.
    pub async fn next_id(&mut self) -> Result<Option<PostId>, ScanError> {
        loop {
            if let Some(id) = self.pending.pop_front() {
                return Ok(Some(id));
            }
            if self.exhausted {
                return Ok(None);
            }

            let page = self
                .corpus
                .query_page(&self.filter, self.next_page, self.page_size)
                .await?;
            self.next_page += 1;
            if (page.len() as u32) < self.page_size {
                self.exhausted = true;
            }

            for post in &page {
                // The hint may have matched on title or excerpt; only
                // an authoritative content read decides.
                let content = self.corpus.content(post.id).await?;
                if content.is_some_and(|body| body.contains(&self.marker)) {
                    self.pending.push_back(post.id);
                }
            }
        }
    }

    /// Drain the scan into a vector, preserving emission order.
    pub async fn collect_ids(mut self) -> Result<Vec<PostId>, ScanError> {
        let mut ids = Vec::new();
        while let Some(id) = self.next_id().await? {
            ids.push(id);
        }
        Ok(ids)
    }
}

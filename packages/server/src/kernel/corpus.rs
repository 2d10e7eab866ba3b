//! Postgres-backed corpus.
//!
//! Paged, filtered reads over the `posts` table. The text hint is
//! implemented as an ILIKE over title, excerpt, and content, so it
//! keeps the imprecision the trait documents: a hint match on title
//! or excerpt does not imply a content match.

use anyhow::Result;
use async_trait::async_trait;
use sqlx::PgPool;

use crate::common::PostId;
use crate::domains::posts::PostSummary;
use crate::kernel::traits::{BaseCorpus, PageFilter, SearchPage};

pub struct PgCorpus {
    pool: PgPool,
}

impl PgCorpus {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Escape LIKE wildcards so user text matches literally.
fn like_pattern(text: &str) -> String {
    let escaped = text
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}

#[async_trait]
impl BaseCorpus for PgCorpus {
    async fn query_page(
        &self,
        filter: &PageFilter,
        page_index: u32,
        page_size: u32,
    ) -> Result<Vec<PostSummary>> {
        let offset = i64::from(page_index.saturating_sub(1)) * i64::from(page_size);
        let pattern = filter.text_hint.as_deref().map(like_pattern);

        let posts = sqlx::query_as::<_, PostSummary>(
            "SELECT id, title, link, status, published_at
             FROM posts
             WHERE status = $1
               AND published_at BETWEEN $2 AND $3
               AND ($4::text IS NULL
                    OR title ILIKE $4
                    OR excerpt ILIKE $4
                    OR content ILIKE $4)
             ORDER BY published_at, id
             LIMIT $5 OFFSET $6",
        )
        .bind(filter.status.to_string())
        .bind(filter.range.after)
        .bind(filter.range.before)
        .bind(pattern)
        .bind(i64::from(page_size))
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(posts)
    }

    async fn content(&self, id: PostId) -> Result<Option<String>> {
        // Direct single-row read; never served from a cache.
        let content =
            sqlx::query_scalar::<_, String>("SELECT content FROM posts WHERE id = $1 LIMIT 1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(content)
    }

    async fn find_published_by_id(&self, id: PostId) -> Result<Option<PostSummary>> {
        let post = sqlx::query_as::<_, PostSummary>(
            "SELECT id, title, link, status, published_at
             FROM posts
             WHERE id = $1 AND status = 'publish'",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(post)
    }

    async fn search(&self, query: &str, page: u32, per_page: u32) -> Result<SearchPage> {
        let pattern = like_pattern(query);
        let offset = i64::from(page.saturating_sub(1)) * i64::from(per_page);

        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*)
             FROM posts
             WHERE status = 'publish'
               AND (title ILIKE $1 OR excerpt ILIKE $1 OR content ILIKE $1)",
        )
        .bind(&pattern)
        .fetch_one(&self.pool)
        .await?;

        let posts = sqlx::query_as::<_, PostSummary>(
            "SELECT id, title, link, status, published_at
             FROM posts
             WHERE status = 'publish'
               AND (title ILIKE $1 OR excerpt ILIKE $1 OR content ILIKE $1)
             ORDER BY published_at DESC, id DESC
             LIMIT $2 OFFSET $3",
        )
        .bind(&pattern)
        .bind(i64::from(per_page))
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(SearchPage {
            posts,
            total: total.max(0) as u64,
        })
    }
}

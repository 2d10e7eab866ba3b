use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::common::PostId;

/// A post as seen by search and scan queries.
///
/// Content is deliberately absent: page queries return only the cheap
/// fields, and callers needing the body fetch it through
/// `BaseCorpus::content`, which always reads the authoritative copy.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct PostSummary {
    pub id: PostId,
    pub title: String,
    pub link: String,
    pub status: String, // 'publish', 'draft', 'pending', 'private', 'trash'
    pub published_at: NaiveDate,
}

/// Post status enum
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PostStatus {
    Publish,
    Draft,
    Pending,
    Private,
    Trash,
}

impl std::fmt::Display for PostStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PostStatus::Publish => write!(f, "publish"),
            PostStatus::Draft => write!(f, "draft"),
            PostStatus::Pending => write!(f, "pending"),
            PostStatus::Private => write!(f, "private"),
            PostStatus::Trash => write!(f, "trash"),
        }
    }
}

impl std::str::FromStr for PostStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "publish" => Ok(PostStatus::Publish),
            "draft" => Ok(PostStatus::Draft),
            "pending" => Ok(PostStatus::Pending),
            "private" => Ok(PostStatus::Private),
            "trash" => Ok(PostStatus::Trash),
            _ => Err(anyhow::anyhow!("Invalid post status: {}", s)),
        }
    }
}

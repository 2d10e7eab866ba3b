//! End-to-end properties of the marker scan, exercised through the
//! public library surface over the mock corpus.

use std::sync::Arc;

use server_core::common::PostId;
use server_core::domains::scanner::{MarkerScan, ScanError, BLOCK_SIGNATURE};
use server_core::kernel::{BaseCorpus, MockCorpus, MockPost};

fn block_content() -> String {
    format!(
        "<p>Intro paragraph.</p>\n{} {{\"postId\":7}} /-->",
        BLOCK_SIGNATURE
    )
}

#[tokio::test]
async fn emits_exactly_the_posts_containing_the_block() {
    // Post 42 embeds the block, post 43 does not; both are published
    // and in range.
    let corpus = Arc::new(
        MockCorpus::new()
            .with_post(
                MockPost::new(42, "Has the block")
                    .published_on("2025-01-10")
                    .content(&block_content()),
            )
            .with_post(
                MockPost::new(43, "No block")
                    .published_on("2025-01-12")
                    .content("<p>Plain content.</p>"),
            ),
    );

    let scan = MarkerScan::over(
        corpus,
        Some("2025-01-01"),
        Some("2025-01-31"),
        BLOCK_SIGNATURE,
    )
    .unwrap();

    assert_eq!(scan.collect_ids().await.unwrap(), vec![PostId(42)]);
}

#[tokio::test]
async fn every_emitted_id_is_published_in_range_with_marker() {
    let mut corpus = MockCorpus::new();
    for id in 1..=40 {
        let date = format!("2025-01-{:02}", (id % 28) + 1);
        let mut post = MockPost::new(id, &format!("Post {}", id)).published_on(&date);
        if id % 3 == 0 {
            post = post.content(&block_content());
        }
        corpus = corpus.with_post(post);
    }
    let corpus = Arc::new(corpus);

    let scan = MarkerScan::over(
        corpus.clone(),
        Some("2025-01-01"),
        Some("2025-01-31"),
        BLOCK_SIGNATURE,
    )
    .unwrap();
    let ids = scan.collect_ids().await.unwrap();

    assert!(!ids.is_empty());
    for id in &ids {
        assert_eq!(id.as_i64() % 3, 0, "emitted a post without the block");
        let content = corpus.content(*id).await.unwrap().unwrap();
        assert!(content.contains(BLOCK_SIGNATURE));
    }
}

#[tokio::test]
async fn default_window_is_the_last_thirty_days() {
    let today = chrono::Utc::now().date_naive();
    let old = today - chrono::Days::new(45);
    let recent = today - chrono::Days::new(5);

    let corpus = Arc::new(
        MockCorpus::new()
            .with_post(
                MockPost::new(1, "Too old")
                    .published_on(&old.to_string())
                    .content(&block_content()),
            )
            .with_post(
                MockPost::new(2, "Recent")
                    .published_on(&recent.to_string())
                    .content(&block_content()),
            ),
    );

    let scan = MarkerScan::over(corpus, None, None, BLOCK_SIGNATURE).unwrap();
    assert_eq!(scan.collect_ids().await.unwrap(), vec![PostId(2)]);
}

#[tokio::test]
async fn empty_scan_is_distinguishable_from_failure() {
    let corpus = Arc::new(MockCorpus::new());
    let scan = MarkerScan::over(
        corpus,
        Some("2025-01-01"),
        Some("2025-01-31"),
        BLOCK_SIGNATURE,
    )
    .unwrap();

    // An empty corpus yields Ok(empty), never Err.
    let ids = scan.collect_ids().await.unwrap();
    assert!(ids.is_empty());
}

#[tokio::test]
async fn unparseable_bound_never_touches_the_corpus() {
    let corpus = Arc::new(MockCorpus::new().with_post(MockPost::new(1, "Post")));

    let result = MarkerScan::over(
        corpus.clone(),
        Some("2025-13-45"),
        Some("2025-01-31"),
        BLOCK_SIGNATURE,
    );

    assert!(matches!(result.err(), Some(ScanError::InvalidInput(_))));
    assert_eq!(corpus.total_requests(), 0);
}

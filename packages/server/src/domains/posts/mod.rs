pub mod models;

pub use models::{PostStatus, PostSummary};

pub mod search;

pub use search::{search_posts, PostPick, PostSelection, SearchResponse, SEARCH_PAGE_SIZE};

// HTTP routes
pub mod health;
pub mod search_posts;

pub use health::*;
pub use search_posts::*;

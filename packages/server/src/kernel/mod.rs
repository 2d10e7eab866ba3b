//! Kernel module - infrastructure and injected dependencies.

pub mod corpus;
pub mod test_dependencies;
pub mod traits;

pub use corpus::PgCorpus;
pub use test_dependencies::{MockCorpus, MockPost};
pub use traits::*;

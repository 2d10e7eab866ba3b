// Common types and utilities shared across the application

pub mod date_range;
pub mod id;

pub use date_range::{DateRange, DateRangeError};
pub use id::PostId;

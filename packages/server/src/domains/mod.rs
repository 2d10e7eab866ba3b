// Domain logic, grouped per concern.

pub mod posts;
pub mod scanner;
pub mod search;

// Read More Link Block - search backend
//
// This crate backs the "Read More Link Block" editor block: a REST
// endpoint for the block's post picker, and the marker scan the
// companion CLI runs to find posts embedding the block.
//
// The post store is reached only through the Corpus capability trait
// in kernel/, so domain logic stays independent of Postgres.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;

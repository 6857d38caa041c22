//! Core types and trait definitions for the trivia backend.
//!
//! This crate is deliberately free of HTTP and database dependencies. The
//! store and API crates depend on it; it depends on nothing of theirs.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod category;
pub mod error;
pub mod game;
pub mod pagination;
pub mod question;
pub mod store;

pub use error::{Error, Result};

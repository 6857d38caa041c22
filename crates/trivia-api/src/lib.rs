//! JSON REST API for the trivia game.
//!
//! Exposes an axum [`Router`] backed by any [`trivia_core::store::TriviaStore`].
//! CORS, tracing, and transport concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let app = trivia_api::api_router(store.clone());
//! ```

pub mod body;
pub mod categories;
pub mod error;
pub mod questions;

use std::sync::Arc;

use axum::{
  Router,
  routing::{delete, get},
};
use serde::Deserialize;
use trivia_core::store::TriviaStore;

pub use error::ApiError;

/// `?page=` on paginated endpoints. Parsed leniently by
/// [`trivia_core::pagination::parse_page`].
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
  pub page: Option<String>,
}

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type. Unmatched paths answer with the 404 envelope.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: TriviaStore + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Router::new()
    // Categories
    .route("/categories", get(categories::list::<S>).post(categories::play::<S>))
    .route("/categories/{id}/questions", get(categories::questions::<S>))
    // Questions
    .route("/questions", get(questions::list::<S>).post(questions::search_or_create::<S>))
    .route("/questions/{id}", delete(questions::delete_one::<S>))
    .fallback(unmatched)
    .with_state(store)
}

async fn unmatched() -> ApiError { ApiError::NotFound("no such route".into()) }

//! The `TriviaStore` trait and supporting query types.
//!
//! The trait is implemented by storage backends (e.g. `trivia-store-sqlite`).
//! The API layer depends on this abstraction, not on any concrete backend.

use std::future::Future;

use crate::{
  category::Category,
  question::{NewQuestion, Question},
};

// ─── Query type ──────────────────────────────────────────────────────────────

/// Filter for [`TriviaStore::list_questions`]. Every condition is optional;
/// the empty query selects all questions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionQuery {
  /// Only questions whose category text equals this id.
  pub category: Option<i64>,
  /// Case-insensitive substring match on the question text.
  pub text:     Option<String>,
  /// Question ids to leave out.
  pub exclude:  Vec<i64>,
}

impl QuestionQuery {
  /// Questions in one category.
  pub fn in_category(category: i64) -> Self {
    Self { category: Some(category), ..Self::default() }
  }

  /// Questions whose text contains `term`.
  pub fn matching(term: impl Into<String>) -> Self {
    Self { text: Some(term.into()), ..Self::default() }
  }

  /// Game-play candidates: `category` of `0` means any category.
  pub fn unseen(category: i64, previous: Vec<i64>) -> Self {
    Self {
      category: (category != 0).then_some(category),
      text:     None,
      exclude:  previous,
    }
  }
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over a trivia store backend.
///
/// Each method is a single independent round trip; none of them opens a
/// multi-statement transaction.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait TriviaStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Categories ────────────────────────────────────────────────────────

  /// Insert a category unless one with the same id already exists.
  fn add_category(
    &self,
    category: Category,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// All categories in ascending id order.
  fn list_categories(
    &self,
  ) -> impl Future<Output = Result<Vec<Category>, Self::Error>> + Send + '_;

  /// Retrieve a category by id. Returns `None` if not found.
  fn get_category(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Category>, Self::Error>> + Send + '_;

  // ── Questions ─────────────────────────────────────────────────────────

  /// Persist a new question with a store-assigned id.
  fn add_question(
    &self,
    input: NewQuestion,
  ) -> impl Future<Output = Result<Question, Self::Error>> + Send + '_;

  /// Persist a question under a caller-supplied id.
  ///
  /// Only for deterministic fixtures. Returns an error if the id is taken.
  fn add_question_with_id(
    &self,
    id: i64,
    input: NewQuestion,
  ) -> impl Future<Output = Result<Question, Self::Error>> + Send + '_;

  /// Retrieve a question by id. Returns `None` if not found.
  fn get_question(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Question>, Self::Error>> + Send + '_;

  /// Remove a question. Returns `false` if no row had that id.
  fn delete_question(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  /// Questions matching `query`, in ascending id order.
  fn list_questions<'a>(
    &'a self,
    query: &'a QuestionQuery,
  ) -> impl Future<Output = Result<Vec<Question>, Self::Error>> + Send + 'a;

  /// Number of questions in the store, across all categories.
  fn count_questions(
    &self,
  ) -> impl Future<Output = Result<u64, Self::Error>> + Send + '_;
}

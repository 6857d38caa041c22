//! Error type for `trivia-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("json error: {0}")]
  Json(#[from] serde_json::Error),

  /// An explicit-id insert hit an existing row.
  #[error("question {0} already exists")]
  QuestionExists(i64),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

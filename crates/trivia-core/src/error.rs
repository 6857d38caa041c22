//! Error types for `trivia-core`.

use thiserror::Error;

/// Validation failures raised while turning a request draft into a
/// [`NewQuestion`](crate::question::NewQuestion).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  #[error("missing required field: {0}")]
  MissingField(&'static str),

  #[error("{field} {value} is outside the allowed range")]
  OutOfRange { field: &'static str, value: i64 },

  #[error("{field} {value:?} is not a number")]
  NotNumeric { field: &'static str, value: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

//! API error type and [`axum::response::IntoResponse`] implementation.
//!
//! Every failure is rendered as the same envelope:
//! `{"success": false, "error": <status>, "message": <text>}`. The variant's
//! detail string is logged, not returned.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("bad request: {0}")]
  BadRequest(String),

  #[error("not found: {0}")]
  NotFound(String),

  #[error("unprocessable: {0}")]
  Unprocessable(String),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ApiError {
  /// Wrap a backend error.
  pub fn store<E>(e: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    ApiError::Store(Box::new(e))
  }

  pub fn status(&self) -> StatusCode {
    match self {
      ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
      ApiError::NotFound(_) => StatusCode::NOT_FOUND,
      ApiError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
      ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn public_message(&self) -> &'static str {
    match self {
      ApiError::BadRequest(_) => "Bad request",
      ApiError::NotFound(_) => "Resource not found",
      ApiError::Unprocessable(_) => "Not processable",
      ApiError::Store(_) => "Internal server error",
    }
  }
}

impl From<trivia_core::Error> for ApiError {
  fn from(e: trivia_core::Error) -> Self {
    match e {
      trivia_core::Error::MissingField(_) => ApiError::BadRequest(e.to_string()),
      trivia_core::Error::OutOfRange { .. } | trivia_core::Error::NotNumeric { .. } => {
        ApiError::Unprocessable(e.to_string())
      }
    }
  }
}

/// Wire form of a failed request.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
  pub success: bool,
  pub error:   u16,
  pub message: &'static str,
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = self.status();
    match &self {
      ApiError::Store(e) => tracing::error!(error = %e, "store failure"),
      other => tracing::debug!(%status, detail = %other, "request rejected"),
    }
    let body = ErrorBody {
      success: false,
      error:   status.as_u16(),
      message: self.public_message(),
    };
    (status, Json(body)).into_response()
  }
}

//! Request body and path-segment helpers shared by the handlers.
//!
//! Bodies are taken as raw bytes so that "no body" and "bad JSON" surface as
//! the JSON error envelope rather than axum's plain-text rejections.

use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// `true` if the request carried anything other than whitespace.
pub fn has_content(bytes: &[u8]) -> bool {
  bytes.iter().any(|b| !b.is_ascii_whitespace())
}

/// Deserialize a required JSON body.
pub fn parse_json<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ApiError> {
  if !has_content(bytes) {
    return Err(ApiError::BadRequest("request body is required".into()));
  }
  serde_json::from_slice(bytes)
    .map_err(|e| ApiError::BadRequest(format!("invalid JSON body: {e}")))
}

/// Parse an integer id from a path segment. Anything else is treated like an
/// unmatched route.
pub fn parse_path_id(raw: &str) -> Result<i64, ApiError> {
  raw
    .parse()
    .map_err(|_| ApiError::NotFound(format!("no resource at id {raw:?}")))
}

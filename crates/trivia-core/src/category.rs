//! Category — seed data that questions point at by id.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A question category. Rows are seeded out-of-band and never change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
  pub id:   i64,
  #[serde(rename = "type")]
  pub kind: String,
}

impl Category {
  pub fn new(id: i64, kind: impl Into<String>) -> Self {
    Self { id, kind: kind.into() }
  }
}

/// The six categories the game client expects.
pub const DEFAULT_CATEGORIES: [(i64, &str); 6] = [
  (1, "Science"),
  (2, "Art"),
  (3, "Geography"),
  (4, "History"),
  (5, "Entertainment"),
  (6, "Sports"),
];

/// Build the `{id: type}` map used by the listing endpoints.
///
/// Integer keys serialise as JSON object keys (`"1": "Science"`), ordered by
/// id.
pub fn category_map(categories: &[Category]) -> BTreeMap<i64, String> {
  categories
    .iter()
    .map(|c| (c.id, c.kind.clone()))
    .collect()
}

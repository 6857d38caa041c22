//! Conversions between SQLite rows and domain types, plus the dynamic
//! `WHERE` clause behind [`QuestionQuery`].

use rusqlite::{
  Connection, Row,
  functions::FunctionFlags,
  types::Value,
};
use trivia_core::{category::Category, question::Question, store::QuestionQuery};

use crate::Result;

// ─── Rows ────────────────────────────────────────────────────────────────────

pub const QUESTION_COLUMNS: &str = "id, question, answer, category, difficulty";

pub fn question_from_row(row: &Row<'_>) -> rusqlite::Result<Question> {
  Ok(Question {
    id:         row.get(0)?,
    question:   row.get(1)?,
    answer:     row.get(2)?,
    category:   row.get(3)?,
    difficulty: row.get(4)?,
  })
}

pub fn category_from_row(row: &Row<'_>) -> rusqlite::Result<Category> {
  Ok(Category { id: row.get(0)?, kind: row.get(1)? })
}

// ─── SQL functions ───────────────────────────────────────────────────────────

/// Unicode-aware lower-casing; SQLite's own `lower()` and `LIKE` fold ASCII
/// only.
pub const FOLD_FN: &str = "trivia_fold";

/// Register the custom scalar functions the queries below rely on. Must run
/// on every new connection.
pub fn register_functions(conn: &Connection) -> rusqlite::Result<()> {
  conn.create_scalar_function(
    FOLD_FN,
    1,
    FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
    |ctx| {
      let text: Option<String> = ctx.get(0)?;
      Ok(text.map(|t| t.to_lowercase()))
    },
  )
}

// ─── Query building ──────────────────────────────────────────────────────────

/// SQL text and positional parameters for a [`QuestionQuery`].
#[derive(Debug)]
pub struct BuiltQuery {
  pub sql:    String,
  pub params: Vec<Value>,
}

/// Render `query` as a `SELECT` over `questions`, ordered by id.
///
/// The text filter is a literal substring test (`instr`), so `%`, `_` and `\`
/// carry no special meaning. Excluded ids travel as one JSON array parameter,
/// which keeps long exclusion lists under SQLite's bind-variable limit.
pub fn build_question_query(query: &QuestionQuery) -> Result<BuiltQuery> {
  let mut conds: Vec<String> = vec![];
  let mut params: Vec<Value> = vec![];

  if let Some(category) = query.category {
    params.push(Value::Text(category.to_string()));
    conds.push(format!("category = ?{}", params.len()));
  }

  if let Some(text) = &query.text {
    params.push(Value::Text(text.clone()));
    conds.push(format!(
      "instr({FOLD_FN}(question), {FOLD_FN}(?{})) > 0",
      params.len()
    ));
  }

  if !query.exclude.is_empty() {
    params.push(Value::Text(serde_json::to_string(&query.exclude)?));
    conds.push(format!(
      "id NOT IN (SELECT value FROM json_each(?{}))",
      params.len()
    ));
  }

  let where_clause = if conds.is_empty() {
    String::new()
  } else {
    format!(" WHERE {}", conds.join(" AND "))
  };

  Ok(BuiltQuery {
    sql: format!("SELECT {QUESTION_COLUMNS} FROM questions{where_clause} ORDER BY id"),
    params,
  })
}

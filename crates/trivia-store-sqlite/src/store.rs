//! [`SqliteStore`] — the SQLite implementation of [`TriviaStore`].

use std::path::Path;

use rusqlite::OptionalExtension as _;
use tracing::{debug, info};

use trivia_core::{
  category::{Category, DEFAULT_CATEGORIES},
  question::{NewQuestion, Question},
  store::{QuestionQuery, TriviaStore},
};

use crate::{
  encode::{
    QUESTION_COLUMNS, build_question_query, category_from_row, question_from_row,
    register_functions,
  },
  schema::SCHEMA,
  Error, Result,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A trivia store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        register_functions(conn)?;
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Insert the standard six categories. Existing rows are left untouched.
  pub async fn seed_default_categories(&self) -> Result<()> {
    for (id, kind) in DEFAULT_CATEGORIES {
      self.add_category(Category::new(id, kind)).await?;
    }
    info!(count = DEFAULT_CATEGORIES.len(), "seeded default categories");
    Ok(())
  }
}

// ─── TriviaStore impl ────────────────────────────────────────────────────────

impl TriviaStore for SqliteStore {
  type Error = Error;

  // ── Categories ────────────────────────────────────────────────────────────

  async fn add_category(&self, category: Category) -> Result<()> {
    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT OR IGNORE INTO categories (id, type) VALUES (?1, ?2)",
          rusqlite::params![category.id, category.kind],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn list_categories(&self) -> Result<Vec<Category>> {
    let categories = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare("SELECT id, type FROM categories ORDER BY id")?;
        let rows = stmt
          .query_map([], category_from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(categories)
  }

  async fn get_category(&self, id: i64) -> Result<Option<Category>> {
    let category = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            "SELECT id, type FROM categories WHERE id = ?1",
            rusqlite::params![id],
            category_from_row,
          )
          .optional()?)
      })
      .await?;
    Ok(category)
  }

  // ── Questions ─────────────────────────────────────────────────────────────

  async fn add_question(&self, input: NewQuestion) -> Result<Question> {
    let NewQuestion { question, answer, category, difficulty } = input.clone();
    let category = category.to_string();

    let id = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO questions (question, answer, category, difficulty)
           VALUES (?1, ?2, ?3, ?4)",
          rusqlite::params![question, answer, category, difficulty],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    debug!(id, "inserted question");
    Ok(input.into_question(id))
  }

  async fn add_question_with_id(&self, id: i64, input: NewQuestion) -> Result<Question> {
    let NewQuestion { question, answer, category, difficulty } = input.clone();
    let category = category.to_string();

    let inserted = self
      .conn
      .call(move |conn| {
        let changed = conn.execute(
          "INSERT OR IGNORE INTO questions (id, question, answer, category, difficulty)
           VALUES (?1, ?2, ?3, ?4, ?5)",
          rusqlite::params![id, question, answer, category, difficulty],
        )?;
        Ok(changed == 1)
      })
      .await?;

    if !inserted {
      return Err(Error::QuestionExists(id));
    }
    debug!(id, "inserted question with explicit id");
    Ok(input.into_question(id))
  }

  async fn get_question(&self, id: i64) -> Result<Option<Question>> {
    let question = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            &format!("SELECT {QUESTION_COLUMNS} FROM questions WHERE id = ?1"),
            rusqlite::params![id],
            question_from_row,
          )
          .optional()?)
      })
      .await?;
    Ok(question)
  }

  async fn delete_question(&self, id: i64) -> Result<bool> {
    let removed = self
      .conn
      .call(move |conn| {
        let changed =
          conn.execute("DELETE FROM questions WHERE id = ?1", rusqlite::params![id])?;
        Ok(changed > 0)
      })
      .await?;
    Ok(removed)
  }

  async fn list_questions(&self, query: &QuestionQuery) -> Result<Vec<Question>> {
    let built = build_question_query(query)?;

    let questions = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&built.sql)?;
        let rows = stmt
          .query_map(rusqlite::params_from_iter(built.params.iter()), question_from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(questions)
  }

  async fn count_questions(&self) -> Result<u64> {
    let count: i64 = self
      .conn
      .call(|conn| {
        Ok(conn.query_row("SELECT COUNT(*) FROM questions", [], |r| r.get(0))?)
      })
      .await?;
    Ok(count.max(0) as u64)
  }
}

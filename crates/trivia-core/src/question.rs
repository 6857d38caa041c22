//! Question types and creation-time validation.
//!
//! Storage keeps `category` as the numeric category id rendered as text; the
//! JSON form mirrors that. Range checks live here, at the boundary, not in
//! the schema.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Category ids accepted when creating a question.
pub const CATEGORY_RANGE: RangeInclusive<i64> = 1..=6;

/// Difficulty levels accepted when creating a question.
pub const DIFFICULTY_RANGE: RangeInclusive<i64> = 1..=5;

// ─── Question ────────────────────────────────────────────────────────────────

/// A stored trivia question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
  pub id:         i64,
  pub question:   String,
  pub answer:     String,
  /// Category id as text, e.g. `"2"`.
  pub category:   String,
  pub difficulty: i64,
}

// ─── NewQuestion ─────────────────────────────────────────────────────────────

/// Validated input to [`crate::store::TriviaStore::add_question`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
  pub question:   String,
  pub answer:     String,
  pub category:   i64,
  pub difficulty: i64,
}

impl NewQuestion {
  /// Materialise the stored row once the store has assigned `id`.
  pub fn into_question(self, id: i64) -> Question {
    Question {
      id,
      question:   self.question,
      answer:     self.answer,
      category:   self.category.to_string(),
      difficulty: self.difficulty,
    }
  }
}

// ─── Loose integers ──────────────────────────────────────────────────────────

/// An integer that clients may send either as a JSON number or as a numeric
/// string (`2` or `"2"`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum LooseInt {
  Int(i64),
  Text(String),
}

impl LooseInt {
  /// Resolve to an integer, naming `field` in the error.
  pub fn resolve(&self, field: &'static str) -> Result<i64> {
    match self {
      LooseInt::Int(n) => Ok(*n),
      LooseInt::Text(s) => s.trim().parse().map_err(|_| Error::NotNumeric {
        field,
        value: s.clone(),
      }),
    }
  }
}

impl From<i64> for LooseInt {
  fn from(n: i64) -> Self { LooseInt::Int(n) }
}

// ─── Draft ───────────────────────────────────────────────────────────────────

/// Unvalidated creation input, as it arrives from a client.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuestionDraft {
  pub question:   Option<String>,
  pub answer:     Option<String>,
  pub category:   Option<LooseInt>,
  pub difficulty: Option<LooseInt>,
}

impl QuestionDraft {
  /// Validate presence of every field first, then the numeric ranges.
  ///
  /// A missing field never reaches the range check.
  pub fn validate(self) -> Result<NewQuestion> {
    let question = self.question.ok_or(Error::MissingField("question"))?;
    let answer = self.answer.ok_or(Error::MissingField("answer"))?;
    let category = self.category.ok_or(Error::MissingField("category"))?;
    let difficulty = self.difficulty.ok_or(Error::MissingField("difficulty"))?;

    let category = in_range("category", category.resolve("category")?, &CATEGORY_RANGE)?;
    let difficulty =
      in_range("difficulty", difficulty.resolve("difficulty")?, &DIFFICULTY_RANGE)?;

    Ok(NewQuestion { question, answer, category, difficulty })
  }
}

fn in_range(field: &'static str, value: i64, range: &RangeInclusive<i64>) -> Result<i64> {
  if range.contains(&value) {
    Ok(value)
  } else {
    Err(Error::OutOfRange { field, value })
  }
}

//! Handlers for `/categories` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/categories` | Must not carry a body |
//! | `POST` | `/categories` | Game play; body: [`PlayBody`] |
//! | `GET`  | `/categories/:id/questions` | `?page`; 404 if the category is unknown |

use std::{collections::BTreeMap, sync::Arc};

use axum::{
  Json,
  body::Bytes,
  extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};
use trivia_core::{
  category::{Category, category_map},
  game::choose_question,
  pagination::{paginate, parse_page},
  question::{LooseInt, Question},
  store::{QuestionQuery, TriviaStore},
};

use crate::{
  PageParams,
  body::{has_content, parse_json, parse_path_id},
  error::ApiError,
};

// ─── List ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct CategoryList {
  pub success:         bool,
  #[serde(rename = "totalQuestions")]
  pub total_questions: u64,
  pub categories:      BTreeMap<i64, String>,
}

/// `GET /categories`
pub async fn list<S>(
  State(store): State<Arc<S>>,
  body: Bytes,
) -> Result<Json<CategoryList>, ApiError>
where
  S: TriviaStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  if has_content(&body) {
    return Err(ApiError::BadRequest("GET /categories takes no body".into()));
  }

  let categories = store.list_categories().await.map_err(ApiError::store)?;
  let total_questions = store.count_questions().await.map_err(ApiError::store)?;

  Ok(Json(CategoryList {
    success: true,
    total_questions,
    categories: category_map(&categories),
  }))
}

// ─── Play ─────────────────────────────────────────────────────────────────────

/// JSON body accepted by `POST /categories`.
#[derive(Debug, Deserialize)]
pub struct PlayBody {
  pub quiz_category:      Option<QuizCategory>,
  pub previous_questions: Option<Vec<LooseInt>>,
}

#[derive(Debug, Deserialize)]
pub struct QuizCategory {
  /// `0` (or absent) means any category.
  pub id: Option<LooseInt>,
}

#[derive(Debug, Serialize)]
pub struct NextQuestion {
  pub success:    bool,
  pub categories: Vec<Category>,
  pub question:   Option<Question>,
}

fn bad_id(e: trivia_core::Error) -> ApiError { ApiError::BadRequest(e.to_string()) }

/// `POST /categories` — pick a random question the player has not seen yet.
///
/// `question` is `null` once every candidate has been played.
pub async fn play<S>(
  State(store): State<Arc<S>>,
  body: Bytes,
) -> Result<Json<NextQuestion>, ApiError>
where
  S: TriviaStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let body: PlayBody = parse_json(&body)?;
  let quiz_category = body
    .quiz_category
    .ok_or_else(|| ApiError::BadRequest("quiz_category is required".into()))?;

  let category_id = match quiz_category.id {
    Some(id) => id.resolve("quiz_category.id").map_err(bad_id)?,
    None => 0,
  };
  let previous = body
    .previous_questions
    .unwrap_or_default()
    .iter()
    .map(|id| id.resolve("previous_questions").map_err(bad_id))
    .collect::<Result<Vec<i64>, _>>()?;

  let categories = store.list_categories().await.map_err(ApiError::store)?;
  if category_id != 0 && !categories.iter().any(|c| c.id == category_id) {
    return Err(ApiError::NotFound(format!("category {category_id} not found")));
  }

  let query = QuestionQuery::unseen(category_id, previous);
  let candidates = store.list_questions(&query).await.map_err(ApiError::store)?;
  let question = choose_question(&candidates, &mut rand::rng());

  tracing::debug!(
    category_id,
    candidates = candidates.len(),
    picked = question.as_ref().map(|q| q.id),
    "next question"
  );

  Ok(Json(NextQuestion { success: true, categories, question }))
}

// ─── Questions in a category ──────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct CategoryQuestions {
  pub success:          bool,
  pub questions:        Vec<Question>,
  /// Number of questions in this category, not across the store.
  pub total_questions:  usize,
  pub current_category: i64,
}

/// `GET /categories/:id/questions[?page=<n>]`
pub async fn questions<S>(
  State(store): State<Arc<S>>,
  Path(raw_id): Path<String>,
  Query(params): Query<PageParams>,
) -> Result<Json<CategoryQuestions>, ApiError>
where
  S: TriviaStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let category_id = parse_path_id(&raw_id)?;
  store
    .get_category(category_id)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| ApiError::NotFound(format!("category {category_id} not found")))?;

  let in_category = store
    .list_questions(&QuestionQuery::in_category(category_id))
    .await
    .map_err(ApiError::store)?;
  let page = parse_page(params.page.as_deref());

  Ok(Json(CategoryQuestions {
    success:          true,
    questions:        paginate(page, &in_category).to_vec(),
    total_questions:  in_category.len(),
    current_category: category_id,
  }))
}

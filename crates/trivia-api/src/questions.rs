//! Handlers for `/questions` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/questions` | `?category_id` (`0` = all), `?page` |
//! | `POST`   | `/questions` | Search when `searchTerm` is non-empty, otherwise create |
//! | `DELETE` | `/questions/:id` | 404 if absent |

use std::{collections::BTreeMap, sync::Arc};

use axum::{
  Json,
  body::Bytes,
  extract::{Path, Query, State},
  response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use trivia_core::{
  category::category_map,
  pagination::{paginate, parse_page},
  question::{LooseInt, NewQuestion, Question, QuestionDraft},
  store::{QuestionQuery, TriviaStore},
};

use crate::{
  PageParams,
  body::{parse_json, parse_path_id},
  error::ApiError,
};

// ─── List ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ListParams {
  /// Category filter; `"0"` (the default) lists every category.
  pub category_id: Option<String>,
  pub page:        Option<String>,
}

#[derive(Debug, Serialize)]
pub struct QuestionList {
  pub success:          bool,
  pub questions:        Vec<Question>,
  /// Count across all categories, whatever the filter.
  pub total_questions:  u64,
  pub current_category: String,
  pub categories:       BTreeMap<i64, String>,
}

/// `GET /questions[?category_id=<id>][&page=<n>]`
pub async fn list<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<ListParams>,
) -> Result<Json<QuestionList>, ApiError>
where
  S: TriviaStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let categories = store.list_categories().await.map_err(ApiError::store)?;
  let total_questions = store.count_questions().await.map_err(ApiError::store)?;

  let current_category = params.category_id.unwrap_or_else(|| "0".to_owned());
  let query = if current_category == "0" {
    QuestionQuery::default()
  } else {
    let id = current_category
      .parse::<i64>()
      .ok()
      .filter(|id| categories.iter().any(|c| c.id == *id))
      .ok_or_else(|| {
        ApiError::BadRequest(format!("unknown category_id {current_category:?}"))
      })?;
    QuestionQuery::in_category(id)
  };

  let questions = store.list_questions(&query).await.map_err(ApiError::store)?;
  let page = parse_page(params.page.as_deref());

  Ok(Json(QuestionList {
    success: true,
    questions: paginate(page, &questions).to_vec(),
    total_questions,
    current_category,
    categories: category_map(&categories),
  }))
}

// ─── Search / create ──────────────────────────────────────────────────────────

/// JSON body accepted by `POST /questions`.
///
/// A non-empty `searchTerm` selects search; every other field is ignored in
/// that case.
#[derive(Debug, Default, Deserialize)]
pub struct PostBody {
  #[serde(rename = "searchTerm")]
  pub search_term: Option<String>,
  pub question:    Option<String>,
  pub answer:      Option<String>,
  pub category:    Option<LooseInt>,
  pub difficulty:  Option<LooseInt>,
  /// Explicit primary key, used by fixtures only.
  pub id:          Option<LooseInt>,
}

#[derive(Debug, Serialize)]
pub struct SearchResults {
  pub success:           bool,
  pub total_questions:   u64,
  pub matched_questions: usize,
  pub questions:         Vec<Question>,
}

#[derive(Debug, Serialize)]
pub struct Created {
  pub success:         bool,
  pub new_question_id: i64,
  pub total_questions: u64,
}

/// `POST /questions` — search or create depending on the body.
pub async fn search_or_create<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<PageParams>,
  body: Bytes,
) -> Result<Response, ApiError>
where
  S: TriviaStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let mut body: PostBody = parse_json(&body)?;
  match body.search_term.take().filter(|t| !t.is_empty()) {
    Some(term) => Ok(search(&*store, &term, params.page.as_deref()).await?.into_response()),
    None => Ok(create(&*store, body).await?.into_response()),
  }
}

async fn search<S>(
  store: &S,
  term: &str,
  page: Option<&str>,
) -> Result<Json<SearchResults>, ApiError>
where
  S: TriviaStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let query = QuestionQuery::matching(term);
  let matched = store.list_questions(&query).await.map_err(ApiError::store)?;
  let total_questions = store.count_questions().await.map_err(ApiError::store)?;

  Ok(Json(SearchResults {
    success: true,
    total_questions,
    matched_questions: matched.len(),
    questions: paginate(parse_page(page), &matched).to_vec(),
  }))
}

async fn create<S>(store: &S, body: PostBody) -> Result<Json<Created>, ApiError>
where
  S: TriviaStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let input: NewQuestion = QuestionDraft {
    question:   body.question,
    answer:     body.answer,
    category:   body.category,
    difficulty: body.difficulty,
  }
  .validate()?;

  let explicit_id = body
    .id
    .map(|id| id.resolve("id"))
    .transpose()?
    .filter(|id| *id != 0);

  let question = match explicit_id {
    Some(id) => {
      let taken = store.get_question(id).await.map_err(ApiError::store)?;
      if taken.is_some() {
        return Err(ApiError::Unprocessable(format!("question {id} already exists")));
      }
      store.add_question_with_id(id, input).await.map_err(ApiError::store)?
    }
    None => store.add_question(input).await.map_err(ApiError::store)?,
  };
  let total_questions = store.count_questions().await.map_err(ApiError::store)?;

  tracing::info!(id = question.id, category = %question.category, "question created");
  Ok(Json(Created {
    success: true,
    new_question_id: question.id,
    total_questions,
  }))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct Deleted {
  pub success:         bool,
  pub deleted_id:      i64,
  pub total_questions: u64,
}

/// `DELETE /questions/:id`
///
/// An absent row is a 404; a storage failure is a 500.
pub async fn delete_one<S>(
  State(store): State<Arc<S>>,
  Path(raw_id): Path<String>,
) -> Result<Json<Deleted>, ApiError>
where
  S: TriviaStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let id = parse_path_id(&raw_id)?;
  let removed = store.delete_question(id).await.map_err(ApiError::store)?;
  if !removed {
    return Err(ApiError::NotFound(format!("question {id} not found")));
  }
  let total_questions = store.count_questions().await.map_err(ApiError::store)?;

  tracing::info!(id, "question deleted");
  Ok(Json(Deleted { success: true, deleted_id: id, total_questions }))
}

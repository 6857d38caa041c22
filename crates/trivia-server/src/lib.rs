//! HTTP server assembly for the trivia API.
//!
//! Wraps [`trivia_api::api_router`] with CORS and request tracing, and owns
//! the runtime configuration.

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use axum::{
  Router,
  http::{Method, header},
};
use serde::Deserialize;
use tower_http::{
  cors::{Any, CorsLayer},
  trace::TraceLayer,
};
use trivia_core::store::TriviaStore;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `TRIVIA_*` environment variables.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:            String,
  #[serde(default = "default_port")]
  pub port:            u16,
  #[serde(default = "default_database_path")]
  pub database_path:   PathBuf,
  /// Insert the six standard categories at startup.
  #[serde(default = "default_seed_categories")]
  pub seed_categories: bool,
}

fn default_host() -> String { "127.0.0.1".to_owned() }

fn default_port() -> u16 { 5000 }

fn default_database_path() -> PathBuf { PathBuf::from("trivia.db") }

fn default_seed_categories() -> bool { true }

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:            default_host(),
      port:            default_port(),
      database_path:   default_database_path(),
      seed_categories: default_seed_categories(),
    }
  }
}

impl ServerConfig {
  /// Layer the optional TOML file at `path` under `TRIVIA_*` env vars.
  pub fn load(path: &Path) -> Result<Self, config::ConfigError> {
    config::Config::builder()
      .add_source(config::File::from(path.to_path_buf()).required(false))
      .add_source(config::Environment::with_prefix("TRIVIA"))
      .build()?
      .try_deserialize()
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Cross-origin policy: any origin, the standard headers and methods.
pub fn cors_layer() -> CorsLayer {
  CorsLayer::new()
    .allow_origin(Any)
    .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
    .allow_methods([
      Method::GET,
      Method::PATCH,
      Method::POST,
      Method::DELETE,
      Method::OPTIONS,
    ])
}

/// Build the served application for `store`.
pub fn router<S>(store: Arc<S>) -> Router
where
  S: TriviaStore + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  trivia_api::api_router(store)
    .layer(cors_layer())
    .layer(TraceLayer::new_for_http())
}

//! Process-level wiring for the PawCare booking service.
//!
//! Loads [`ServerConfig`], provisions the instance directory, and assembles
//! the full HTTP application: the JSON API from `pawcare-api`, the landing
//! page, and static assets.

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use axum::Router;
use config::{ConfigError, FileFormat};
use pawcare_core::store::AppointmentStore;
use serde::Deserialize;
use tower_http::{
  services::{ServeDir, ServeFile},
  trace::TraceLayer,
};

/// Secret used when neither the config file nor the environment provides one.
pub const DEFAULT_SECRET_KEY: &str = "dev-secret";

/// File name of the store inside the instance directory.
pub const DATABASE_FILE_NAME: &str = "petcare.db";

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration.
///
/// Sources, lowest precedence first: built-in defaults, the TOML config file,
/// `PAWCARE_*` environment variables, then the bare `PORT` and `SECRET_KEY`
/// variables.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  pub host:          String,
  pub port:          u16,
  pub secret_key:    String,
  /// Directory holding per-instance state (the SQLite file by default).
  pub instance_path: PathBuf,
  /// Explicit store location; defaults to `<instance_path>/petcare.db`.
  pub database:      Option<PathBuf>,
  pub templates_dir: PathBuf,
  pub static_dir:    PathBuf,
}

impl ServerConfig {
  /// Load configuration, reading `path` if it exists.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    Self::from_file_source(config::File::from(path).required(false))
  }

  /// Load configuration from an in-memory TOML document instead of a file.
  pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
    Self::from_file_source(config::File::from_str(toml, FileFormat::Toml))
  }

  fn from_file_source<T>(file: T) -> Result<Self, ConfigError>
  where
    T: config::Source + Send + Sync + 'static,
  {
    config::Config::builder()
      .set_default("host", "0.0.0.0")?
      .set_default("port", 5000)?
      .set_default("secret_key", DEFAULT_SECRET_KEY)?
      .set_default("instance_path", "instance")?
      .set_default("templates_dir", "templates")?
      .set_default("static_dir", "static")?
      .add_source(file)
      .add_source(config::Environment::with_prefix("PAWCARE"))
      .set_override_option("port", std::env::var("PORT").ok())?
      .set_override_option("secret_key", std::env::var("SECRET_KEY").ok())?
      .build()?
      .try_deserialize()
  }

  /// Where the SQLite store lives.
  pub fn database_path(&self) -> PathBuf {
    self
      .database
      .clone()
      .unwrap_or_else(|| self.instance_path.join(DATABASE_FILE_NAME))
  }

  pub fn listen_address(&self) -> String { format!("{}:{}", self.host, self.port) }

  pub fn uses_default_secret(&self) -> bool { self.secret_key == DEFAULT_SECRET_KEY }
}

// ─── Storage directory ────────────────────────────────────────────────────────

/// Create the directory that will hold `database_path`.
///
/// Failure is only logged: if the directory is really unusable, opening the
/// store reports it.
pub fn prepare_storage_dir(database_path: &Path) {
  let Some(dir) = database_path
    .parent()
    .filter(|p| !p.as_os_str().is_empty())
  else {
    return;
  };

  if let Err(e) = std::fs::create_dir_all(dir) {
    tracing::warn!(dir = %dir.display(), error = %e, "could not create storage directory");
  }
}

// ─── Application ──────────────────────────────────────────────────────────────

/// Build the complete application router for `store`.
pub fn app<S>(config: &ServerConfig, store: Arc<S>) -> Router
where
  S: AppointmentStore + 'static,
{
  let landing_page = ServeFile::new(config.templates_dir.join("index.html"));

  pawcare_api::api_router(store)
    .route_service("/", landing_page)
    .nest_service("/static", ServeDir::new(&config.static_dir))
    .layer(TraceLayer::new_for_http())
}

// ─── Tests ────────────────────────────────────────────────────────────────────

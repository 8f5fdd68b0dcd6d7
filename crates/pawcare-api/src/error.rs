//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use pawcare_core::intake::MissingFields;
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  /// Required intake fields were empty. Reported to the caller verbatim.
  #[error(transparent)]
  Validation(#[from] MissingFields),

  /// The store failed. Logged here; the caller only sees a generic 500.
  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    match self {
      ApiError::Validation(missing) => (
        StatusCode::BAD_REQUEST,
        Json(json!({
          "ok": false,
          "error": "Missing required fields",
          "missing": missing.fields(),
        })),
      )
        .into_response(),
      ApiError::Store(e) => {
        tracing::error!(error = %e, "appointment store failure");
        (
          StatusCode::INTERNAL_SERVER_ERROR,
          Json(json!({ "ok": false, "error": "Internal server error" })),
        )
          .into_response()
      }
    }
  }
}

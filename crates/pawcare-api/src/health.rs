//! Liveness probe and the admin shortcut.

use axum::{
  Json,
  http::{StatusCode, header},
  response::IntoResponse,
};
use serde_json::{Value, json};

use crate::APPOINTMENTS_PATH;

/// `GET /health`: constant payload, no side effects.
pub async fn handler() -> Json<Value> { Json(json!({ "status": "ok" })) }

/// `GET /admin`: there is no separate admin view; send the caller to the
/// JSON listing with a `302 Found`.
pub async fn admin_redirect() -> impl IntoResponse {
  (StatusCode::FOUND, [(header::LOCATION, APPOINTMENTS_PATH)])
}

//! Handlers for `/api/appointments`.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/api/appointments` | Every appointment, newest first |
//! | `POST` | `/api/appointments` | JSON or form body; returns `{"ok": true}` |

use std::sync::Arc;

use axum::{Json, extract::State};
use chrono::Utc;
use pawcare_core::{appointment::Appointment, store::AppointmentStore};
use serde_json::{Value, json};

use crate::{body::IntakeBody, error::ApiError};

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /api/appointments`
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<Appointment>>, ApiError>
where
  S: AppointmentStore,
{
  let appointments = store
    .list_all()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(appointments))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /api/appointments`: validates the intake and stores it as
/// `pending`. A 400 lists the missing fields; nothing is written in that case.
pub async fn create<S>(
  State(store): State<Arc<S>>,
  IntakeBody(form): IntakeBody,
) -> Result<Json<Value>, ApiError>
where
  S: AppointmentStore,
{
  let appointment = form.validate(Utc::now()).inspect_err(|missing| {
    tracing::debug!(%missing, "rejected appointment request");
  })?;

  let id = store
    .insert(appointment)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;

  tracing::info!(id, "appointment request recorded");
  Ok(Json(json!({ "ok": true })))
}

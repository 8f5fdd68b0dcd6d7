//! Appointment: the single persisted entity.
//!
//! An appointment is written once by the intake and never updated. The
//! listing endpoint serializes [`Appointment`] directly, so field order here
//! is the wire order.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Error;

// ─── Status ──────────────────────────────────────────────────────────────────

/// Workflow status of an appointment. Every record is created `Pending` and
/// nothing moves it elsewhere.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
  #[default]
  Pending,
}

impl AppointmentStatus {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Pending => "pending",
    }
  }
}

impl fmt::Display for AppointmentStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for AppointmentStatus {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "pending" => Ok(Self::Pending),
      other => Err(Error::UnknownStatus(other.to_owned())),
    }
  }
}

// ─── Appointment ─────────────────────────────────────────────────────────────

/// A stored booking request, as returned by
/// [`AppointmentStore::list_all`](crate::store::AppointmentStore::list_all).
///
/// `name`, `email` and `message` are nullable columns; rows written by the
/// intake always carry a (possibly empty) string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
  pub id:         i64,
  pub name:       Option<String>,
  pub phone:      String,
  pub email:      Option<String>,
  pub pet_type:   String,
  pub service:    String,
  pub date:       String,
  pub time:       String,
  pub message:    Option<String>,
  pub status:     AppointmentStatus,
  /// Server-assigned; never changes after creation.
  pub created_at: DateTime<Utc>,
}

// ─── NewAppointment ──────────────────────────────────────────────────────────

/// Input to [`AppointmentStore::insert`](crate::store::AppointmentStore::insert).
///
/// Only produced by [`IntakeForm::validate`](crate::intake::IntakeForm::validate),
/// so the required fields are already known to be non-empty. `id` and
/// `status` are assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAppointment {
  pub name:       String,
  pub phone:      String,
  pub email:      String,
  pub pet_type:   String,
  pub service:    String,
  pub date:       String,
  pub time:       String,
  pub message:    String,
  pub created_at: DateTime<Utc>,
}

//! Intake normalization and validation.
//!
//! A booking request may arrive as a JSON object or as URL-encoded form
//! fields, and some clients send `pet_type` instead of `petType`. Both shapes
//! are folded into one [`IntakeForm`] before any validation runs:
//!
//! 1. each field has an ordered list of accepted keys; the first key holding
//!    a non-empty string wins,
//! 2. the winning value is trimmed,
//! 3. absent fields become the empty string.
//!
//! [`IntakeForm::validate`] then checks the required set and produces a
//! [`NewAppointment`] ready for the store.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::appointment::NewAppointment;

// ─── Accepted keys ───────────────────────────────────────────────────────────

const NAME_KEYS:     &[&str] = &["name"];
const PHONE_KEYS:    &[&str] = &["phone"];
const EMAIL_KEYS:    &[&str] = &["email"];
const PET_TYPE_KEYS: &[&str] = &["petType", "pet_type"];
const SERVICE_KEYS:  &[&str] = &["service"];
const DATE_KEYS:     &[&str] = &["date"];
const TIME_KEYS:     &[&str] = &["time"];
const MESSAGE_KEYS:  &[&str] = &["message"];

// ─── Required fields ─────────────────────────────────────────────────────────

/// A field that must be non-empty after trimming.
///
/// Serializes as its external (request) key, e.g. `petType`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RequiredField {
  #[serde(rename = "phone")]
  Phone,
  #[serde(rename = "petType")]
  PetType,
  #[serde(rename = "service")]
  Service,
  #[serde(rename = "date")]
  Date,
  #[serde(rename = "time")]
  Time,
}

impl RequiredField {
  /// Reporting order for missing fields.
  pub const ALL: [Self; 5] =
    [Self::Phone, Self::PetType, Self::Service, Self::Date, Self::Time];

  pub fn external_name(self) -> &'static str {
    match self {
      Self::Phone => "phone",
      Self::PetType => "petType",
      Self::Service => "service",
      Self::Date => "date",
      Self::Time => "time",
    }
  }
}

impl fmt::Display for RequiredField {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.external_name())
  }
}

/// Validation failure: the listed required fields were empty.
///
/// Always non-empty and ordered as [`RequiredField::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("missing required fields: {}", join_names(.0))]
pub struct MissingFields(pub Vec<RequiredField>);

impl MissingFields {
  pub fn fields(&self) -> &[RequiredField] { &self.0 }
}

fn join_names(fields: &[RequiredField]) -> String {
  fields
    .iter()
    .map(|f| f.external_name())
    .collect::<Vec<_>>()
    .join(", ")
}

// ─── IntakeForm ──────────────────────────────────────────────────────────────

/// A booking request after normalization. Every value is trimmed; absent
/// fields are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntakeForm {
  pub name:     String,
  pub phone:    String,
  pub email:    String,
  pub pet_type: String,
  pub service:  String,
  pub date:     String,
  pub time:     String,
  pub message:  String,
}

impl IntakeForm {
  /// Build a form from any key lookup. `lookup` returns the raw value for a
  /// key, or `None` if the key is absent or unusable.
  pub fn from_lookup<'a, F>(lookup: F) -> Self
  where
    F: Fn(&str) -> Option<&'a str>,
  {
    let resolve = |keys: &[&str]| -> String {
      keys
        .iter()
        .filter_map(|&k| lookup(k))
        .find(|v| !v.is_empty())
        .map(|v| v.trim().to_owned())
        .unwrap_or_default()
    };

    Self {
      name:     resolve(NAME_KEYS),
      phone:    resolve(PHONE_KEYS),
      email:    resolve(EMAIL_KEYS),
      pet_type: resolve(PET_TYPE_KEYS),
      service:  resolve(SERVICE_KEYS),
      date:     resolve(DATE_KEYS),
      time:     resolve(TIME_KEYS),
      message:  resolve(MESSAGE_KEYS),
    }
  }

  /// Normalize a JSON object. Non-string values count as absent.
  pub fn from_json_object(
    object: &serde_json::Map<String, serde_json::Value>,
  ) -> Self {
    Self::from_lookup(|key| object.get(key).and_then(serde_json::Value::as_str))
  }

  /// Normalize decoded form pairs. The first occurrence of a key wins.
  pub fn from_form_pairs(pairs: &[(String, String)]) -> Self {
    Self::from_lookup(|key| {
      pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
    })
  }

  fn value_of(&self, field: RequiredField) -> &str {
    match field {
      RequiredField::Phone => &self.phone,
      RequiredField::PetType => &self.pet_type,
      RequiredField::Service => &self.service,
      RequiredField::Date => &self.date,
      RequiredField::Time => &self.time,
    }
  }

  /// Required fields that are empty, in reporting order.
  pub fn missing_fields(&self) -> Vec<RequiredField> {
    RequiredField::ALL
      .into_iter()
      .filter(|f| self.value_of(*f).is_empty())
      .collect()
  }

  /// Check the required set and stamp the record with `created_at`.
  pub fn validate(
    self,
    created_at: DateTime<Utc>,
  ) -> Result<NewAppointment, MissingFields> {
    let missing = self.missing_fields();
    if !missing.is_empty() {
      return Err(MissingFields(missing));
    }

    Ok(NewAppointment {
      name: self.name,
      phone: self.phone,
      email: self.email,
      pet_type: self.pet_type,
      service: self.service,
      date: self.date,
      time: self.time,
      message: self.message,
      created_at,
    })
  }
}

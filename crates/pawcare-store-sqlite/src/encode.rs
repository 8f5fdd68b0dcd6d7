//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are written as RFC 3339 strings with microsecond precision and
//! a `Z` suffix. Older stores hold naive ISO 8601 strings with no offset;
//! those are read as UTC.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use pawcare_core::appointment::{Appointment, AppointmentStatus};

use crate::{Error, Result};

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String {
  dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
    return Ok(dt.with_timezone(&Utc));
  }
  NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
    .map(|naive| naive.and_utc())
    .map_err(|e| Error::DateParse(format!("{s:?}: {e}")))
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Column list shared by every `SELECT` against `appointments`, in the order
/// [`RawAppointment::from_row`] expects.
pub const APPOINTMENT_COLUMNS: &str =
  "id, name, phone, email, pet_type, service, date, time, message, status, created_at";

/// Raw values read directly from an `appointments` row.
pub struct RawAppointment {
  pub id:         i64,
  pub name:       Option<String>,
  pub phone:      String,
  pub email:      Option<String>,
  pub pet_type:   String,
  pub service:    String,
  pub date:       String,
  pub time:       String,
  pub message:    Option<String>,
  pub status:     String,
  pub created_at: String,
}

impl RawAppointment {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:         row.get(0)?,
      name:       row.get(1)?,
      phone:      row.get(2)?,
      email:      row.get(3)?,
      pet_type:   row.get(4)?,
      service:    row.get(5)?,
      date:       row.get(6)?,
      time:       row.get(7)?,
      message:    row.get(8)?,
      status:     row.get(9)?,
      created_at: row.get(10)?,
    })
  }

  pub fn into_appointment(self) -> Result<Appointment> {
    Ok(Appointment {
      id:         self.id,
      name:       self.name,
      phone:      self.phone,
      email:      self.email,
      pet_type:   self.pet_type,
      service:    self.service,
      date:       self.date,
      time:       self.time,
      message:    self.message,
      status:     self.status.parse::<AppointmentStatus>()?,
      created_at: decode_dt(&self.created_at)?,
    })
  }
}

#[cfg(test)]
mod tests {
  use chrono::{TimeZone, Timelike};

  use super::*;

  #[test]
  fn encodes_utc_with_micros_and_z() {
    let dt = Utc
      .with_ymd_and_hms(2024, 6, 1, 9, 30, 0)
      .unwrap()
      .with_nanosecond(123_456_000)
      .unwrap();
    assert_eq!(encode_dt(dt), "2024-06-01T09:30:00.123456Z");
    assert_eq!(decode_dt(&encode_dt(dt)).unwrap(), dt);
  }

  #[test]
  fn decodes_offset_timestamps_into_utc() {
    let dt = decode_dt("2024-06-01T11:30:00+02:00").unwrap();
    assert_eq!(dt, Utc.with_ymd_and_hms(2024, 6, 1, 9, 30, 0).unwrap());
  }

  #[test]
  fn decodes_naive_timestamps_as_utc() {
    let dt = decode_dt("2024-06-01T09:30:00.654321").unwrap();
    assert_eq!(dt.hour(), 9);
    assert_eq!(dt.nanosecond(), 654_321_000);

    let dt = decode_dt("2024-06-01T09:30:00").unwrap();
    assert_eq!(dt, Utc.with_ymd_and_hms(2024, 6, 1, 9, 30, 0).unwrap());
  }

  #[test]
  fn rejects_garbage_timestamps() {
    assert!(matches!(decode_dt("yesterday"), Err(Error::DateParse(_))));
  }

  #[test]
  fn unknown_status_fails_to_decode() {
    let raw = RawAppointment {
      id:         1,
      name:       None,
      phone:      "555".into(),
      email:      None,
      pet_type:   "dog".into(),
      service:    "Walk".into(),
      date:       "2024-06-01".into(),
      time:       "10:00".into(),
      message:    None,
      status:     "archived".into(),
      created_at: "2024-06-01T09:30:00Z".into(),
    };
    assert!(matches!(
      raw.into_appointment(),
      Err(Error::Core(pawcare_core::Error::UnknownStatus(_)))
    ));
  }
}

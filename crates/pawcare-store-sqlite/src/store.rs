//! [`SqliteStore`]: the SQLite implementation of [`AppointmentStore`].

use std::path::Path;

use pawcare_core::{
  appointment::{Appointment, AppointmentStatus, NewAppointment},
  store::AppointmentStore,
};

use crate::{
  encode::{encode_dt, RawAppointment, APPOINTMENT_COLUMNS},
  schema::SCHEMA,
  Error, Result,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// An appointment store backed by a single SQLite file.
///
/// Cloning is cheap; the inner connection is reference-counted. All
/// statements run one at a time on the connection's background thread, so
/// inserts commit in the order they are submitted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store, mainly for tests.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── AppointmentStore impl ───────────────────────────────────────────────────

impl AppointmentStore for SqliteStore {
  type Error = Error;

  async fn ensure_schema(&self) -> Result<()> { self.init_schema().await }

  async fn insert(&self, appointment: NewAppointment) -> Result<i64> {
    let created_at_str = encode_dt(appointment.created_at);
    let status_str     = AppointmentStatus::Pending.as_str();

    let id = self
      .conn
      .call(move |conn| {
        let id: i64 = conn.query_row(
          "INSERT INTO appointments (
             name, phone, email, pet_type, service,
             date, time, message, status, created_at
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
           RETURNING id",
          rusqlite::params![
            appointment.name,
            appointment.phone,
            appointment.email,
            appointment.pet_type,
            appointment.service,
            appointment.date,
            appointment.time,
            appointment.message,
            status_str,
            created_at_str,
          ],
          |row| row.get(0),
        )?;
        Ok(id)
      })
      .await?;

    Ok(id)
  }

  async fn list_all(&self) -> Result<Vec<Appointment>> {
    let raws: Vec<RawAppointment> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {APPOINTMENT_COLUMNS} FROM appointments ORDER BY id DESC"
        ))?;
        let rows = stmt
          .query_map([], RawAppointment::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawAppointment::into_appointment).collect()
  }
}

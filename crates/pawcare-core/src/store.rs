//! The `AppointmentStore` trait.
//!
//! Implemented by storage backends (e.g. `pawcare-store-sqlite`). The API
//! layer depends on this abstraction, not on any concrete backend.

use std::future::Future;

use crate::appointment::{Appointment, NewAppointment};

/// Abstraction over an appointment store backend.
///
/// The store only appends and lists; there is no update or delete. Business
/// validation happens before [`insert`](Self::insert) is called, so a backend
/// enforces nothing beyond its schema constraints.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait AppointmentStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Create the appointments table if it does not exist. Safe to call on
  /// every start; an existing table and its rows are left untouched.
  fn ensure_schema(&self) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Append one appointment with `pending` status and return its id.
  fn insert(
    &self,
    appointment: NewAppointment,
  ) -> impl Future<Output = Result<i64, Self::Error>> + Send + '_;

  /// Every stored appointment, most recently created (highest id) first.
  fn list_all(&self) -> impl Future<Output = Result<Vec<Appointment>, Self::Error>> + Send + '_;
}

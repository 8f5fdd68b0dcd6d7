//! JSON HTTP API for PawCare booking intake.
//!
//! Exposes an axum [`Router`] backed by any
//! [`pawcare_core::store::AppointmentStore`]. Page rendering, static assets and
//! transport concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let app = pawcare_api::api_router(store.clone()).merge(pages);
//! ```

pub mod appointments;
pub mod body;
pub mod error;
pub mod health;

use std::sync::Arc;

use axum::{Router, routing::get};
use pawcare_core::store::AppointmentStore;

pub use error::ApiError;

/// Path of the appointment collection; `/admin` redirects here.
pub const APPOINTMENTS_PATH: &str = "/api/appointments";

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be merged into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: AppointmentStore + 'static,
{
  Router::new()
    .route("/health", get(health::handler))
    .route(
      APPOINTMENTS_PATH,
      get(appointments::list::<S>).post(appointments::create::<S>),
    )
    .route("/admin", get(health::admin_redirect))
    .with_state(store)
}

// ─── Integration tests ────────────────────────────────────────────────────────

//! Integration tests for `SqliteStore` against in-memory and on-disk databases.

use std::path::PathBuf;

use chrono::{Duration, Utc};
use pawcare_core::{
  appointment::{AppointmentStatus, NewAppointment},
  store::AppointmentStore,
};

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn booking(name: &str, service: &str) -> NewAppointment {
  NewAppointment {
    name:       name.into(),
    phone:      "555-1234".into(),
    email:      format!("{}@example.com", name.to_lowercase()),
    pet_type:   "dog".into(),
    service:    service.into(),
    date:       "2024-06-01".into(),
    time:       "10:00".into(),
    message:    String::new(),
    created_at: Utc::now(),
  }
}

/// A fresh database path under the system temp directory.
fn temp_db_path(label: &str) -> PathBuf {
  let unique = format!(
    "pawcare-{label}-{}-{}.db",
    std::process::id(),
    Utc::now().timestamp_nanos_opt().unwrap_or_default(),
  );
  std::env::temp_dir().join(unique)
}

fn remove_db(path: &PathBuf) {
  for suffix in ["", "-wal", "-shm"] {
    let mut p = path.clone().into_os_string();
    p.push(suffix);
    let _ = std::fs::remove_file(p);
  }
}

// ─── Insert ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn empty_store_lists_nothing() {
  let s = store().await;
  assert!(s.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn insert_and_list_round_trip() {
  let s = store().await;
  let input = booking("Ada", "Grooming");

  let id = s.insert(input.clone()).await.unwrap();

  let all = s.list_all().await.unwrap();
  assert_eq!(all.len(), 1);
  let stored = &all[0];
  assert_eq!(stored.id, id);
  assert_eq!(stored.name.as_deref(), Some("Ada"));
  assert_eq!(stored.phone, "555-1234");
  assert_eq!(stored.email.as_deref(), Some("ada@example.com"));
  assert_eq!(stored.pet_type, "dog");
  assert_eq!(stored.service, "Grooming");
  assert_eq!(stored.date, "2024-06-01");
  assert_eq!(stored.time, "10:00");
  assert_eq!(stored.message.as_deref(), Some(""));
  assert_eq!(stored.status, AppointmentStatus::Pending);
}

#[tokio::test]
async fn created_at_survives_at_microsecond_precision() {
  let s = store().await;
  let input = booking("Ada", "Grooming");
  let created_at = input.created_at;

  s.insert(input).await.unwrap();

  // Sub-microsecond digits are truncated on write.
  let stored = s.list_all().await.unwrap().remove(0).created_at;
  let lost = created_at - stored;
  assert!(lost >= Duration::zero() && lost < Duration::microseconds(1), "{lost}");
}

#[tokio::test]
async fn ids_increase_with_each_insert() {
  let s = store().await;
  let a = s.insert(booking("A", "Walk")).await.unwrap();
  let b = s.insert(booking("B", "Walk")).await.unwrap();
  let c = s.insert(booking("C", "Walk")).await.unwrap();
  assert!(a < b && b < c, "ids: {a}, {b}, {c}");
}

// ─── Listing ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn list_is_newest_first() {
  let s = store().await;
  for name in ["A", "B", "C"] {
    s.insert(booking(name, "Boarding")).await.unwrap();
  }

  let names: Vec<String> = s
    .list_all()
    .await
    .unwrap()
    .into_iter()
    .filter_map(|a| a.name)
    .collect();
  assert_eq!(names, ["C", "B", "A"]);
}

#[tokio::test]
async fn concurrent_inserts_all_land_with_distinct_ids() {
  let s = store().await;
  let handles: Vec<_> = (0..16)
    .map(|i| {
      let s = s.clone();
      tokio::spawn(async move { s.insert(booking(&format!("P{i}"), "Walk")).await })
    })
    .collect();

  let mut ids = Vec::new();
  for h in handles {
    ids.push(h.await.unwrap().unwrap());
  }
  ids.sort_unstable();
  ids.dedup();
  assert_eq!(ids.len(), 16);

  let listed: Vec<i64> = s.list_all().await.unwrap().iter().map(|a| a.id).collect();
  assert_eq!(listed.len(), 16);
  assert!(listed.windows(2).all(|w| w[0] > w[1]));
}

// ─── Schema ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn ensure_schema_is_idempotent() {
  let s = store().await;
  s.insert(booking("Ada", "Grooming")).await.unwrap();

  s.ensure_schema().await.unwrap();
  s.ensure_schema().await.unwrap();

  let all = s.list_all().await.unwrap();
  assert_eq!(all.len(), 1);
  assert_eq!(all[0].name.as_deref(), Some("Ada"));
}

#[tokio::test]
async fn reopening_a_file_store_keeps_rows_and_continues_ids() {
  let path = temp_db_path("reopen");

  let first_id = {
    let s = SqliteStore::open(&path).await.unwrap();
    s.insert(booking("Ada", "Grooming")).await.unwrap()
  };

  let s = SqliteStore::open(&path).await.unwrap();
  let second_id = s.insert(booking("Bo", "Walk")).await.unwrap();
  let all = s.list_all().await.unwrap();
  drop(s);
  remove_db(&path);

  assert!(second_id > first_id);
  assert_eq!(all.len(), 2);
  assert_eq!(all[1].name.as_deref(), Some("Ada"));
}

#[tokio::test]
async fn open_in_missing_directory_fails() {
  let path = std::env::temp_dir()
    .join(format!("pawcare-missing-{}", std::process::id()))
    .join("nested")
    .join("petcare.db");

  assert!(SqliteStore::open(&path).await.is_err());
}

//! SQL schema for the PawCare SQLite store.
//!
//! There is no migration framework: the single table is created if absent and
//! otherwise left as is.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- Rows are only ever inserted; no UPDATE or DELETE is issued.
CREATE TABLE IF NOT EXISTS appointments (
    id         INTEGER PRIMARY KEY AUTOINCREMENT,
    name       TEXT,
    phone      TEXT NOT NULL,
    email      TEXT,
    pet_type   TEXT NOT NULL,
    service    TEXT NOT NULL,
    date       TEXT NOT NULL,
    time       TEXT NOT NULL,
    message    TEXT,
    status     TEXT NOT NULL DEFAULT 'pending',
    created_at TEXT NOT NULL    -- ISO 8601 UTC; server-assigned
);
";

//! Database schema for Sampler.
//!
//! Every statement is idempotent and runs on each startup. Neither table
//! carries a uniqueness constraint: duplicate publisher ids and duplicate
//! external ids are stored as separate rows.

/// Schema statements for SQLite.
#[cfg(feature = "sqlite")]
pub const SCHEMA: &[&str] = &[
    r#"
CREATE TABLE IF NOT EXISTS publishers (
    id            INTEGER PRIMARY KEY AUTOINCREMENT,
    publisher_id  TEXT NOT NULL,
    name          TEXT NOT NULL
)
"#,
    r#"
CREATE TABLE IF NOT EXISTS media_items (
    id             INTEGER PRIMARY KEY AUTOINCREMENT,
    external_id    TEXT NOT NULL,
    title          TEXT NOT NULL,
    channel_name   TEXT NOT NULL,
    discovered_at  TEXT NOT NULL
)
"#,
];

/// Schema statements for PostgreSQL.
#[cfg(all(feature = "postgres", not(feature = "sqlite")))]
pub const SCHEMA: &[&str] = &[
    r#"
CREATE TABLE IF NOT EXISTS publishers (
    id            BIGSERIAL PRIMARY KEY,
    publisher_id  TEXT NOT NULL,
    name          TEXT NOT NULL
)
"#,
    r#"
CREATE TABLE IF NOT EXISTS media_items (
    id             BIGSERIAL PRIMARY KEY,
    external_id    TEXT NOT NULL,
    title          TEXT NOT NULL,
    channel_name   TEXT NOT NULL,
    discovered_at  TEXT NOT NULL
)
"#,
];

//! Database module: models, schema and queries for persistent storage.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL for initializing the database
//! - `sqlite.rs`: pool setup, schema bootstrap and admin seeding
//! - `repo.rs`: per-request queries over a single pooled connection

pub mod models;
pub mod repo;
pub mod schema;
pub mod sqlite;

pub use models::{Application, Document, DocumentKind, NewApplication, User};
pub use schema::SQLITE_INIT;
pub use sqlite::{SiteStorage, SqlitePool};

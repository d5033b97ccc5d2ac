use std::sync::Arc;

use chrono::NaiveDate;
use tempfile::TempDir;

use crate::db::{create_pool, init, run_migrations, spawn_writer, DbPool, WriteHandle};

pub const USER: &str = "user-1";
pub const OTHER_USER: &str = "user-2";

/// A migrated database in a temp directory. Keep the `TempDir` alive for the
/// duration of the test.
pub fn setup_db() -> (Arc<DbPool>, WriteHandle, TempDir) {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let db_path = temp_dir.path().join("test.db");
    let db_path = init(&db_path.to_string_lossy()).expect("Failed to init database");
    let pool = create_pool(&db_path).expect("Failed to create pool");
    run_migrations(&pool).expect("Failed to run migrations");
    let writer = spawn_writer((*pool).clone());
    (pool, writer, temp_dir)
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

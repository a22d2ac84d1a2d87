//! SQLite connection and schema setup.

use crate::error::AppError;
use rusqlite::Connection;
use std::path::Path;
use std::sync::Mutex;

/// Store handle shared by every use case. One connection, no pooling.
pub struct DbPool(pub Mutex<Connection>);

const SCHEMA: &str = include_str!("../../migrations/0001_init.sql");

/// Initialize DB at path, create tables if absent, return managed pool.
pub fn init_db(db_path: &Path) -> Result<DbPool, AppError> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let conn = Connection::open(db_path)?;
    prepare_connection(&conn)?;
    log::info!("DB ready at {:?}", db_path);
    Ok(DbPool(Mutex::new(conn)))
}

/// In-memory database with the full schema, for tests.
pub fn init_test_db() -> DbPool {
    let conn = Connection::open_in_memory().expect("open in-memory db");
    prepare_connection(&conn).expect("schema");
    DbPool(Mutex::new(conn))
}

/// Bundled SQLite enables foreign keys by default; emp_id references stay unchecked.
fn prepare_connection(conn: &Connection) -> Result<(), AppError> {
    conn.pragma_update(None, "foreign_keys", false)?;
    create_schema(conn)
}

/// `CREATE TABLE IF NOT EXISTS` only: existing rows are never touched.
fn create_schema(conn: &Connection) -> Result<(), AppError> {
    conn.execute_batch(SCHEMA)?;
    Ok(())
}

/// Lock the single connection. A poisoned lock still yields the connection.
pub fn get_connection(pool: &DbPool) -> std::sync::MutexGuard<'_, Connection> {
    pool.0.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

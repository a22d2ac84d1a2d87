//! Infrastructure: SQLite connection and schema.

pub mod db;

pub(crate) use db::get_connection;
pub use db::{init_db, DbPool};

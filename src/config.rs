//! Runtime configuration: database location and log level.

use std::path::PathBuf;

pub const DB_FILE_NAME: &str = "employees.db";

fn app_data_dir() -> PathBuf {
    let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("worktrack")
}

#[derive(Debug, Clone)]
pub struct Config {
    pub db_path: PathBuf,
    pub log_filter: &'static str,
}

impl Config {
    /// `db` comes from `--db` or `WORKTRACK_DB`; otherwise the per-user data dir is used.
    pub fn resolve(db: Option<PathBuf>, verbose: u8) -> Self {
        Self {
            db_path: db.unwrap_or_else(|| app_data_dir().join(DB_FILE_NAME)),
            log_filter: match verbose {
                0 => "warn",
                1 => "info",
                _ => "debug",
            },
        }
    }
}

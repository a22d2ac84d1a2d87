//! Write-time stamps for attendance and task rows.

use chrono::{DateTime, Local};

/// `attendance.date` layout.
pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// `tasks.completed_on` layout.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn date_stamp(at: DateTime<Local>) -> String {
    at.format(DATE_FORMAT).to_string()
}

pub fn datetime_stamp(at: DateTime<Local>) -> String {
    at.format(DATETIME_FORMAT).to_string()
}

pub fn today() -> String {
    date_stamp(Local::now())
}

pub fn now() -> String {
    datetime_stamp(Local::now())
}

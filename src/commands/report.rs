use crate::app::{
    attendance_recent, employee_list, report_build, task_recent, task_summary, RECENT_ROWS,
};
use crate::cli::output;
use crate::error::AppError;
use crate::infra::DbPool;
use serde_json::json;
use std::io::Write;

/// Shown in place of whatever sections could not be loaded.
pub const REPORT_ERROR: &str = "Could not load reports.";

/// Render every section, re-querying all tables. Sections already written stay
/// on screen if a later query fails. Returns `false` when a query failed.
pub fn cmd_report<W: Write>(pool: &DbPool, out: &mut W) -> Result<bool, AppError> {
    writeln!(out, "Weekly Reports")?;
    match write_sections(pool, out) {
        Ok(()) => Ok(true),
        Err(AppError::Io(e)) => Err(AppError::Io(e)),
        Err(e) => {
            log::error!("report failed [{}]: {}", e.code(), e);
            writeln!(out, "{}", REPORT_ERROR)?;
            Ok(false)
        }
    }
}

fn write_sections<W: Write>(pool: &DbPool, out: &mut W) -> Result<(), AppError> {
    let employees = employee_list(pool)?;
    writeln!(out, "\nEmployees")?;
    output::write_employees(out, &employees)?;

    let attendance = attendance_recent(pool, RECENT_ROWS)?;
    writeln!(out, "\nAttendance (last {})", RECENT_ROWS)?;
    output::write_attendance(out, &attendance)?;

    let tasks = task_recent(pool, RECENT_ROWS)?;
    writeln!(out, "\nTasks (last {})", RECENT_ROWS)?;
    output::write_tasks(out, &tasks)?;

    let summary = task_summary(pool)?;
    writeln!(out, "\nCompleted tasks per employee")?;
    output::write_task_chart(out, &summary)?;
    Ok(())
}

/// JSON form of the report. A failed query prints `{"error": REPORT_ERROR}` and returns `false`.
pub fn cmd_report_json<W: Write>(pool: &DbPool, out: &mut W) -> Result<bool, AppError> {
    let body = match report_build(pool) {
        Ok(report) => serde_json::to_value(&report),
        Err(AppError::Io(e)) => return Err(AppError::Io(e)),
        Err(e) => {
            log::error!("report failed [{}]: {}", e.code(), e);
            Ok(json!({ "error": REPORT_ERROR }))
        }
    }
    .map_err(|e| AppError::Io(format!("JSON serialization failed: {}", e)))?;
    let complete = body.get("error").is_none();
    serde_json::to_writer_pretty(&mut *out, &body)
        .map_err(|e| AppError::Io(format!("JSON serialization failed: {}", e)))?;
    writeln!(out)?;
    Ok(complete)
}

use crate::app::{export_attendance_csv, export_employees_csv, export_json_string, export_tasks_csv};
use crate::error::AppError;
use crate::infra::DbPool;
use clap::ValueEnum;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// All tables as one JSON document
    Json,
    /// employees table as CSV
    Employees,
    /// attendance table as CSV
    Attendance,
    /// tasks table as CSV
    Tasks,
}

pub fn export_string(pool: &DbPool, format: ExportFormat) -> Result<String, AppError> {
    match format {
        ExportFormat::Json => export_json_string(pool),
        ExportFormat::Employees => export_employees_csv(pool),
        ExportFormat::Attendance => export_attendance_csv(pool),
        ExportFormat::Tasks => export_tasks_csv(pool),
    }
}

/// Write the export to `dest`, or to `out` when no file is given.
pub fn cmd_export<W: Write>(
    pool: &DbPool,
    out: &mut W,
    format: ExportFormat,
    dest: Option<&Path>,
) -> Result<(), AppError> {
    let body = export_string(pool, format)?;
    match dest {
        Some(path) => {
            std::fs::write(path, body)?;
            log::info!("exported {:?} to {:?}", format, path);
            writeln!(out, "Exported to {}", path.display())?;
        }
        None if body.ends_with('\n') => write!(out, "{}", body)?,
        None => writeln!(out, "{}", body)?,
    }
    Ok(())
}

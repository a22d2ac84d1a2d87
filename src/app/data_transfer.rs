//! Export use cases: all tables as one JSON document, or one table as CSV.

use super::attendance::{attendance_list, AttendanceDto};
use super::employee::{employee_list, EmployeeDto};
use super::task::{task_list, TaskDto};
use crate::error::AppError;
use crate::infra::DbPool;
use chrono::Utc;
use serde::Serialize;

pub const EXPORT_SCHEMA_VERSION: i32 = 1;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRoot {
    pub schema_version: i32,
    pub exported_at: String,
    pub employees: Vec<EmployeeDto>,
    pub attendance: Vec<AttendanceDto>,
    pub tasks: Vec<TaskDto>,
}

/// Export all data as JSON string
pub fn export_json_string(pool: &DbPool) -> Result<String, AppError> {
    let export_root = ExportRoot {
        schema_version: EXPORT_SCHEMA_VERSION,
        exported_at: Utc::now().to_rfc3339(),
        employees: employee_list(pool)?,
        attendance: attendance_list(pool)?,
        tasks: task_list(pool)?,
    };

    serde_json::to_string_pretty(&export_root)
        .map_err(|e| AppError::Db(format!("JSON serialization failed: {}", e)))
}

pub fn export_employees_csv(pool: &DbPool) -> Result<String, AppError> {
    let rows = employee_list(pool)?;
    Ok(to_csv(
        &["emp_id", "name", "department"],
        rows.iter().map(|e: &EmployeeDto| {
            vec![e.emp_id.to_string(), e.name.clone(), e.department.clone()]
        }),
    ))
}

pub fn export_attendance_csv(pool: &DbPool) -> Result<String, AppError> {
    let rows = attendance_list(pool)?;
    Ok(to_csv(
        &["emp_id", "date", "check_in", "check_out"],
        rows.iter().map(|a: &AttendanceDto| {
            vec![
                a.emp_id.to_string(),
                a.date.clone(),
                a.check_in.clone(),
                a.check_out.clone(),
            ]
        }),
    ))
}

pub fn export_tasks_csv(pool: &DbPool) -> Result<String, AppError> {
    let rows = task_list(pool)?;
    Ok(to_csv(
        &["task_id", "emp_id", "task_description", "completed_on"],
        rows.iter().map(|t: &TaskDto| {
            vec![
                t.task_id.to_string(),
                t.emp_id.to_string(),
                t.task_description.clone(),
                t.completed_on.clone(),
            ]
        }),
    ))
}

fn to_csv<I>(header: &[&str], rows: I) -> String
where
    I: IntoIterator<Item = Vec<String>>,
{
    let mut out = header.join(",");
    out.push('\n');
    for row in rows {
        let line: Vec<String> = row.iter().map(|f| csv_escape(f)).collect();
        out.push_str(&line.join(","));
        out.push('\n');
    }
    out
}

fn csv_escape(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

//! Report use cases: table snapshots and per-employee task counts.

use super::attendance::{attendance_recent, AttendanceDto};
use super::employee::{employee_list, EmployeeDto};
use super::task::{task_recent, TaskDto};
use crate::error::AppError;
use crate::infra::{get_connection, DbPool};
use serde::Serialize;

/// Rows shown for attendance and tasks in a report.
pub const RECENT_ROWS: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskSummaryItemDto {
    pub emp_id: i64,
    pub name: String,
    pub task_count: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDto {
    pub employees: Vec<EmployeeDto>,
    pub recent_attendance: Vec<AttendanceDto>,
    pub recent_tasks: Vec<TaskDto>,
    pub task_summary: Vec<TaskSummaryItemDto>,
}

/// Completed-task count per employee, ordered by name.
///
/// Tasks whose `emp_id` matches no employee have no name to group under and
/// are left out, as are employees without tasks.
pub fn task_summary(pool: &DbPool) -> Result<Vec<TaskSummaryItemDto>, AppError> {
    let conn = get_connection(pool);
    let mut stmt = conn
        .prepare(
            "SELECT e.emp_id, COALESCE(e.name, ''), COUNT(t.task_id) AS task_count
             FROM tasks t
             JOIN employees e ON e.emp_id = t.emp_id
             GROUP BY e.emp_id
             ORDER BY e.name, e.emp_id",
        )
        .map_err(|e| AppError::Db(e.to_string()))?;
    let rows = stmt.query_map([], |r| {
        Ok(TaskSummaryItemDto {
            emp_id: r.get(0)?,
            name: r.get(1)?,
            task_count: r.get(2)?,
        })
    })?;
    let mut out = Vec::new();
    for r in rows {
        out.push(r.map_err(|e| AppError::Db(e.to_string()))?);
    }
    Ok(out)
}

/// Re-reads every table. Nothing is cached between calls.
pub fn report_build(pool: &DbPool) -> Result<ReportDto, AppError> {
    Ok(ReportDto {
        employees: employee_list(pool)?,
        recent_attendance: attendance_recent(pool, RECENT_ROWS)?,
        recent_tasks: task_recent(pool, RECENT_ROWS)?,
        task_summary: task_summary(pool)?,
    })
}

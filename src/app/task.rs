//! Task log use cases.

use crate::domain::form::{require_emp_id, require_text};
use crate::domain::stamp;
use crate::error::AppError;
use crate::infra::{get_connection, DbPool};
use rusqlite::params;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskLogReq {
    pub emp_id: i64,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDto {
    pub task_id: i64,
    pub emp_id: i64,
    pub task_description: String,
    pub completed_on: String,
}

const SELECT_COLUMNS: &str =
    "task_id, emp_id, COALESCE(task_description, ''), COALESCE(completed_on, '')";

fn map_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<TaskDto> {
    Ok(TaskDto {
        task_id: row.get(0)?,
        emp_id: row.get(1)?,
        task_description: row.get(2)?,
        completed_on: row.get(3)?,
    })
}

/// Record one completed task stamped with the current local date-time.
pub fn task_log(pool: &DbPool, req: TaskLogReq) -> Result<TaskDto, AppError> {
    let emp_id = require_emp_id(req.emp_id)?;
    let description = require_text("description", &req.description)?;
    let completed_on = stamp::now();

    let conn = get_connection(pool);
    conn.execute(
        "INSERT INTO tasks (emp_id, task_description, completed_on) VALUES (?1, ?2, ?3)",
        params![emp_id, description, &completed_on],
    )
    .map_err(|e| AppError::Db(e.to_string()))?;
    let task_id = conn.last_insert_rowid();
    log::debug!("task {} logged for employee {}", task_id, emp_id);

    Ok(TaskDto {
        task_id,
        emp_id,
        task_description: description.to_string(),
        completed_on,
    })
}

pub fn task_list(pool: &DbPool) -> Result<Vec<TaskDto>, AppError> {
    let conn = get_connection(pool);
    let sql = format!("SELECT {} FROM tasks ORDER BY task_id", SELECT_COLUMNS);
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([], map_row)?;
    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Last `limit` tasks, oldest first.
pub fn task_recent(pool: &DbPool, limit: usize) -> Result<Vec<TaskDto>, AppError> {
    let conn = get_connection(pool);
    let sql = format!(
        "SELECT {cols} FROM (SELECT * FROM tasks ORDER BY task_id DESC LIMIT ?1) ORDER BY task_id",
        cols = SELECT_COLUMNS
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([limit as i64], map_row)?;
    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn task_count(pool: &DbPool) -> Result<i64, AppError> {
    let conn = get_connection(pool);
    let n = conn.query_row("SELECT COUNT(*) FROM tasks", [], |r| r.get(0))?;
    Ok(n)
}

pub fn task_count_for_employee(pool: &DbPool, emp_id: i64) -> Result<i64, AppError> {
    let conn = get_connection(pool);
    let n = conn.query_row(
        "SELECT COUNT(*) FROM tasks WHERE emp_id = ?1",
        [emp_id],
        |r| r.get(0),
    )?;
    Ok(n)
}

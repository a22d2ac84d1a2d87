//! Attendance use cases. Rows are append-only and keyed by insertion order.

use crate::domain::form::{require_emp_id, require_text};
use crate::domain::stamp;
use crate::error::AppError;
use crate::infra::{get_connection, DbPool};
use rusqlite::params;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceLogReq {
    pub emp_id: i64,
    pub check_in: String,
    pub check_out: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceDto {
    pub emp_id: i64,
    pub date: String,
    pub check_in: String,
    pub check_out: String,
}

const SELECT_COLUMNS: &str =
    "emp_id, COALESCE(date, ''), COALESCE(check_in, ''), COALESCE(check_out, '')";

fn map_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<AttendanceDto> {
    Ok(AttendanceDto {
        emp_id: row.get(0)?,
        date: row.get(1)?,
        check_in: row.get(2)?,
        check_out: row.get(3)?,
    })
}

/// Record one attendance row stamped with today's date. Times are stored as typed.
pub fn attendance_log(pool: &DbPool, req: AttendanceLogReq) -> Result<AttendanceDto, AppError> {
    let emp_id = require_emp_id(req.emp_id)?;
    let check_in = require_text("check_in", &req.check_in)?;
    let check_out = require_text("check_out", &req.check_out)?;
    let date = stamp::today();

    let conn = get_connection(pool);
    conn.execute(
        "INSERT INTO attendance (emp_id, date, check_in, check_out) VALUES (?1, ?2, ?3, ?4)",
        params![emp_id, &date, check_in, check_out],
    )
    .map_err(|e| AppError::Db(e.to_string()))?;
    log::debug!("attendance recorded for employee {} on {}", emp_id, date);

    Ok(AttendanceDto {
        emp_id,
        date,
        check_in: check_in.to_string(),
        check_out: check_out.to_string(),
    })
}

pub fn attendance_list(pool: &DbPool) -> Result<Vec<AttendanceDto>, AppError> {
    let conn = get_connection(pool);
    let sql = format!("SELECT {} FROM attendance ORDER BY rowid", SELECT_COLUMNS);
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([], map_row)?;
    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Last `limit` rows, oldest first.
pub fn attendance_recent(pool: &DbPool, limit: usize) -> Result<Vec<AttendanceDto>, AppError> {
    let conn = get_connection(pool);
    let sql = format!(
        "SELECT {cols} FROM (SELECT rowid AS rid, * FROM attendance ORDER BY rowid DESC LIMIT ?1) ORDER BY rid",
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

pub fn attendance_count(pool: &DbPool) -> Result<i64, AppError> {
    let conn = get_connection(pool);
    let n = conn.query_row("SELECT COUNT(*) FROM attendance", [], |r| r.get(0))?;
    Ok(n)
}

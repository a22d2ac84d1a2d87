//! Employee use cases.

use crate::domain::form::require_text;
use crate::error::AppError;
use crate::infra::get_connection;
use crate::infra::DbPool;
use rusqlite::params;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeCreateReq {
    pub name: String,
    pub department: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDto {
    pub emp_id: i64,
    pub name: String,
    pub department: String,
}

pub fn employee_create(pool: &DbPool, req: EmployeeCreateReq) -> Result<EmployeeDto, AppError> {
    let name = require_text("name", &req.name)?;
    let department = require_text("department", &req.department)?;

    let conn = get_connection(pool);
    conn.execute(
        "INSERT INTO employees (name, department) VALUES (?1, ?2)",
        params![name, department],
    )
    .map_err(|e| AppError::Db(e.to_string()))?;
    let emp_id = conn.last_insert_rowid();
    log::debug!("employee {} added", emp_id);

    Ok(EmployeeDto {
        emp_id,
        name: name.to_string(),
        department: department.to_string(),
    })
}

pub fn employee_get(pool: &DbPool, emp_id: i64) -> Result<EmployeeDto, AppError> {
    let conn = get_connection(pool);
    conn.query_row(
        "SELECT emp_id, COALESCE(name, ''), COALESCE(department, '') FROM employees WHERE emp_id = ?1",
        [emp_id],
        |row| {
            Ok(EmployeeDto {
                emp_id: row.get(0)?,
                name: row.get(1)?,
                department: row.get(2)?,
            })
        },
    )
    .map_err(|e| match e {
        rusqlite::Error::QueryReturnedNoRows => AppError::NotFound(format!("employee {}", emp_id)),
        other => AppError::Db(other.to_string()),
    })
}

pub fn employee_list(pool: &DbPool) -> Result<Vec<EmployeeDto>, AppError> {
    let conn = get_connection(pool);
    let mut stmt = conn
        .prepare("SELECT emp_id, COALESCE(name, ''), COALESCE(department, '') FROM employees ORDER BY emp_id")
        .map_err(|e| AppError::Db(e.to_string()))?;
    let rows = stmt.query_map([], |row| {
        Ok(EmployeeDto {
            emp_id: row.get(0)?,
            name: row.get(1)?,
            department: row.get(2)?,
        })
    })?;
    let mut out = Vec::new();
    for r in rows {
        out.push(r.map_err(|e| AppError::Db(e.to_string()))?);
    }
    Ok(out)
}

pub fn employee_count(pool: &DbPool) -> Result<i64, AppError> {
    let conn = get_connection(pool);
    let n = conn.query_row("SELECT COUNT(*) FROM employees", [], |r| r.get(0))?;
    Ok(n)
}

use super::{submit, FormOutcome};
use crate::app::{employee_create, employee_list, EmployeeCreateReq};
use crate::cli::output;
use crate::error::AppError;
use crate::infra::DbPool;
use std::io::Write;

pub fn cmd_employee_add<W: Write>(
    pool: &DbPool,
    out: &mut W,
    req: EmployeeCreateReq,
) -> Result<FormOutcome, AppError> {
    submit(out, employee_create(pool, req), |e| {
        format!("Employee added! (id {})", e.emp_id)
    })
}

pub fn cmd_employee_list<W: Write>(pool: &DbPool, out: &mut W) -> Result<(), AppError> {
    let rows = employee_list(pool)?;
    output::write_employees(out, &rows)?;
    Ok(())
}

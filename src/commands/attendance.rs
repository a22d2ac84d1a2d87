use super::{submit, FormOutcome};
use crate::app::{attendance_log, AttendanceLogReq};
use crate::error::AppError;
use crate::infra::DbPool;
use std::io::Write;

pub fn cmd_attendance_log<W: Write>(
    pool: &DbPool,
    out: &mut W,
    req: AttendanceLogReq,
) -> Result<FormOutcome, AppError> {
    submit(out, attendance_log(pool, req), |_| "Attendance recorded!".to_string())
}

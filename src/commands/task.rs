use super::{submit, FormOutcome};
use crate::app::{task_log, TaskLogReq};
use crate::error::AppError;
use crate::infra::DbPool;
use std::io::Write;

pub fn cmd_task_log<W: Write>(
    pool: &DbPool,
    out: &mut W,
    req: TaskLogReq,
) -> Result<FormOutcome, AppError> {
    submit(out, task_log(pool, req), |t| format!("Task logged! (id {})", t.task_id))
}

//! Presence checks applied at the boundary of each write.

use crate::error::AppError;

/// Trimmed value, or a validation error naming `field` when blank.
pub fn require_text<'a>(field: &str, value: &'a str) -> Result<&'a str, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation(format!("{} is required", field)));
    }
    Ok(trimmed)
}

/// Employee ids start at 1. Existence is not checked.
pub fn require_emp_id(emp_id: i64) -> Result<i64, AppError> {
    if emp_id < 1 {
        return Err(AppError::Validation(format!(
            "emp_id must be a positive integer, got {}",
            emp_id
        )));
    }
    Ok(emp_id)
}

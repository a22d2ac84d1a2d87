//! Interactive menu: pick a view, fill in its form, repeat until quit or EOF.

use crate::app::{AttendanceLogReq, EmployeeCreateReq, TaskLogReq};
use crate::commands::attendance::cmd_attendance_log;
use crate::commands::employee::cmd_employee_add;
use crate::commands::report::cmd_report;
use crate::commands::task::cmd_task_log;
use crate::error::AppError;
use crate::infra::DbPool;
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddEmployee,
    LogAttendance,
    LogTask,
    Reports,
    Quit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "1" | "add employee" => Some(Self::AddEmployee),
            "2" | "log attendance" => Some(Self::LogAttendance),
            "3" | "log task" => Some(Self::LogTask),
            "4" | "reports" => Some(Self::Reports),
            "q" | "quit" | "exit" => Some(Self::Quit),
            _ => None,
        }
    }
}

const MENU: &str = "\
Employee Productivity Tracker
  1) Add Employee
  2) Log Attendance
  3) Log Task
  4) Reports
  q) Quit";

pub fn run_menu<R: BufRead, W: Write>(
    pool: &DbPool,
    input: &mut R,
    out: &mut W,
) -> Result<(), AppError> {
    loop {
        writeln!(out, "{}", MENU)?;
        let Some(line) = prompt(input, out, "Choose action")? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }
        let Some(choice) = MenuChoice::parse(&line) else {
            writeln!(out, "Unknown choice: {}", line.trim())?;
            continue;
        };
        log::debug!("menu choice {:?}", choice);
        match choice {
            MenuChoice::AddEmployee => add_employee_form(pool, input, out)?,
            MenuChoice::LogAttendance => log_attendance_form(pool, input, out)?,
            MenuChoice::LogTask => log_task_form(pool, input, out)?,
            MenuChoice::Reports => {
                cmd_report(pool, out)?;
            }
            MenuChoice::Quit => break,
        }
        writeln!(out)?;
    }
    Ok(())
}

fn add_employee_form<R: BufRead, W: Write>(
    pool: &DbPool,
    input: &mut R,
    out: &mut W,
) -> Result<(), AppError> {
    writeln!(out, "Add New Employee")?;
    let Some(name) = prompt(input, out, "Name")? else {
        return Ok(());
    };
    let Some(department) = prompt(input, out, "Department")? else {
        return Ok(());
    };
    cmd_employee_add(pool, out, EmployeeCreateReq { name, department })?;
    Ok(())
}

fn log_attendance_form<R: BufRead, W: Write>(
    pool: &DbPool,
    input: &mut R,
    out: &mut W,
) -> Result<(), AppError> {
    writeln!(out, "Log Attendance")?;
    let Some(emp_id) = prompt_emp_id(input, out)? else {
        return Ok(());
    };
    let Some(check_in) = prompt(input, out, "Check-In Time (HH:MM)")? else {
        return Ok(());
    };
    let Some(check_out) = prompt(input, out, "Check-Out Time (HH:MM)")? else {
        return Ok(());
    };
    cmd_attendance_log(
        pool,
        out,
        AttendanceLogReq {
            emp_id,
            check_in,
            check_out,
        },
    )?;
    Ok(())
}

fn log_task_form<R: BufRead, W: Write>(
    pool: &DbPool,
    input: &mut R,
    out: &mut W,
) -> Result<(), AppError> {
    writeln!(out, "Log Task")?;
    let Some(emp_id) = prompt_emp_id(input, out)? else {
        return Ok(());
    };
    writeln!(out, "Task Description (finish with an empty line):")?;
    out.flush()?;
    let mut lines = Vec::new();
    while let Some(line) = read_line(input)? {
        if line.trim().is_empty() {
            break;
        }
        lines.push(line);
    }
    cmd_task_log(
        pool,
        out,
        TaskLogReq {
            emp_id,
            description: lines.join("\n"),
        },
    )?;
    Ok(())
}

/// `None` means EOF, or an id that was rejected with a warning.
fn prompt_emp_id<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<Option<i64>, AppError> {
    let Some(raw) = prompt(input, out, "Employee ID")? else {
        return Ok(None);
    };
    match parse_emp_id(&raw) {
        Some(id) => Ok(Some(id)),
        None => {
            writeln!(out, "Warning: Employee ID must be a positive integer")?;
            Ok(None)
        }
    }
}

pub fn parse_emp_id(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok().filter(|id| *id >= 1)
}

fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
) -> Result<Option<String>, AppError> {
    write!(out, "{}: ", label)?;
    out.flush()?;
    read_line(input)
}

/// One line without its terminator, or `None` at EOF. Invalid UTF-8 is replaced, not fatal.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>, AppError> {
    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    let line = String::from_utf8_lossy(&buf);
    Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
}

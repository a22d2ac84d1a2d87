//! Command-line interface: one subcommand per form, plus the interactive menu.

pub mod output;

use crate::commands::export::ExportFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// worktrack - employee productivity tracker
#[derive(Parser, Debug)]
#[command(name = "worktrack", version)]
#[command(about = "Track employees, attendance and completed tasks", long_about = None)]
pub struct Cli {
    /// SQLite database file (created if absent)
    #[arg(long, env = "WORKTRACK_DB", global = true)]
    pub db: Option<PathBuf>,

    /// Raise log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Defaults to the interactive menu
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add or list employees
    Employee {
        #[command(subcommand)]
        action: EmployeeCommand,
    },

    /// Log attendance
    Attendance {
        #[command(subcommand)]
        action: AttendanceCommand,
    },

    /// Log completed tasks
    Task {
        #[command(subcommand)]
        action: TaskCommand,
    },

    /// Show tables and the per-employee task chart
    Report {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Export data as JSON or a table as CSV
    Export {
        #[arg(value_enum)]
        format: ExportFormat,
        /// Write to this file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Interactive menu with the four forms
    Menu,
}

#[derive(Subcommand, Debug)]
pub enum EmployeeCommand {
    /// Add a new employee
    Add {
        /// Employee name
        name: String,
        /// Department
        department: String,
    },
    /// List all employees
    List,
}

#[derive(Subcommand, Debug)]
pub enum AttendanceCommand {
    /// Record today's check-in and check-out
    Log {
        /// Employee ID
        #[arg(allow_negative_numbers = true)]
        emp_id: i64,
        /// Check-in time (HH:MM)
        check_in: String,
        /// Check-out time (HH:MM)
        check_out: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum TaskCommand {
    /// Record a completed task
    Log {
        /// Employee ID
        #[arg(allow_negative_numbers = true)]
        emp_id: i64,
        /// Task description
        description: String,
    },
}

pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod infra;
pub mod menu;

use clap::Parser;
use cli::{AttendanceCommand, Cli, Command, EmployeeCommand, TaskCommand};
use commands::FormOutcome;
use config::Config;
use error::AppError;
use infra::{init_db, DbPool};
use std::io::{BufRead, Write};

/// Exit status for a form rejected by its presence checks.
pub const EXIT_REJECTED: i32 = 2;

fn init_logging(filter: &str) {
    let env = env_logger::Env::default().default_filter_or(filter);
    // A second init (tests) is harmless.
    let _ = env_logger::Builder::from_env(env).try_init();
}

/// Parse args, open the store and dispatch. Returns the process exit status.
pub fn run() -> i32 {
    let cli = Cli::parse();
    let config = Config::resolve(cli.db.clone(), cli.verbose);
    init_logging(config.log_filter);
    log::info!("DB path: {:?}", config.db_path);

    let pool = match init_db(&config.db_path) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("DB init failed: {}", e);
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    match dispatch(&pool, cli.command, &mut stdin.lock(), &mut stdout.lock()) {
        Ok(code) => code,
        Err(e) => {
            log::error!("[{}] {}", e.code(), e);
            eprintln!("Error: {}", e);
            1
        }
    }
}

/// Run one subcommand (or the menu) against an open store.
pub fn dispatch<R: BufRead, W: Write>(
    pool: &DbPool,
    command: Option<Command>,
    input: &mut R,
    out: &mut W,
) -> Result<i32, AppError> {
    let outcome = match command.unwrap_or(Command::Menu) {
        Command::Employee {
            action: EmployeeCommand::Add { name, department },
        } => commands::employee::cmd_employee_add(
            pool,
            out,
            app::EmployeeCreateReq { name, department },
        )?,
        Command::Employee {
            action: EmployeeCommand::List,
        } => {
            commands::employee::cmd_employee_list(pool, out)?;
            FormOutcome::Saved
        }
        Command::Attendance {
            action:
                AttendanceCommand::Log {
                    emp_id,
                    check_in,
                    check_out,
                },
        } => commands::attendance::cmd_attendance_log(
            pool,
            out,
            app::AttendanceLogReq {
                emp_id,
                check_in,
                check_out,
            },
        )?,
        Command::Task {
            action: TaskCommand::Log {
                emp_id,
                description,
            },
        } => commands::task::cmd_task_log(
            pool,
            out,
            app::TaskLogReq {
                emp_id,
                description,
            },
        )?,
        Command::Report { json: true } => {
            if !commands::report::cmd_report_json(pool, out)? {
                return Ok(1);
            }
            FormOutcome::Saved
        }
        Command::Report { json: false } => {
            if !commands::report::cmd_report(pool, out)? {
                return Ok(1);
            }
            FormOutcome::Saved
        }
        Command::Export { format, out: dest } => {
            commands::export::cmd_export(pool, out, format, dest.as_deref())?;
            FormOutcome::Saved
        }
        Command::Menu => {
            menu::run_menu(pool, input, out)?;
            FormOutcome::Saved
        }
    };
    Ok(match outcome {
        FormOutcome::Saved => 0,
        FormOutcome::Rejected => EXIT_REJECTED,
    })
}

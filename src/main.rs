//! worktrack - employee productivity tracker
//!
//! Records employees, daily attendance and completed tasks in a local SQLite
//! file and renders per-employee task reports.

fn main() {
    std::process::exit(app_lib::run());
}

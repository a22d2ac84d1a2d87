//! Application use cases. Each write is its own implicit commit.

mod attendance;
mod data_transfer;
mod employee;
mod report;
mod task;

pub use attendance::{
    attendance_count, attendance_list, attendance_log, attendance_recent, AttendanceDto,
    AttendanceLogReq,
};
pub use data_transfer::{
    export_attendance_csv, export_employees_csv, export_json_string, export_tasks_csv,
    ExportRoot, EXPORT_SCHEMA_VERSION,
};
pub use employee::{
    employee_count, employee_create, employee_get, employee_list, EmployeeCreateReq, EmployeeDto,
};
pub use report::{report_build, task_summary, ReportDto, TaskSummaryItemDto, RECENT_ROWS};
pub use task::{
    task_count, task_count_for_employee, task_list, task_log, task_recent, TaskDto, TaskLogReq,
};

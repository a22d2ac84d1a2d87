//! Export integration tests

use app_lib::app::{
    employee_create, export_attendance_csv, export_employees_csv, export_json_string,
    export_tasks_csv, task_log, EmployeeCreateReq, TaskLogReq, EXPORT_SCHEMA_VERSION,
};
use app_lib::commands::export::{cmd_export, ExportFormat};
use app_lib::infra::db::init_test_db;

fn seed(pool: &app_lib::infra::DbPool) {
    let emp = employee_create(
        pool,
        EmployeeCreateReq {
            name: "Smith, John".to_string(),
            department: "R&D".to_string(),
        },
    )
    .unwrap();
    task_log(
        pool,
        TaskLogReq {
            emp_id: emp.emp_id,
            description: "Ship \"v2\"".to_string(),
        },
    )
    .unwrap();
}

#[test]
fn empty_db_exports_headers_only() {
    let pool = init_test_db();
    assert_eq!(export_employees_csv(&pool).unwrap(), "emp_id,name,department\n");
    assert_eq!(
        export_attendance_csv(&pool).unwrap(),
        "emp_id,date,check_in,check_out\n"
    );
    assert_eq!(
        export_tasks_csv(&pool).unwrap(),
        "task_id,emp_id,task_description,completed_on\n"
    );
}

#[test]
fn csv_quotes_commas_and_quotes() {
    let pool = init_test_db();
    seed(&pool);
    let employees = export_employees_csv(&pool).unwrap();
    assert_eq!(employees.lines().nth(1), Some("1,\"Smith, John\",R&D"));
    let tasks = export_tasks_csv(&pool).unwrap();
    assert!(tasks.lines().nth(1).unwrap().starts_with("1,1,\"Ship \"\"v2\"\"\","));
}

#[test]
fn json_export_contains_every_table() {
    let pool = init_test_db();
    seed(&pool);
    let json = export_json_string(&pool).unwrap();
    let v: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(v["schemaVersion"], EXPORT_SCHEMA_VERSION);
    assert!(v["exportedAt"].is_string());
    assert_eq!(v["employees"].as_array().unwrap().len(), 1);
    assert_eq!(v["tasks"].as_array().unwrap().len(), 1);
    assert!(v["attendance"].as_array().unwrap().is_empty());
}

#[test]
fn export_to_file_writes_body_and_confirms() {
    let pool = init_test_db();
    seed(&pool);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("employees.csv");

    let mut out = Vec::new();
    cmd_export(&pool, &mut out, ExportFormat::Employees, Some(&path)).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("emp_id,name,department\n"));
    assert!(String::from_utf8(out).unwrap().starts_with("Exported to "));
}

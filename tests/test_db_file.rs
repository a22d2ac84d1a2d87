//! File-backed store tests

use app_lib::app::{
    attendance_count, attendance_log, employee_count, employee_create, task_count, task_log,
    AttendanceLogReq, EmployeeCreateReq, TaskLogReq,
};
use app_lib::infra::db::get_connection;
use app_lib::infra::init_db;

#[test]
fn init_creates_file_and_parent_dirs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("employees.db");
    init_db(&path).unwrap();
    assert!(path.exists());
}

#[test]
fn reopening_keeps_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("employees.db");
    {
        let pool = init_db(&path).unwrap();
        let emp = employee_create(
            &pool,
            EmployeeCreateReq {
                name: "Asha".to_string(),
                department: "Engineering".to_string(),
            },
        )
        .unwrap();
        task_log(
            &pool,
            TaskLogReq {
                emp_id: emp.emp_id,
                description: "Fix bug".to_string(),
            },
        )
        .unwrap();
    }
    let pool = init_db(&path).unwrap();
    assert_eq!(employee_count(&pool).unwrap(), 1);
    assert_eq!(task_count(&pool).unwrap(), 1);
}

#[test]
fn pool_is_shareable_across_threads() {
    let dir = tempfile::tempdir().unwrap();
    let pool = std::sync::Arc::new(init_db(&dir.path().join("employees.db")).unwrap());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let pool = pool.clone();
            std::thread::spawn(move || {
                task_log(
                    &pool,
                    TaskLogReq {
                        emp_id: 1,
                        description: format!("task {i}"),
                    },
                )
                .unwrap();
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }
    assert_eq!(task_count(&pool).unwrap(), 4);
}

#[test]
fn orphan_rows_are_accepted_on_file_db() {
    let dir = tempfile::tempdir().unwrap();
    let pool = init_db(&dir.path().join("employees.db")).unwrap();
    task_log(
        &pool,
        TaskLogReq {
            emp_id: 404,
            description: "No such employee".to_string(),
        },
    )
    .unwrap();
    attendance_log(
        &pool,
        AttendanceLogReq {
            emp_id: 404,
            check_in: "09:00".to_string(),
            check_out: "17:00".to_string(),
        },
    )
    .unwrap();
    assert_eq!(task_count(&pool).unwrap(), 1);
    assert_eq!(attendance_count(&pool).unwrap(), 1);
}

#[test]
fn file_db_holds_only_the_three_tables() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("employees.db");
    init_db(&path).unwrap();
    let pool = init_db(&path).unwrap();
    let conn = get_connection(&pool);
    let mut stmt = conn
        .prepare("SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name")
        .unwrap();
    let names: Vec<String> = stmt
        .query_map([], |r| r.get(0))
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(names, vec!["attendance", "employees", "tasks"]);
}

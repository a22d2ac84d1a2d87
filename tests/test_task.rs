//! Task logging integration tests

use app_lib::app::{
    employee_create, task_count, task_count_for_employee, task_list, task_log, task_recent,
    EmployeeCreateReq, TaskLogReq,
};
use app_lib::domain::stamp::DATETIME_FORMAT;
use app_lib::infra::db::init_test_db;
use chrono::NaiveDateTime;

fn task(emp_id: i64, description: &str) -> TaskLogReq {
    TaskLogReq {
        emp_id,
        description: description.to_string(),
    }
}

fn seed_employee(pool: &app_lib::infra::DbPool, name: &str) -> i64 {
    employee_create(
        pool,
        EmployeeCreateReq {
            name: name.to_string(),
            department: "Engineering".to_string(),
        },
    )
    .unwrap()
    .emp_id
}

#[test]
fn log_stamps_completion_time() {
    let pool = init_test_db();
    let emp_id = seed_employee(&pool, "Asha");
    let dto = task_log(&pool, task(emp_id, "Fix bug")).unwrap();
    assert_eq!(dto.task_id, 1);
    assert_eq!(dto.emp_id, emp_id);
    assert_eq!(dto.task_description, "Fix bug");
    assert!(NaiveDateTime::parse_from_str(&dto.completed_on, DATETIME_FORMAT).is_ok());
}

#[test]
fn blank_description_is_rejected_without_insert() {
    let pool = init_test_db();
    let emp_id = seed_employee(&pool, "Asha");
    let err = task_log(&pool, task(emp_id, " \n\t ")).unwrap_err();
    assert_eq!(err.code(), "VALIDATION_ERROR");
    assert_eq!(task_count(&pool).unwrap(), 0);
}

#[test]
fn valid_task_increments_employee_count_by_one() {
    let pool = init_test_db();
    let asha = seed_employee(&pool, "Asha");
    let bo = seed_employee(&pool, "Bo");
    task_log(&pool, task(bo, "Other work")).unwrap();

    let before = task_count_for_employee(&pool, asha).unwrap();
    task_log(&pool, task(asha, "Write tests")).unwrap();
    assert_eq!(task_count_for_employee(&pool, asha).unwrap(), before + 1);
    assert_eq!(task_count_for_employee(&pool, bo).unwrap(), 1);
}

#[test]
fn multi_line_description_is_kept() {
    let pool = init_test_db();
    let dto = task_log(&pool, task(1, "Line one\nLine two\n")).unwrap();
    assert_eq!(dto.task_description, "Line one\nLine two");
    assert_eq!(task_list(&pool).unwrap()[0].task_description, "Line one\nLine two");
}

#[test]
fn orphan_task_is_accepted() {
    let pool = init_test_db();
    task_log(&pool, task(7, "Nobody's task")).unwrap();
    assert_eq!(task_count(&pool).unwrap(), 1);
}

#[test]
fn negative_emp_id_is_rejected() {
    let pool = init_test_db();
    assert_eq!(
        task_log(&pool, task(-1, "Fix bug")).unwrap_err().code(),
        "VALIDATION_ERROR"
    );
}

#[test]
fn recent_keeps_last_ten() {
    let pool = init_test_db();
    for i in 1..=15 {
        task_log(&pool, task(1, &format!("task {i}"))).unwrap();
    }
    let recent = task_recent(&pool, 10).unwrap();
    let ids: Vec<i64> = recent.iter().map(|t| t.task_id).collect();
    assert_eq!(ids, (6..=15).collect::<Vec<i64>>());
}

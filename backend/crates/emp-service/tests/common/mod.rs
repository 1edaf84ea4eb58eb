#![allow(dead_code)]

use emp_core::Employee;
use emp_db::{DbError, EmployeeRepository};
use emp_service::{EmployeeService, EmployeeStore};

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const API_PREFIX: &str = "/api/v1";

/// Repository over a fresh in-memory database
pub async fn create_test_repository() -> Arc<EmployeeRepository> {
    let pool = emp_db::create_in_memory_pool()
        .await
        .expect("Failed to create test pool");
    Arc::new(EmployeeRepository::new(pool))
}

/// Service whose source base URL points at the mock server's `/api/v1`
pub fn create_test_service<S: EmployeeStore>(
    store: Arc<S>,
    mock_server: &MockServer,
) -> EmployeeService<S> {
    EmployeeService::new(
        store,
        reqwest::Client::new(),
        format!("{}{}", mock_server.uri(), API_PREFIX),
    )
}

pub fn employee(id: i64, name: &str, salary: f64) -> Employee {
    Employee::new(id, name.to_string(), salary, 30, String::new())
}

pub fn remote_employee(id: i64, name: &str, salary: f64, age: i32) -> Value {
    json!({
        "id": id,
        "employee_name": name,
        "employee_salary": salary,
        "employee_age": age,
        "profile_image": ""
    })
}

/// Mounts `GET /api/v1/employees` answering with the given response
pub async fn mount_employees(mock_server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(format!("{}/employees", API_PREFIX)))
        .respond_with(response)
        .mount(mock_server)
        .await;
}

pub fn envelope(data: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "status": "success",
        "data": data,
        "message": "Successfully! All records has been fetched."
    }))
}

/// Store whose every operation fails, for exercising error mapping
pub struct FailingStore;

#[async_trait]
impl EmployeeStore for FailingStore {
    async fn find_all(&self) -> emp_db::Result<Vec<Employee>> {
        Err(DbError::from(sqlx::Error::PoolClosed))
    }

    async fn find_by_id(&self, _id: i64) -> emp_db::Result<Option<Employee>> {
        Err(DbError::from(sqlx::Error::PoolClosed))
    }

    async fn save_all(&self, _employees: &[Employee]) -> emp_db::Result<Vec<Employee>> {
        Err(DbError::from(sqlx::Error::PoolClosed))
    }
}

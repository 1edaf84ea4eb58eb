#![allow(dead_code)]

//! Test infrastructure for emp-server API tests

use emp_core::Employee;
use emp_db::EmployeeRepository;
use emp_server::AppState;

use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tower::ServiceExt;
use wiremock::MockServer;

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    emp_db::create_in_memory_pool()
        .await
        .expect("Failed to create test database")
}

/// Create AppState whose employee source is the given mock server
pub async fn create_test_app_state(mock_server: &MockServer) -> AppState {
    let pool = create_test_pool().await;
    AppState::new(
        pool,
        reqwest::Client::new(),
        format!("{}/api/v1", mock_server.uri()),
    )
}

/// Store employees directly through the repository
pub async fn seed_employees(pool: &SqlitePool, employees: &[Employee]) {
    EmployeeRepository::new(pool.clone())
        .save_all(employees)
        .await
        .expect("Failed to seed employees");
}

pub async fn send(app: Router, method: &str, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    app.oneshot(request).await.unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(body.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

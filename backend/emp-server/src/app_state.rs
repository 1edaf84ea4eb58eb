use emp_db::EmployeeRepository;
use emp_service::EmployeeService;

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub service: EmployeeService<EmployeeRepository>,
}

impl AppState {
    pub fn new(pool: SqlitePool, http: reqwest::Client, source_base_url: impl Into<String>) -> Self {
        let repository = Arc::new(EmployeeRepository::new(pool.clone()));
        Self {
            pool,
            service: EmployeeService::new(repository, http, source_base_url),
        }
    }
}

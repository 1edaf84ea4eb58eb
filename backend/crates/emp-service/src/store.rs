//! Storage seam consumed by [`crate::EmployeeService`].

use emp_core::Employee;
use emp_db::{EmployeeRepository, Result as DbErrorResult};

use async_trait::async_trait;

/// Durable keyed store of employees.
///
/// `save_all` upserts by id with overwrite-on-conflict and must be
/// all-or-nothing.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    async fn find_all(&self) -> DbErrorResult<Vec<Employee>>;
    async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<Employee>>;
    async fn save_all(&self, employees: &[Employee]) -> DbErrorResult<Vec<Employee>>;
}

#[async_trait]
impl EmployeeStore for EmployeeRepository {
    async fn find_all(&self) -> DbErrorResult<Vec<Employee>> {
        EmployeeRepository::find_all(self).await
    }

    async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<Employee>> {
        EmployeeRepository::find_by_id(self, id).await
    }

    async fn save_all(&self, employees: &[Employee]) -> DbErrorResult<Vec<Employee>> {
        EmployeeRepository::save_all(self, employees).await
    }
}

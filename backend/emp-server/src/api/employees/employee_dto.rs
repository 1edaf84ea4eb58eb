use emp_core::Employee;

use serde::{Deserialize, Serialize};

/// Employee as exposed over HTTP, using the third-party API's field names
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeDto {
    pub id: i64,
    pub employee_name: String,
    pub employee_salary: f64,
    pub employee_age: i32,
    pub profile_image: String,
}

impl From<Employee> for EmployeeDto {
    fn from(e: Employee) -> Self {
        Self {
            id: e.id,
            employee_name: e.name,
            employee_salary: e.salary,
            employee_age: e.age,
            profile_image: e.profile_image,
        }
    }
}

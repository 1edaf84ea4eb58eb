pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    employees::{
        employee_dto::EmployeeDto,
        employees::{
            FETCH_SUCCESS_MESSAGE, fetch_employees, get_annual_salary, get_employee,
            list_employees,
        },
    },
    error::ApiError,
    error::Result as ApiResult,
};
pub use app_state::AppState;

pub use crate::routes::build_router;

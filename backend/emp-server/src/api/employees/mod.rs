pub mod employee_dto;
#[allow(clippy::module_inception)]
pub mod employees;

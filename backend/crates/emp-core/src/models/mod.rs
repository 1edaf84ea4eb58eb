pub mod employee;
pub mod new_employee;

pub mod employees;
pub mod error;

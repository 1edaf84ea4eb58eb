//! Employee service: the read paths and the sync from the third-party API.

pub mod employee_service;
pub mod error;
pub mod store;

mod sync;


pub use employee_service::EmployeeService;
pub use error::{Result as ServiceResult, ServiceError};
pub use store::EmployeeStore;

pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::pool::{create_in_memory_pool, create_pool, run_migrations};
pub use error::{DbError, Result};
pub use repositories::employee_repository::EmployeeRepository;

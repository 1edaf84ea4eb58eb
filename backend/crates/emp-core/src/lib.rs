pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use models::employee::{Employee, MONTHS_PER_YEAR};
pub use models::new_employee::NewEmployee;

pub use error_location::ErrorLocation;

use crate::ErrorLocation;

use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Salary of employee {id} is not a finite number: {value} {location}")]
    NonFiniteSalary {
        id: i64,
        value: f64,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;

impl CoreError {
    /// Message without the capture location, for user-facing text.
    pub fn reason(&self) -> String {
        match self {
            CoreError::NonFiniteSalary { id, value, .. } => {
                format!("salary of employee {} is not a finite number: {}", id, value)
            }
        }
    }
}

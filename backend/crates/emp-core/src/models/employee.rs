//! Employee entity - the only record type this service persists.

use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Salary is stored per month.
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// An employee record as held in storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Assigned by storage on creation, or by the external source on sync
    pub id: i64,
    pub name: String,
    /// Monthly salary. Non-negative by convention, not enforced.
    pub salary: f64,
    pub age: i32,
    /// May be empty
    pub profile_image: String,
}

impl Employee {
    pub fn new(id: i64, name: String, salary: f64, age: i32, profile_image: String) -> Self {
        Self {
            id,
            name,
            salary,
            age,
            profile_image,
        }
    }

    /// Monthly salary times twelve, no rounding.
    ///
    /// Fails only when the product is NaN or infinite.
    #[track_caller]
    pub fn annual_salary(&self) -> CoreErrorResult<f64> {
        let annual = self.salary * MONTHS_PER_YEAR;
        if !annual.is_finite() {
            return Err(CoreError::NonFiniteSalary {
                id: self.id,
                value: self.salary,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(annual)
    }

    pub fn has_profile_image(&self) -> bool {
        !self.profile_image.is_empty()
    }
}

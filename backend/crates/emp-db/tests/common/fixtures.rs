#![allow(dead_code)]

use emp_core::{Employee, NewEmployee};

/// Creates a NewEmployee with sensible defaults
pub fn create_test_new_employee(name: &str) -> NewEmployee {
    NewEmployee::new(name, 5000.0, 30).with_profile_image("")
}

/// Creates an Employee with an explicit id, as delivered by the external source
pub fn create_test_employee(id: i64, name: &str, salary: f64) -> Employee {
    Employee {
        id,
        name: name.to_string(),
        salary,
        age: 40,
        profile_image: String::new(),
    }
}

use crate::{CoreError, Employee};

fn sample(salary: f64) -> Employee {
    Employee::new(1, "Tiger Nixon".to_string(), salary, 61, String::new())
}

#[test]
fn test_annual_salary_is_twelve_months() {
    let employee = sample(5000.0);

    assert_eq!(employee.annual_salary().unwrap(), 60000.0);
}

#[test]
fn test_annual_salary_keeps_fractions() {
    let employee = sample(1234.5);

    assert_eq!(employee.annual_salary().unwrap(), 1234.5 * 12.0);
}

#[test]
fn test_annual_salary_of_zero() {
    let employee = sample(0.0);

    assert_eq!(employee.annual_salary().unwrap(), 0.0);
}

#[test]
fn test_annual_salary_rejects_nan() {
    let employee = sample(f64::NAN);

    match employee.annual_salary() {
        Err(CoreError::NonFiniteSalary { id, .. }) => assert_eq!(id, 1),
        other => panic!("Expected NonFiniteSalary, got {:?}", other),
    }
}

#[test]
fn test_annual_salary_rejects_overflow() {
    let employee = sample(f64::MAX);

    assert!(employee.annual_salary().is_err());
}

#[test]
fn test_has_profile_image() {
    let mut employee = sample(100.0);
    assert!(!employee.has_profile_image());

    employee.profile_image = "avatar.png".to_string();
    assert!(employee.has_profile_image());
}

#[test]
fn test_serde_uses_entity_field_names() {
    let employee = sample(100.0);

    let json = serde_json::to_value(&employee).unwrap();

    assert_eq!(json["id"], 1);
    assert_eq!(json["name"], "Tiger Nixon");
    assert_eq!(json["age"], 61);
    assert_eq!(json["profile_image"], "");
}

#[test]
fn test_non_finite_reason_omits_location() {
    let employee = sample(f64::INFINITY);

    let err = employee.annual_salary().unwrap_err();

    assert_eq!(
        err.reason(),
        "salary of employee 1 is not a finite number: inf"
    );
}

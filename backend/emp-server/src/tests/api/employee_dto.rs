use crate::EmployeeDto;

use emp_core::Employee;

#[test]
fn test_dto_uses_source_field_names() {
    let dto = EmployeeDto::from(Employee::new(
        1,
        "Tiger Nixon".to_string(),
        320800.0,
        61,
        "tiger.png".to_string(),
    ));

    let json = serde_json::to_value(&dto).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "id": 1,
            "employee_name": "Tiger Nixon",
            "employee_salary": 320800.0,
            "employee_age": 61,
            "profile_image": "tiger.png"
        })
    );
}

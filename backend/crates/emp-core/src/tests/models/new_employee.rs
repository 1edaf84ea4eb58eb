use crate::NewEmployee;

#[test]
fn test_new_employee_defaults_to_empty_profile_image() {
    let employee = NewEmployee::new("Garrett Winters", 170750.0, 63);

    assert_eq!(employee.name, "Garrett Winters");
    assert_eq!(employee.profile_image, "");
}

#[test]
fn test_with_profile_image() {
    let employee = NewEmployee::new("Ashton Cox", 86000.0, 66).with_profile_image("cox.png");

    assert_eq!(employee.profile_image, "cox.png");
}

#[test]
fn test_missing_profile_image_deserializes_as_empty() {
    let employee: NewEmployee =
        serde_json::from_str(r#"{"name":"Cedric Kelly","salary":433060,"age":22}"#).unwrap();

    assert_eq!(employee.salary, 433060.0);
    assert_eq!(employee.profile_image, "");
}

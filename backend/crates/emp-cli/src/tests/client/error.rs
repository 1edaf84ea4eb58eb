use crate::ClientError;

#[test]
fn test_api_error_carries_status_and_body() {
    let err = ClientError::api_error(404, "Employee with ID 3 not found".to_string());

    assert_eq!(err.status(), Some(404));
    assert!(
        err.to_string()
            .starts_with("API error (404): Employee with ID 3 not found")
    );
}

#[test]
fn test_json_error_has_no_status() {
    let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err = ClientError::from_json(source);

    assert_eq!(err.status(), None);
    assert!(matches!(err, ClientError::Json { .. }));
}

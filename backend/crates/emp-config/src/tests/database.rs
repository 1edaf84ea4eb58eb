use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ok};
use serial_test::serial;

#[test]
#[serial]
fn given_absolute_database_path_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _path = EnvGuard::set("EMP_DATABASE_PATH", "/tmp/employees.db");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_parent_traversal_in_database_path_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _path = EnvGuard::set("EMP_DATABASE_PATH", "../escape.db");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_relative_database_path_when_database_path_then_under_config_dir() {
    // Given
    let (temp, _guard) = setup_config_dir();
    let _path = EnvGuard::set("EMP_DATABASE_PATH", "data/employees.db");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validate(), ok(anything()));
    assert_that!(
        config.database_path().unwrap(),
        eq(&temp.path().join("data/employees.db"))
    );
}

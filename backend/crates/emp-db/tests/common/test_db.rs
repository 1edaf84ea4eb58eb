#![allow(dead_code)]

use sqlx::SqlitePool;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    emp_db::create_in_memory_pool()
        .await
        .expect("Failed to create test pool")
}

/// Inserts an employee with an explicit id, bypassing the repository
pub async fn insert_raw_employee(pool: &SqlitePool, id: i64, name: &str, salary: f64) {
    // Use sqlx::query (not query!) to avoid offline mode issues in tests
    sqlx::query("INSERT INTO employees (id, name, salary, age, profile_image) VALUES (?, ?, ?, ?, ?)")
        .bind(id)
        .bind(name)
        .bind(salary)
        .bind(30)
        .bind("")
        .execute(pool)
        .await
        .expect("Failed to insert employee");
}

//! Employee repository: reads, creation, deletion and the bulk upsert used by sync.
//!
//! `save_all` writes every record inside a single transaction, so a failure
//! part-way leaves the table exactly as it was. Records whose id already
//! exists are replaced as a whole (all columns), never merged field by field.
//! If the same id appears twice in one batch, the later record wins.

use crate::Result as DbErrorResult;

use emp_core::{Employee, NewEmployee};

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

const FIND_EMPLOYEE_BY_ID: &str = r#"
    SELECT id, name, salary, age, profile_image
    FROM employees
    WHERE id = ?
"#;

const FIND_ALL_EMPLOYEES: &str = r#"
    SELECT id, name, salary, age, profile_image
    FROM employees
    ORDER BY id
"#;

const UPSERT_EMPLOYEE: &str = r#"
    INSERT INTO employees (id, name, salary, age, profile_image)
    VALUES (?, ?, ?, ?, ?)
    ON CONFLICT(id) DO UPDATE SET
        name = excluded.name,
        salary = excluded.salary,
        age = excluded.age,
        profile_image = excluded.profile_image
"#;

#[derive(Clone)]
pub struct EmployeeRepository {
    pool: SqlitePool,
}

impl EmployeeRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Insert a record and let storage assign its id.
    pub async fn create(&self, employee: &NewEmployee) -> DbErrorResult<Employee> {
        let result = sqlx::query(
            r#"
                INSERT INTO employees (name, salary, age, profile_image)
                VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&employee.name)
        .bind(employee.salary)
        .bind(employee.age)
        .bind(&employee.profile_image)
        .execute(&self.pool)
        .await?;

        Ok(Employee {
            id: result.last_insert_rowid(),
            name: employee.name.clone(),
            salary: employee.salary,
            age: employee.age,
            profile_image: employee.profile_image.clone(),
        })
    }

    pub async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<Employee>> {
        let row = sqlx::query(FIND_EMPLOYEE_BY_ID)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(employee_from_row).transpose()
    }

    /// All employees in ascending id order.
    pub async fn find_all(&self) -> DbErrorResult<Vec<Employee>> {
        let rows = sqlx::query(FIND_ALL_EMPLOYEES)
            .fetch_all(&self.pool)
            .await?;

        rows.iter()
            .map(employee_from_row)
            .collect::<DbErrorResult<Vec<_>>>()
    }

    /// Upsert every record by id in one transaction.
    pub async fn save_all(&self, employees: &[Employee]) -> DbErrorResult<Vec<Employee>> {
        let mut tx = self.pool.begin().await?;

        for employee in employees {
            sqlx::query(UPSERT_EMPLOYEE)
                .bind(employee.id)
                .bind(&employee.name)
                .bind(employee.salary)
                .bind(employee.age)
                .bind(&employee.profile_image)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        Ok(employees.to_vec())
    }

    /// Returns whether a row was removed.
    pub async fn delete_by_id(&self, id: i64) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM employees WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn count(&self) -> DbErrorResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM employees")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

fn employee_from_row(row: &SqliteRow) -> DbErrorResult<Employee> {
    Ok(Employee {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        salary: row.try_get("salary")?,
        age: row.try_get("age")?,
        profile_image: row.try_get("profile_image")?,
    })
}

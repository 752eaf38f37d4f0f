use sqlx::SqlitePool;
use tracing::debug;

use crate::error::StoreError;
use crate::model::employee::{Employee, NewEmployee};

/// Insert a new employee. Fails with `Validation` on a blank id and with
/// `DuplicateKey` when the id is already taken; the stored record is left as is.
pub async fn create_employee(pool: &SqlitePool, new: NewEmployee) -> Result<Employee, StoreError> {
    if !new.is_valid() {
        return Err(StoreError::Validation);
    }

    sqlx::query(
        r#"
        INSERT INTO employees (employee_id, full_name, email, department)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(&new.employee_id)
    .bind(&new.full_name)
    .bind(&new.email)
    .bind(&new.department)
    .execute(pool)
    .await?;

    Ok(new.into())
}

/// All employees in insertion order.
pub async fn list_employees(pool: &SqlitePool) -> Result<Vec<Employee>, StoreError> {
    let employees = sqlx::query_as::<_, Employee>(
        r#"
        SELECT employee_id, full_name, email, department
        FROM employees
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(employees)
}

pub async fn get_employee(
    pool: &SqlitePool,
    employee_id: &str,
) -> Result<Option<Employee>, StoreError> {
    let employee = sqlx::query_as::<_, Employee>(
        r#"
        SELECT employee_id, full_name, email, department
        FROM employees
        WHERE employee_id = ?
        "#,
    )
    .bind(employee_id)
    .fetch_optional(pool)
    .await?;

    Ok(employee)
}

/// Remove an employee by id. Deleting an unknown id is not an error.
/// Attendance logs stay behind unless `cascade` is set.
pub async fn delete_employee(
    pool: &SqlitePool,
    employee_id: &str,
    cascade: bool,
) -> Result<(), StoreError> {
    let mut tx = pool.begin().await?;

    let removed = sqlx::query("DELETE FROM employees WHERE employee_id = ?")
        .bind(employee_id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

    let removed_logs = if cascade {
        sqlx::query("DELETE FROM attendance WHERE employee_id = ?")
            .bind(employee_id)
            .execute(&mut *tx)
            .await?
            .rows_affected()
    } else {
        0
    };

    tx.commit().await?;

    debug!(employee_id, removed, removed_logs, "Employee delete applied");
    Ok(())
}

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::StoreError;
use crate::model::attendance::{AttendanceRecord, AttendanceRow, NewAttendance};
use crate::store::employee::get_employee;

/// Insert a log as given. Nothing stops two logs for the same employee and date.
pub async fn create_attendance(
    pool: &SqlitePool,
    new: NewAttendance,
) -> Result<AttendanceRecord, StoreError> {
    sqlx::query(
        r#"
        INSERT INTO attendance (employee_id, full_name, date, status, remarks)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(&new.employee_id)
    .bind(&new.full_name)
    .bind(new.date)
    .bind(new.status.as_ref())
    .bind(&new.remarks)
    .execute(pool)
    .await?;

    Ok(new.into())
}

/// Insert a log only if the employee exists and has no log for that date yet.
/// The check and the insert run as one statement.
pub async fn create_attendance_unique(
    pool: &SqlitePool,
    new: NewAttendance,
) -> Result<AttendanceRecord, StoreError> {
    let inserted = sqlx::query(
        r#"
        INSERT INTO attendance (employee_id, full_name, date, status, remarks)
        SELECT ?, ?, ?, ?, ?
        WHERE EXISTS (SELECT 1 FROM employees WHERE employee_id = ?)
          AND NOT EXISTS (SELECT 1 FROM attendance WHERE employee_id = ? AND date = ?)
        "#,
    )
    .bind(&new.employee_id)
    .bind(&new.full_name)
    .bind(new.date)
    .bind(new.status.as_ref())
    .bind(&new.remarks)
    .bind(&new.employee_id)
    .bind(&new.employee_id)
    .bind(new.date)
    .execute(pool)
    .await?
    .rows_affected();

    if inserted == 0 {
        let known = get_employee(pool, &new.employee_id).await?.is_some();
        debug!(employee_id = %new.employee_id, date = %new.date, known, "Attendance insert refused");
        return Err(if known {
            StoreError::DuplicateAttendance
        } else {
            StoreError::UnknownEmployee
        });
    }

    Ok(new.into())
}

/// Every log, newest date first. Logs sharing a date keep insertion order.
pub async fn list_attendance(pool: &SqlitePool) -> Result<Vec<AttendanceRecord>, StoreError> {
    sqlx::query_as::<_, AttendanceRow>(
        r#"
        SELECT employee_id, full_name, date, status, remarks
        FROM attendance
        ORDER BY date DESC, id ASC
        "#,
    )
    .fetch_all(pool)
    .await?
    .into_iter()
    .map(AttendanceRecord::try_from)
    .collect()
}

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use derive_more::{Display, Error};
use serde_json::json;
use tracing::error;

pub const INVALID_EMPLOYEE_MESSAGE: &str = "Duplicate ID or Invalid Data";
pub const INVALID_ATTENDANCE_MESSAGE: &str = "Invalid Attendance Data";

#[derive(Debug, Display, Error)]
pub enum StoreError {
    /// An employee with the same `employeeId` already exists
    #[display(fmt = "Duplicate ID or Invalid Data")]
    DuplicateKey,

    /// A required field is missing or blank
    #[display(fmt = "Duplicate ID or Invalid Data")]
    Validation,

    #[display(fmt = "Record already exists for this date.")]
    DuplicateAttendance,

    /// Attendance logged against an id with no employee record
    #[display(fmt = "Employee not found")]
    UnknownEmployee,

    #[display(fmt = "database error: {}", _0)]
    Database(#[error(source)] sqlx::Error),

    #[display(fmt = "corrupt record: {}", _0)]
    Corrupt(#[error(not(source))] String),
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &e {
            if db_err.is_unique_violation() {
                return StoreError::DuplicateKey;
            }
        }
        StoreError::Database(e)
    }
}

impl ResponseError for StoreError {
    fn status_code(&self) -> StatusCode {
        match self {
            StoreError::DuplicateKey
            | StoreError::Validation
            | StoreError::DuplicateAttendance
            | StoreError::UnknownEmployee => StatusCode::BAD_REQUEST,
            StoreError::Database(_) | StoreError::Corrupt(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = %self, "Store operation failed");
            return HttpResponse::build(status).json(json!({
                "message": "Internal Server Error"
            }));
        }

        HttpResponse::build(status).json(json!({
            "message": self.to_string()
        }))
    }
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};
use utoipa::ToSchema;

use crate::error::StoreError;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, AsRefStr, Display, EnumString,
)]
pub enum AttendanceStatus {
    Present,
    Absent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(
    example = json!({
        "employeeId": "E1",
        "fullName": "Ann",
        "date": "2024-01-01",
        "status": "Absent",
        "remarks": "Medical appointment"
    })
)]
pub struct AttendanceRecord {
    #[schema(example = "E1")]
    pub employee_id: String,

    /// Name of the employee at the time the log was written
    #[schema(example = "Ann")]
    pub full_name: String,

    #[schema(example = "2024-01-01", format = "date", value_type = String)]
    pub date: NaiveDate,

    pub status: AttendanceStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "Medical appointment", nullable = true)]
    pub remarks: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewAttendance {
    #[serde(default)]
    #[schema(example = "E1")]
    pub employee_id: String,
    #[serde(default)]
    #[schema(example = "Ann")]
    pub full_name: String,
    #[schema(example = "2024-01-01", format = "date", value_type = String)]
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    #[serde(default)]
    #[schema(nullable = true)]
    pub remarks: Option<String>,
}

impl From<NewAttendance> for AttendanceRecord {
    fn from(new: NewAttendance) -> Self {
        Self {
            employee_id: new.employee_id,
            full_name: new.full_name,
            date: new.date,
            status: new.status,
            remarks: new.remarks,
        }
    }
}

/// Row shape of the `attendance` table; status is stored as text.
#[derive(Debug, sqlx::FromRow)]
pub struct AttendanceRow {
    pub employee_id: String,
    pub full_name: String,
    pub date: NaiveDate,
    pub status: String,
    pub remarks: Option<String>,
}

impl TryFrom<AttendanceRow> for AttendanceRecord {
    type Error = StoreError;

    fn try_from(row: AttendanceRow) -> Result<Self, Self::Error> {
        let status = row
            .status
            .parse::<AttendanceStatus>()
            .map_err(|_| StoreError::Corrupt(format!("unknown attendance status {:?}", row.status)))?;

        Ok(Self {
            employee_id: row.employee_id,
            full_name: row.full_name,
            date: row.date,
            status,
            remarks: row.remarks,
        })
    }
}

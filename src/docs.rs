use crate::analytics::Band;
use crate::api::dashboard::ReliabilityResponse;
use crate::dashboard::ReliabilityRow;
use crate::model::attendance::{AttendanceRecord, AttendanceStatus, NewAttendance};
use crate::model::employee::{Employee, NewEmployee};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "HRMS Analytics API",
        version = "0.1.0",
        description = r#"
## HRMS Analytics

Staff registry and daily attendance log with a reliability dashboard.

### Key Features
- **Employee Registry**
  - Onboard, list and remove employees
- **Attendance Logging**
  - Record `Present` / `Absent` logs, backdating allowed
- **Reliability Dashboard**
  - Share of logs marked present per employee, banded good / warning / critical

### Response Format
- JSON bodies with camelCase keys
- Errors carry a single `message` field
"#,
    ),
    paths(
        crate::api::employee::list_employees,
        crate::api::employee::create_employee,
        crate::api::employee::delete_employee,

        crate::api::attendance::list_attendance,
        crate::api::attendance::create_attendance,

        crate::api::dashboard::reliability_table,
        crate::api::dashboard::employee_reliability
    ),
    components(
        schemas(
            Employee,
            NewEmployee,
            AttendanceRecord,
            NewAttendance,
            AttendanceStatus,
            ReliabilityRow,
            ReliabilityResponse,
            Band
        )
    ),
    tags(
        (name = "Employee", description = "Employee registry APIs"),
        (name = "Attendance", description = "Attendance log APIs"),
        (name = "Dashboard", description = "Reliability scoring APIs"),
    )
)]
pub struct ApiDoc;

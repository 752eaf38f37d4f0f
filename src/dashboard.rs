//! View-model behind the HRMS dashboard.
//!
//! The screen state is a plain value. Every user interaction or API result is
//! an [`Action`] folded into a fresh [`ViewModel`] by [`reduce`]. Submissions are
//! validated against the last loaded lists before anything is sent to the API.

use chrono::NaiveDate;
use derive_more::{Display, Error};
use serde::Serialize;
use std::collections::HashMap;
use utoipa::ToSchema;

use crate::analytics::{Band, Tally, already_marked, band};
use crate::model::attendance::{AttendanceRecord, AttendanceStatus, NewAttendance};
use crate::model::employee::{Employee, NewEmployee};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Dashboard,
    Directory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceForm {
    pub employee_id: String,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    pub remarks: String,
}

impl AttendanceForm {
    fn blank(date: NaiveDate) -> Self {
        Self {
            employee_id: String::new(),
            date,
            status: AttendanceStatus::Present,
            remarks: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel {
    pub employees: Vec<Employee>,
    pub attendance: Vec<AttendanceRecord>,
    pub active_tab: Tab,
    pub employee_form: NewEmployee,
    pub attendance_form: AttendanceForm,
    /// Last message to show the user, if any
    pub notice: Option<String>,
}

impl ViewModel {
    /// Empty screen with the attendance date preset to `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            employees: Vec::new(),
            attendance: Vec::new(),
            active_tab: Tab::default(),
            employee_form: NewEmployee::default(),
            attendance_form: AttendanceForm::blank(today),
            notice: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmployeeField {
    EmployeeId(String),
    FullName(String),
    Email(String),
    Department(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttendanceField {
    EmployeeId(String),
    Date(NaiveDate),
    Status(AttendanceStatus),
    Remarks(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Loaded {
        employees: Vec<Employee>,
        attendance: Vec<AttendanceRecord>,
    },
    /// Refresh failed; the previous lists stay on screen
    SyncFailed,
    SelectTab(Tab),
    EditEmployee(EmployeeField),
    EditAttendance(AttendanceField),
    EmployeeSaved,
    EmployeeRejected,
    AttendanceSaved,
    Rejected(SubmissionError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SubmissionError {
    #[display(fmt = "Record already exists for this date.")]
    AlreadyMarked,
    #[display(fmt = "Select an employee before saving a log.")]
    UnknownEmployee,
    #[display(fmt = "Enter a leave reason for an absence.")]
    MissingReason,
    #[display(fmt = "Employee ID, full name and department are required.")]
    MissingField,
}

pub fn reduce(state: ViewModel, action: Action) -> ViewModel {
    match action {
        Action::Loaded {
            employees,
            attendance,
        } => ViewModel {
            employees,
            attendance,
            ..state
        },
        Action::SyncFailed => ViewModel {
            notice: Some("Sync error: showing the last loaded data.".into()),
            ..state
        },
        Action::SelectTab(active_tab) => ViewModel { active_tab, ..state },
        Action::EditEmployee(field) => {
            let mut employee_form = state.employee_form;
            match field {
                EmployeeField::EmployeeId(v) => employee_form.employee_id = v,
                EmployeeField::FullName(v) => employee_form.full_name = v,
                EmployeeField::Email(v) => employee_form.email = v,
                EmployeeField::Department(v) => employee_form.department = v,
            }
            ViewModel {
                employee_form,
                ..state
            }
        }
        Action::EditAttendance(field) => {
            let mut attendance_form = state.attendance_form;
            match field {
                AttendanceField::EmployeeId(v) => attendance_form.employee_id = v,
                AttendanceField::Date(v) => attendance_form.date = v,
                AttendanceField::Status(v) => attendance_form.status = v,
                AttendanceField::Remarks(v) => attendance_form.remarks = v,
            }
            ViewModel {
                attendance_form,
                ..state
            }
        }
        Action::EmployeeSaved => ViewModel {
            employee_form: NewEmployee::default(),
            notice: Some("Employee onboarded successfully!".into()),
            ..state
        },
        Action::EmployeeRejected => ViewModel {
            notice: Some("Error: ID already exists".into()),
            ..state
        },
        Action::AttendanceSaved => ViewModel {
            // date and status stay for the next log
            attendance_form: AttendanceForm {
                employee_id: String::new(),
                remarks: String::new(),
                ..state.attendance_form
            },
            notice: Some("Record Saved!".into()),
            ..state
        },
        Action::Rejected(err) => ViewModel {
            notice: Some(err.to_string()),
            ..state
        },
    }
}

/// Build the attendance payload from the form, or say why it must not be sent.
pub fn prepare_attendance(state: &ViewModel) -> Result<NewAttendance, SubmissionError> {
    let form = &state.attendance_form;

    if already_marked(&state.attendance, &form.employee_id, form.date) {
        return Err(SubmissionError::AlreadyMarked);
    }

    let employee = state
        .employees
        .iter()
        .find(|e| e.employee_id == form.employee_id)
        .ok_or(SubmissionError::UnknownEmployee)?;

    let remarks = form.remarks.trim();
    if form.status == AttendanceStatus::Absent && remarks.is_empty() {
        return Err(SubmissionError::MissingReason);
    }

    Ok(NewAttendance {
        employee_id: employee.employee_id.clone(),
        full_name: employee.full_name.clone(),
        date: form.date,
        status: form.status,
        remarks: (!remarks.is_empty()).then(|| remarks.to_string()),
    })
}

pub fn prepare_employee(state: &ViewModel) -> Result<NewEmployee, SubmissionError> {
    let form = &state.employee_form;
    let required = [&form.employee_id, &form.full_name, &form.department];
    if required.iter().any(|v| v.trim().is_empty()) {
        return Err(SubmissionError::MissingField);
    }
    Ok(form.clone())
}

/// One line of the reliability table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReliabilityRow {
    #[schema(example = "E1")]
    pub employee_id: String,
    #[schema(example = "Ann")]
    pub full_name: String,
    #[schema(example = "2024-01-01", format = "date", value_type = String)]
    pub date: NaiveDate,
    #[schema(nullable = true)]
    pub remarks: Option<String>,
    /// Percentage of the employee's logs marked present, null without logs
    #[schema(example = 75, nullable = true)]
    pub score: Option<u32>,
    pub band: Band,
}

/// A row per log, in reverse list order, each scored over the whole list.
pub fn reliability_rows(attendance: &[AttendanceRecord]) -> Vec<ReliabilityRow> {
    let mut tallies: HashMap<&str, Tally> = HashMap::new();
    for record in attendance {
        tallies
            .entry(record.employee_id.as_str())
            .or_default()
            .record(record);
    }

    attendance
        .iter()
        .rev()
        .map(|record| {
            let score = tallies
                .get(record.employee_id.as_str())
                .and_then(Tally::score);
            ReliabilityRow {
                employee_id: record.employee_id.clone(),
                full_name: record.full_name.clone(),
                date: record.date,
                remarks: record.remarks.clone(),
                score,
                band: band(score),
            }
        })
        .collect()
}

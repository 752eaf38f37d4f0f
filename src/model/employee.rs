use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(
    example = json!({
        "employeeId": "E1",
        "fullName": "Ann",
        "email": "a@x.com",
        "department": "Eng"
    })
)]
pub struct Employee {
    #[schema(example = "E1")]
    pub employee_id: String,

    #[schema(example = "Ann")]
    pub full_name: String,

    #[schema(example = "a@x.com")]
    pub email: String,

    #[schema(example = "Eng")]
    pub department: String,
}

/// Payload for onboarding an employee. Missing fields deserialize as empty
/// strings so that a blank `employeeId` can be rejected in one place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct NewEmployee {
    #[schema(example = "E1")]
    pub employee_id: String,
    #[schema(example = "Ann")]
    pub full_name: String,
    #[schema(example = "a@x.com", format = "email")]
    pub email: String,
    #[schema(example = "Eng")]
    pub department: String,
}

impl NewEmployee {
    pub fn is_valid(&self) -> bool {
        !self.employee_id.trim().is_empty()
    }
}

impl From<NewEmployee> for Employee {
    fn from(new: NewEmployee) -> Self {
        Self {
            employee_id: new.employee_id,
            full_name: new.full_name,
            email: new.email,
            department: new.department,
        }
    }
}

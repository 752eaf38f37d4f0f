use crate::{
    config::Config,
    error::{INVALID_EMPLOYEE_MESSAGE, StoreError},
    model::employee::{Employee, NewEmployee},
    store,
};
use actix_web::{
    HttpRequest, HttpResponse, Responder,
    error::{InternalError, JsonPayloadError},
    web,
};
use serde_json::json;
use sqlx::SqlitePool;
use tracing::{debug, error, info, instrument};

/// Turns any unreadable employee body into the same 400 a duplicate id gets.
pub fn invalid_payload(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, "Rejected employee payload");
    let response = HttpResponse::BadRequest().json(json!({
        "message": INVALID_EMPLOYEE_MESSAGE
    }));
    InternalError::from_response(err, response).into()
}

/// List Employees
#[utoipa::path(
    get,
    path = "/api/employees",
    responses(
        (status = 200, description = "All employees in onboarding order", body = [Employee]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn list_employees(pool: web::Data<SqlitePool>) -> actix_web::Result<impl Responder> {
    let employees = store::employee::list_employees(pool.get_ref()).await?;
    debug!(count = employees.len(), "Fetched employees");
    Ok(HttpResponse::Ok().json(employees))
}

/// Create Employee
#[utoipa::path(
    post,
    path = "/api/employees",
    request_body = NewEmployee,
    responses(
        (status = 201, description = "Employee created", body = Employee),
        (status = 400, description = "Duplicate ID or missing fields", body = Object, example = json!({
            "message": "Duplicate ID or Invalid Data"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
#[instrument(
    name = "create_employee",
    skip(pool, payload),
    fields(employee_id = %payload.employee_id)
)]
pub async fn create_employee(
    pool: web::Data<SqlitePool>,
    payload: web::Json<NewEmployee>,
) -> actix_web::Result<impl Responder> {
    match store::employee::create_employee(pool.get_ref(), payload.into_inner()).await {
        Ok(employee) => {
            info!("Employee onboarded");
            Ok(HttpResponse::Created().json(employee))
        }
        Err(e @ (StoreError::DuplicateKey | StoreError::Validation)) => {
            info!(reason = ?e, "Employee rejected");
            Err(e.into())
        }
        Err(e) => {
            error!(error = %e, "Failed to create employee");
            Err(e.into())
        }
    }
}

/// Delete Employee
#[utoipa::path(
    delete,
    path = "/api/employees/{employee_id}",
    params(
        ("employee_id" = String, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Deleted, or nothing to delete", body = Object, example = json!({
            "message": "Deleted"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn delete_employee(
    pool: web::Data<SqlitePool>,
    config: web::Data<Config>,
    path: web::Path<String>,
) -> actix_web::Result<impl Responder> {
    let employee_id = path.into_inner();

    store::employee::delete_employee(
        pool.get_ref(),
        &employee_id,
        config.cascade_attendance_delete,
    )
    .await?;

    info!(employee_id = %employee_id, "Employee deleted");
    Ok(HttpResponse::Ok().json(json!({
        "message": "Deleted"
    })))
}

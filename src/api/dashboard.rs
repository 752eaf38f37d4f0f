use crate::{
    analytics::{Band, Tally, band},
    dashboard::{ReliabilityRow, reliability_rows},
    store,
};
use actix_web::{HttpResponse, Responder, web};
use serde::Serialize;
use sqlx::SqlitePool;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReliabilityResponse {
    #[schema(example = "E1")]
    pub employee_id: String,
    /// Null when the employee has no logs
    #[schema(example = 75, nullable = true)]
    pub score: Option<u32>,
    pub band: Band,
    #[schema(example = 3)]
    pub present: u32,
    #[schema(example = 4)]
    pub records: u32,
}

/// Reliability table
#[utoipa::path(
    get,
    path = "/api/dashboard",
    responses(
        (status = 200, description = "One row per log, oldest first, with the employee's score", body = [ReliabilityRow]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Dashboard"
)]
pub async fn reliability_table(pool: web::Data<SqlitePool>) -> actix_web::Result<impl Responder> {
    let attendance = store::attendance::list_attendance(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(reliability_rows(&attendance)))
}

/// Employee reliability
#[utoipa::path(
    get,
    path = "/api/employees/{employee_id}/reliability",
    params(
        ("employee_id" = String, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Score over every log for this id", body = ReliabilityResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Dashboard"
)]
pub async fn employee_reliability(
    pool: web::Data<SqlitePool>,
    path: web::Path<String>,
) -> actix_web::Result<impl Responder> {
    let employee_id = path.into_inner();
    let attendance = store::attendance::list_attendance(pool.get_ref()).await?;

    let tally = Tally::of(&employee_id, &attendance);
    let score = tally.score();

    Ok(HttpResponse::Ok().json(ReliabilityResponse {
        employee_id,
        score,
        band: band(score),
        present: tally.present,
        records: tally.total,
    }))
}

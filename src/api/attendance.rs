use crate::{
    config::Config,
    error::INVALID_ATTENDANCE_MESSAGE,
    model::attendance::{AttendanceRecord, NewAttendance},
    store,
};
use actix_web::{
    HttpRequest, HttpResponse, Responder,
    error::{InternalError, JsonPayloadError},
    web,
};
use serde_json::json;
use sqlx::SqlitePool;
use tracing::{debug, info, instrument};

/// Unparseable logs (bad date, unknown status, broken JSON) get a JSON
/// body like every other client error.
pub fn invalid_payload(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, "Rejected attendance payload");
    let response = HttpResponse::BadRequest().json(json!({
        "message": INVALID_ATTENDANCE_MESSAGE
    }));
    InternalError::from_response(err, response).into()
}

/// List Attendance
#[utoipa::path(
    get,
    path = "/api/attendance",
    responses(
        (status = 200, description = "All logs, newest date first", body = [AttendanceRecord]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn list_attendance(pool: web::Data<SqlitePool>) -> actix_web::Result<impl Responder> {
    let records = store::attendance::list_attendance(pool.get_ref()).await?;
    debug!(count = records.len(), "Fetched attendance");
    Ok(HttpResponse::Ok().json(records))
}

/// Log Attendance
///
/// Stored as sent. When the server is configured to enforce uniqueness, a
/// second log for the same employee and date, or a log for an unknown
/// employee, is refused.
#[utoipa::path(
    post,
    path = "/api/attendance",
    request_body = NewAttendance,
    responses(
        (status = 201, description = "Log stored", body = AttendanceRecord),
        (status = 400, description = "Malformed body, or refused by the uniqueness check", body = Object, example = json!({
            "message": "Record already exists for this date."
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
#[instrument(
    name = "create_attendance",
    skip(pool, config, payload),
    fields(employee_id = %payload.employee_id, date = %payload.date)
)]
pub async fn create_attendance(
    pool: web::Data<SqlitePool>,
    config: web::Data<Config>,
    payload: web::Json<NewAttendance>,
) -> actix_web::Result<impl Responder> {
    let new = payload.into_inner();

    let record = if config.enforce_unique_attendance {
        store::attendance::create_attendance_unique(pool.get_ref(), new).await
    } else {
        store::attendance::create_attendance(pool.get_ref(), new).await
    }
    .map_err(|e| {
        info!(error = %e, "Attendance not stored");
        e
    })?;

    info!(status = %record.status, "Attendance logged");
    Ok(HttpResponse::Created().json(record))
}

#[cfg(test)]
mod tests {
    use crate::{config::Config, db::test_pool, model::attendance::AttendanceRecord, routes};
    use actix_web::{App, http::StatusCode, test, web::Data};
    use serde_json::{Value, json};

    macro_rules! app {
        ($pool:expr, $config:expr) => {
            test::init_service(
                App::new()
                    .app_data(Data::new($pool.clone()))
                    .app_data(Data::new($config.clone()))
                    .configure(|cfg| routes::configure(cfg, $config.clone())),
            )
            .await
        };
    }

    fn log(date: &str, status: &str) -> Value {
        json!({"employeeId": "E1", "fullName": "Ann", "date": date, "status": status})
    }

    #[actix_web::test]
    async fn logs_come_back_newest_first() {
        let pool = test_pool().await;
        let config = Config::default();
        let app = app!(pool, config);

        for date in ["2024-01-02", "2024-01-03", "2023-12-30"] {
            let req = test::TestRequest::post()
                .uri("/api/attendance")
                .set_json(log(date, "Present"))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::CREATED);
        }

        let req = test::TestRequest::get().uri("/api/attendance").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let dates: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["date"].as_str().unwrap())
            .collect();
        assert_eq!(dates, ["2024-01-03", "2024-01-02", "2023-12-30"]);
        assert_eq!(body[0]["employeeId"], "E1");
        assert_eq!(body[0]["status"], "Present");
    }

    #[actix_web::test]
    async fn duplicates_pass_through_by_default() {
        let pool = test_pool().await;
        let config = Config::default();
        let app = app!(pool, config);

        for _ in 0..2 {
            let req = test::TestRequest::post()
                .uri("/api/attendance")
                .set_json(log("2024-01-01", "Present"))
                .to_request();
            assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);
        }

        let req = test::TestRequest::get().uri("/api/attendance").to_request();
        let records: Vec<AttendanceRecord> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(records.len(), 2);
    }

    #[actix_web::test]
    async fn enforced_uniqueness_refuses_second_log() {
        let pool = test_pool().await;
        let config = Config {
            enforce_unique_attendance: true,
            ..Config::default()
        };
        let app = app!(pool, config);

        let req = test::TestRequest::post()
            .uri("/api/attendance")
            .set_json(log("2024-01-01", "Present"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Employee not found");

        let req = test::TestRequest::post()
            .uri("/api/employees")
            .set_json(json!({"employeeId": "E1", "fullName": "Ann"}))
            .to_request();
        test::call_service(&app, req).await;

        let mut statuses = Vec::new();
        for _ in 0..2 {
            let req = test::TestRequest::post()
                .uri("/api/attendance")
                .set_json(log("2024-01-01", "Absent"))
                .to_request();
            statuses.push(test::call_service(&app, req).await.status());
        }
        assert_eq!(statuses, [StatusCode::CREATED, StatusCode::BAD_REQUEST]);
    }

    #[actix_web::test]
    async fn unknown_status_is_a_bad_request() {
        let pool = test_pool().await;
        let config = Config::default();
        let app = app!(pool, config);

        let req = test::TestRequest::post()
            .uri("/api/attendance")
            .set_json(log("2024-01-01", "Late"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"message": "Invalid Attendance Data"}));
    }

    #[actix_web::test]
    async fn broken_bodies_get_a_json_message() {
        let pool = test_pool().await;
        let config = Config::default();
        let app = app!(pool, config);

        let bad_date = test::TestRequest::post()
            .uri("/api/attendance")
            .set_json(log("2024-13-45", "Present"))
            .to_request();
        let garbage = test::TestRequest::post()
            .uri("/api/attendance")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request();

        for req in [bad_date, garbage] {
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["message"], "Invalid Attendance Data");
        }

        let req = test::TestRequest::get().uri("/api/attendance").to_request();
        let records: Vec<AttendanceRecord> = test::call_and_read_body_json(&app, req).await;
        assert!(records.is_empty());
    }
}

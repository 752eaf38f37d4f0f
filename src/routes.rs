use crate::{
    api::{attendance, dashboard, employee},
    config::Config,
};
use actix_governor::{
    Governor, GovernorConfig, GovernorConfigBuilder, PeerIpKeyExtractor,
    governor::middleware::NoOpMiddleware,
};
use actix_web::{middleware::Condition, web};

pub fn configure(cfg: &mut web::ServiceConfig, config: Config) {
    // Helper to build the per-peer limiter
    fn build_limiter(requests_per_min: u32) -> Governor<PeerIpKeyExtractor, NoOpMiddleware> {
        let requests_per_min = requests_per_min.max(1);
        let per_ms = 60_000 / requests_per_min as u64;
        let limiter = GovernorConfigBuilder::default()
            .per_millisecond(per_ms.max(1))
            .burst_size(requests_per_min)
            .key_extractor(PeerIpKeyExtractor)
            .finish()
            .unwrap_or_else(GovernorConfig::default);
        Governor::new(&limiter)
    }

    let limited = config.rate_api_per_min > 0;

    cfg.service(
        web::scope(&config.api_prefix)
            .wrap(Condition::new(limited, build_limiter(config.rate_api_per_min)))
            .service(
                web::scope("/employees")
                    // /employees
                    .service(
                        web::resource("")
                            .app_data(web::JsonConfig::default().error_handler(employee::invalid_payload))
                            .route(web::get().to(employee::list_employees))
                            .route(web::post().to(employee::create_employee)),
                    )
                    // /employees/{id}
                    .service(
                        web::resource("/{id}").route(web::delete().to(employee::delete_employee)),
                    )
                    // /employees/{id}/reliability
                    .service(
                        web::resource("/{id}/reliability")
                            .route(web::get().to(dashboard::employee_reliability)),
                    ),
            )
            .service(
                web::scope("/attendance")
                    // /attendance
                    .service(
                        web::resource("")
                            .app_data(web::JsonConfig::default().error_handler(attendance::invalid_payload))
                            .route(web::get().to(attendance::list_attendance))
                            .route(web::post().to(attendance::create_attendance)),
                    ),
            )
            .service(web::resource("/dashboard").route(web::get().to(dashboard::reliability_table))),
    );
}

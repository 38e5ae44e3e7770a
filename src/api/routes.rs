use actix_cors::Cors;
use actix_web::{web, HttpResponse};
use tracing_actix_web::TracingLogger;

use super::handlers;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg
        // Health checks
        .route("/health", web::get().to(health_check))
        .route("/ready", web::get().to(readiness_check))
        // API v1
        .service(
            web::scope("/api/v1")
                .wrap(TracingLogger::default())
                .wrap(
                    Cors::default()
                        .allowed_origin_fn(|origin, _req_head| {
                            origin.as_bytes().starts_with(b"http://localhost")
                                || origin.as_bytes().starts_with(b"https://")
                        })
                        .allowed_methods(vec!["GET", "POST"])
                        .allowed_headers(vec!["Content-Type", "Authorization"])
                        .max_age(3600),
                )
                .service(
                    web::scope("/weddings/{id}")
                        .route("/export", web::post().to(handlers::export_document))
                        .route(
                            "/export/preview",
                            web::get().to(handlers::preview_counts),
                        ),
                ),
        );
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy"
    }))
}

async fn readiness_check(state: web::Data<super::ApiState>) -> HttpResponse {
    let db_healthy = sqlx::query("SELECT 1")
        .fetch_one(&state.db)
        .await
        .is_ok();

    if db_healthy {
        HttpResponse::Ok().json(serde_json::json!({
            "status": "ready",
            "checks": { "database": "ok" }
        }))
    } else {
        HttpResponse::ServiceUnavailable().json(serde_json::json!({
            "status": "not_ready",
            "checks": { "database": "failed" }
        }))
    }
}

use actix_web::HttpResponse;
use chrono::Utc;

#[derive(serde::Serialize)]
struct LivenessResponse {
    status: &'static str,
    service: &'static str,
}

#[derive(serde::Serialize)]
struct HealthResponse {
    status: &'static str,
    timestamp: String,
}

pub async fn liveness() -> HttpResponse {
    HttpResponse::Ok().json(LivenessResponse {
        status: "ok",
        service: env!("CARGO_PKG_NAME"),
    })
}

pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy",
        timestamp: Utc::now().to_rfc3339(),
    })
}

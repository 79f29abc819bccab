use crate::health::HealthChecker;
use actix_web::{get, web, HttpResponse, Responder};
use std::sync::Arc;

#[get("")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().finish()
}

/// Component report; 503 once any component is unhealthy.
#[tracing::instrument(name = "Health status.", skip(checker))]
#[get("/status")]
pub async fn health_status(checker: web::Data<Arc<HealthChecker>>) -> impl Responder {
    let report = checker.check_all().await;
    if report.is_unhealthy() {
        HttpResponse::ServiceUnavailable().json(report)
    } else {
        HttpResponse::Ok().json(report)
    }
}

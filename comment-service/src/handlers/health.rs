/// Health check endpoint
use crate::store::ContentStore;
use actix_web::{web, HttpResponse};

/// Report service health, including store connectivity.
pub async fn health_summary(store: web::Data<dyn ContentStore>) -> HttpResponse {
    match store.ping().await {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({
            "status": "ok",
            "service": "comment-service",
            "version": env!("CARGO_PKG_VERSION"),
        })),
        Err(e) => HttpResponse::ServiceUnavailable().json(serde_json::json!({
            "status": "unhealthy",
            "error": format!("store connectivity failed: {}", e),
            "service": "comment-service",
        })),
    }
}

//! JSON pass-through to the pricing backend.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, get, web};
use serde_json::{Value, json};

use crate::backend::BackendClient;

/// Registers `/quote` and `/health`; mount under `/api`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/quote")
            .route(web::post().to(relay_quote))
            .default_service(web::to(method_not_allowed)),
    )
    .service(health);
}

/// Forwards the body untouched and mirrors the backend's status and JSON.
pub async fn relay_quote(
    backend: web::Data<BackendClient>,
    web::Json(body): web::Json<Value>,
) -> impl Responder {
    match backend.relay(&body).await {
        Ok((status, data)) => {
            let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
            HttpResponse::build(status).json(data)
        }
        Err(err) => {
            log::error!("Failed to relay quote to {}: {err}", backend.url());
            HttpResponse::InternalServerError().json(json!({"error": "Backend error"}))
        }
    }
}

pub async fn method_not_allowed() -> impl Responder {
    HttpResponse::MethodNotAllowed().json(json!({"error": "Method not allowed"}))
}

#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(json!({"ok": true}))
}

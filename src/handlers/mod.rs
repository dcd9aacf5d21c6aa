use axum::response::IntoResponse;
use serde::Serialize;

use crate::utils::response::success;

pub mod bulk;
pub mod draw;
mod input;
pub mod single;

#[derive(Serialize)]
struct HealthPayload {
    status: &'static str,
    service: &'static str,
}

pub async fn health_check() -> impl IntoResponse {
    success(HealthPayload {
        status: "ok",
        service: "ticket-registry",
    })
}

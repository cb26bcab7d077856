use axum::Json;

use crate::schema::health::HealthResponse;

/// `GET /healthz`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        ok: true,
        service: "contentgrade",
    })
}

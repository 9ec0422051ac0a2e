use axum::Json;

use super::model::{HealthResponse, SERVICE_NAME};

// 健康检查
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: SERVICE_NAME,
    })
}

use serde::Serialize;

pub const SERVICE_NAME: &str = "reminder-service";

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

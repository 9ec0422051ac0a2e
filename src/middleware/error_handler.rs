use axum::{body::Body, http::Request, middleware::Next, response::Response};
use tracing::{error, warn};

/// 记录所有非成功的响应
pub async fn log_errors(req: Request<Body>, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let response = next.run(req).await;

    let status = response.status();
    if status.is_server_error() {
        error!("Server error occurred - Status: {}, {} {}", status, method, path);
    } else if status.is_client_error() {
        warn!("Client error - Status: {}, {} {}", status, method, path);
    }

    response
}

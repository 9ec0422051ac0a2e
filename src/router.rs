use axum::{
    Router,
    http::{Method, header},
    routing::get,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{AppState, middleware::log_errors, routes};

// 允许所有来源；OPTIONS 请求由 CORS 层直接返回 200
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

pub fn app(state: AppState) -> Router {
    Router::new()
        // get 默认也响应 HEAD，这里显式返回 404
        .route(
            "/health",
            get(routes::health::health)
                .head(routes::not_found)
                .fallback(routes::not_found),
        )
        .route(
            "/reminders",
            get(routes::reminder::list_reminders)
                .head(routes::not_found)
                .post(routes::reminder::create_reminder)
                .fallback(routes::not_found),
        )
        .fallback(routes::not_found)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http().make_span_with(|req: &axum::http::Request<_>| {
                        let method = req.method().clone();
                        let uri = req.uri().clone();
                        tracing::info_span!("http_request", %method, uri = %uri)
                    }),
                )
                .layer(cors_layer())
                .layer(axum::middleware::from_fn(log_errors)),
        )
}

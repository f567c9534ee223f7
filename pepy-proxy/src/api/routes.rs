use axum::{
    http::{header, HeaderValue},
    routing::get,
    Router,
};
use tower_http::set_header::SetResponseHeaderLayer;

use super::handlers::*;
use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/pepy", get(package_stats_handler))
        .route("/api/pyfilterlab", get(package_stats_handler))
        .with_state(state)
        // Wildcard origin on every response, including 404/405 and requests without Origin.
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
}

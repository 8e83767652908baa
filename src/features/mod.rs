pub mod cors;
pub mod home;
pub mod posts;

use crate::AppState;
use crate::config::BlogConfig;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::StatusCode,
    middleware,
    response::IntoResponse,
};
use tower_http::trace::TraceLayer;

/// The complete HTTP surface. State is supplied by the caller.
pub fn app_router(config: &BlogConfig) -> Router<AppState> {
    Router::new()
        .merge(home::home_router())
        .merge(posts::posts_router())
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .layer(middleware::from_fn(cors::preflight))
        .layer(TraceLayer::new_for_http())
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Not Found")
}

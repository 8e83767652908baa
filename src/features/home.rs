use crate::AppState;
use axum::{Router, response::Html, routing::any};

const INDEX_HTML: &str = include_str!("../../static/index.html");

// served for every method, the page is the whole frontend
pub fn home_router() -> Router<AppState> {
    Router::new().route("/", any(index_handler))
}

async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

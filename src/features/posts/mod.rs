pub mod model;

use crate::AppState;
use crate::domain::NewPost;
use crate::error::ApiError;
use crate::features::cors;
use axum::{
    Json, Router,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{delete, get},
};
use model::{CreatePostRequest, CreatedPost, JsonPost};

pub fn posts_router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/posts",
            get(list_posts_handler)
                .post(create_post_handler)
                .fallback(method_not_allowed),
        )
        // the empty-id form has to be its own route, `{id}` never matches an empty segment
        .route(
            "/api/posts/",
            delete(missing_id_handler).fallback(method_not_allowed),
        )
        .route(
            "/api/posts/{id}",
            delete(delete_post_handler).fallback(method_not_allowed),
        )
        .route_layer(middleware::from_fn(cors::attach_headers))
}

async fn list_posts_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<JsonPost>>, ApiError> {
    let posts = state.repo.list_posts().await?;

    Ok(Json(posts.iter().map(JsonPost::from).collect()))
}

// the body is read raw so that any content type is accepted and a bad body
// surfaces as a server error rather than an extractor rejection
async fn create_post_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<CreatedPost>), ApiError> {
    let request: CreatePostRequest = serde_json::from_slice(&body)?;
    let new_post = NewPost {
        title: request.title,
        content: request.content,
    };

    let id = state.repo.create_post(&new_post).await?;
    tracing::info!(id, post = %new_post, "Created post");

    Ok((StatusCode::CREATED, Json(CreatedPost { id })))
}

async fn delete_post_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.repo.delete_post(&id).await?;
    tracing::info!(id = %id, "Deleted post");

    Ok(StatusCode::NO_CONTENT)
}

async fn missing_id_handler() -> impl IntoResponse {
    (StatusCode::BAD_REQUEST, "Bad Request")
}

async fn method_not_allowed() -> impl IntoResponse {
    (StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed")
}

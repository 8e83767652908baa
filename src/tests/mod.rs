mod unit_config;

use crate::AppState;
use crate::config::BlogConfig;
use crate::database::PostRepository;
use crate::domain::{NewPost, Post};
use crate::features::app_router;
use anyhow::Result;
use async_trait::async_trait;
use axum::{Router, body::Body, response::Response};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Pool, Sqlite};
use std::sync::Arc;

// a fresh in-memory database with the posts table in place
// a single connection that never expires, otherwise the database vanishes with it
pub async fn setup_test_pool() -> Pool<Sqlite> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create in-memory database");

    crate::database::sqlite::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

pub fn test_config() -> BlogConfig {
    BlogConfig::from_lookup(|_| None).expect("defaults should always parse")
}

// the full router, exactly as main builds it, over the given store
pub fn test_app(repo: impl PostRepository + 'static) -> Router {
    test_app_with_config(repo, &test_config())
}

pub fn test_app_with_config(repo: impl PostRepository + 'static, config: &BlogConfig) -> Router {
    let state = AppState {
        repo: Arc::new(repo),
    };

    app_router(config).with_state(state)
}

pub async fn body_string(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub fn request(method: &str, uri: &str, body: Body) -> axum::http::Request<Body> {
    axum::http::Request::builder()
        .method(method)
        .uri(uri)
        .body(body)
        .unwrap()
}

// --- Manual Mock: PostRepository ---
// a store that is always down, for checking how failures surface
pub struct FailingRepository;

#[async_trait]
impl PostRepository for FailingRepository {
    async fn list_posts(&self) -> Result<Vec<Post>> {
        anyhow::bail!("store unavailable")
    }

    async fn create_post(&self, _post: &NewPost) -> Result<i64> {
        anyhow::bail!("store unavailable")
    }

    async fn delete_post(&self, _id: &str) -> Result<()> {
        anyhow::bail!("store unavailable")
    }
}

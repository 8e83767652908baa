use crate::domain::{NewPost, Post};
use anyhow::Result;
use async_trait::async_trait;

pub mod sqlite;

// shared between request handlers behind an Arc; sqlx::Pool is thread safe
// each method maps to exactly one SQL statement, no transactions
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// All posts, newest first.
    async fn list_posts(&self) -> Result<Vec<Post>>;

    // write operations
    /// Inserts a post and returns the id the store assigned to it.
    async fn create_post(&self, post: &NewPost) -> Result<i64>;
    /// Deletes by id as received on the wire. Deleting a missing id is not an error.
    async fn delete_post(&self, id: &str) -> Result<()>;
}

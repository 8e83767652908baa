use crate::database::PostRepository;
use crate::domain::{NewPost, Post};
use crate::features::posts::model::DbPost;
use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::{Pool, Sqlite};

pub struct SqliteRepository {
    pool: Pool<Sqlite>,
}

impl SqliteRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }
}

/// Creates the posts table if it is absent. Safe to run on every startup.
pub async fn run_migrations(pool: &Pool<Sqlite>) -> Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("Failed to run database migrations")?;

    Ok(())
}

#[async_trait]
impl PostRepository for SqliteRepository {
    async fn list_posts(&self) -> Result<Vec<Post>> {
        // created_at only has second precision, id breaks the ties
        let db_posts =
            sqlx::query_as::<_, DbPost>("SELECT * FROM posts ORDER BY created_at DESC, id DESC")
                .fetch_all(&self.pool)
                .await
                .context("Failed to list posts")?;

        Ok(db_posts.into_iter().map(Post::from).collect())
    }

    async fn create_post(&self, post: &NewPost) -> Result<i64> {
        let result = sqlx::query("INSERT INTO posts (title, content) VALUES (?, ?)")
            .bind(&post.title)
            .bind(&post.content)
            .execute(&self.pool)
            .await
            .context(format!("Failed to insert post {}", post))?;

        Ok(result.last_insert_rowid())
    }

    async fn delete_post(&self, id: &str) -> Result<()> {
        // bound as text, sqlite applies the column's integer affinity
        sqlx::query("DELETE FROM posts WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .context(format!("Failed to delete post {}", id))?;

        Ok(())
    }
}

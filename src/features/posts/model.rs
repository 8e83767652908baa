use crate::domain::Post;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

pub const CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(sqlx::FromRow, Debug, Clone, PartialEq, Eq)]
pub struct DbPost {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created_at: Option<NaiveDateTime>,
}

impl From<DbPost> for Post {
    fn from(row: DbPost) -> Self {
        Post {
            id: row.id,
            title: row.title,
            content: row.content,
            created_at: row.created_at,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct JsonPost {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created_at: Option<String>,
}

impl From<&Post> for JsonPost {
    fn from(post: &Post) -> Self {
        JsonPost {
            id: post.id,
            title: post.title.to_owned(),
            content: post.content.to_owned(),
            created_at: post
                .created_at
                .map(|val| val.format(CREATED_AT_FORMAT).to_string()),
        }
    }
}

// both fields are required, a missing one fails deserialization
#[derive(Deserialize, Debug)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct CreatedPost {
    pub id: i64,
}

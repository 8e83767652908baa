use chrono::NaiveDateTime;
use derive_more::derive::Display;

/// A stored blog entry. `id` and `created_at` are always assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created_at: Option<NaiveDateTime>,
}

/// What a client may supply when writing a post.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("{:?}", title)]
pub struct NewPost {
    pub title: String,
    pub content: String,
}

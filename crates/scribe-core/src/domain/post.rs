use serde::{Deserialize, Serialize};

/// Post record as stored in the `posts` table.
///
/// `owner_id` references an existing user; the storage layer enforces the
/// constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub owner_id: i32,
}

/// Fields of a post that the caller controls on create and update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub content: String,
}

use async_trait::async_trait;

use crate::domain::{NewPost, NewUser, Post, User};
use crate::error::RepoError;

/// User repository - one method per logical operation.
///
/// Methods returning `Option` report an absent row as `None`; `RepoError` is
/// reserved for database failures.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, RepoError>;

    /// List users ordered by id, skipping `skip` rows and returning at most
    /// `limit`.
    async fn list(&self, skip: u64, limit: u64) -> Result<Vec<User>, RepoError>;

    /// Insert a new user with a database-assigned id.
    ///
    /// A duplicate email yields [`RepoError::UniqueViolation`].
    async fn create(&self, user: NewUser) -> Result<User, RepoError>;

    /// Update the user with the given id, or insert a new row carrying that
    /// id when none exists (upsert-by-id). Runs in a single transaction;
    /// any failure rolls the transaction back.
    async fn upsert(&self, id: i32, user: NewUser) -> Result<User, RepoError>;

    /// Delete the user with the given id, returning the deleted record or
    /// `None` when no row matched.
    async fn delete(&self, id: i32) -> Result<Option<User>, RepoError>;
}

/// Post repository.
///
/// Unlike users, posts have plain update semantics: updating an absent id
/// returns `None` rather than inserting.
#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<Post>, RepoError>;

    async fn list(&self, skip: u64, limit: u64) -> Result<Vec<Post>, RepoError>;

    /// Insert a post owned by `owner_id`.
    ///
    /// A missing owner yields [`RepoError::ForeignKeyViolation`].
    async fn create(&self, owner_id: i32, post: NewPost) -> Result<Post, RepoError>;

    async fn update(&self, id: i32, post: NewPost) -> Result<Option<Post>, RepoError>;

    async fn delete(&self, id: i32) -> Result<Option<Post>, RepoError>;

    /// All posts owned by the given user, ordered by id.
    async fn find_by_owner(&self, owner_id: i32) -> Result<Vec<Post>, RepoError>;
}

//! Repository-level error taxonomy.

use thiserror::Error;

/// Errors surfaced by the data-access layer.
///
/// Absent rows are not errors: read, update and delete operations report a
/// missing row as `None` in their return type. Only genuine database
/// failures travel through this enum.
#[derive(Debug, Error)]
pub enum RepoError {
    /// A write violated a uniqueness constraint (e.g. `users.email`).
    #[error("Unique constraint violated: {0}")]
    UniqueViolation(String),

    /// A write referenced a row that does not exist (e.g. `posts.owner_id`).
    #[error("Foreign key constraint violated: {0}")]
    ForeignKeyViolation(String),

    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),
}

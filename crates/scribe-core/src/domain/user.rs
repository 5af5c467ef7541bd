use serde::{Deserialize, Serialize};

/// User record as stored in the `users` table.
///
/// Ids are assigned by the database, except through
/// [`UserRepository::upsert`](crate::ports::UserRepository::upsert), which
/// may insert a row carrying a caller-supplied id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
}

/// Fields of a user that the caller controls on create and update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

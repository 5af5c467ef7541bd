//! SeaORM entity definitions for the `users` and `posts` tables.

pub mod post;
pub mod user;

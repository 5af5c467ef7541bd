//! Database access: connection management, entities, repositories and
//! schema migrations.

mod connection;
pub mod entity;
pub mod migrations;
mod repos;

pub use connection::{DatabaseConfig, connect};
pub use repos::{PgPostRepository, PgUserRepository};

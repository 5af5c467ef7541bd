//! # Scribe Infrastructure
//!
//! Concrete implementations of the ports defined in `scribe-core`,
//! backed by SeaORM.

pub mod database;

pub use database::{DatabaseConfig, PgPostRepository, PgUserRepository, connect};

// Re-exported so downstream crates do not need a direct SeaORM dependency.
pub use sea_orm::{DbConn, DbErr};

//! # Scribe API Server
//!
//! Actix-web front end for the users/posts CRUD service.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod state;

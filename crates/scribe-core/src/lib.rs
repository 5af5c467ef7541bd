//! # Scribe Core
//!
//! The domain layer of the Scribe service.
//! This crate contains the domain records and repository ports with zero
//! infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::RepoError;

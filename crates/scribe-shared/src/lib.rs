//! # Scribe Shared
//!
//! Wire types shared between the server and API clients: request/response
//! DTOs and the error payload format.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;

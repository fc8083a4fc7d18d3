//! Application layer - Use cases and business logic
//!
//! This layer contains:
//! - Bot: Assembly of a validated configuration into a client handle
//! - Errors: Domain-specific errors

pub mod bot;
pub mod errors;

pub use bot::Bot;

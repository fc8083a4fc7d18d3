//! Infrastructure layer - External concerns
//!
//! This layer contains:
//! - Config: Connection options and file configuration
//! - Logging: The dual-sink runtime logger
//! - Commands: Command module discovery and loading
//! - Adapters: Platform integrations

pub mod adapters;
pub mod commands;
pub mod config;
pub mod logging;

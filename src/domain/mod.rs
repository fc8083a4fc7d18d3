//! Domain layer - Core business objects with no external dependencies
//!
//! This layer contains:
//! - Entities: Core business objects (Command, Intent, Message)
//! - Traits: Abstractions for infrastructure (ChatClient, Connector)

pub mod entities;
pub mod traits;

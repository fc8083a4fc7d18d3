//! Command module discovery and loading
//!
//! The commands root holds one subdirectory per group; each group directory
//! holds command modules compiled as shared libraries. Every module exports a
//! `botkit_command_init` constructor producing a [`crate::domain::entities::Command`].

pub mod loader;
pub mod registry;

pub use loader::{CommandLoader, DylibImporter, LoadPolicy, ModuleImporter, COMMAND_INIT_SYMBOL};
pub use registry::{CommandRegistry, LoadedCommand};

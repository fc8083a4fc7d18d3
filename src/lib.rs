//! botkit - a minimal scaffold for building chat-bot clients
//!
//! The scaffold validates connection options, discovers command modules from
//! a directory tree, and logs runtime events to console and file. Platform
//! connectivity and command dispatch stay behind trait seams.

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::bot::Bot;
pub use application::errors::{
    BotError, ModuleLoadError, PathNotFoundError, ValidationError,
};
pub use infrastructure::config::{LoggerOptions, Options};

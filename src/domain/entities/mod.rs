//! Domain entities - Core business objects

pub mod command;
pub mod intent;
pub mod message;

pub use command::Command;
pub use intent::Intent;
pub use message::{Content, Message};

//! Domain traits - Abstractions for infrastructure implementations

pub mod client;

pub use client::{ChatClient, ClientInfo, Connector};

//! Application layer errors

use std::path::PathBuf;
use thiserror::Error;

/// General bot errors
#[derive(Error, Debug)]
pub enum BotError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    PathNotFound(#[from] PathNotFoundError),

    #[error("module load error: {0}")]
    ModuleLoad(#[from] ModuleLoadError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("command error: {0}")]
    Command(#[from] CommandError),

    #[error("network error: {0}")]
    Network(String),

    #[error("internal error: {0}")]
    Internal(String),
}

/// Bad or missing configuration input
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing bot token")]
    MissingToken,

    #[error("missing bot prefix")]
    MissingPrefix,

    #[error("{0} is not a valid gateway intent")]
    UnknownIntent(String),

    #[error("unknown log level: {0}")]
    UnknownLogLevel(String),
}

/// A referenced directory is absent on disk
#[derive(Error, Debug)]
#[error("{} does not exist", path.display())]
pub struct PathNotFoundError {
    pub path: PathBuf,
}

/// A command module failed to import or lacks the expected surface
#[derive(Error, Debug)]
pub enum ModuleLoadError {
    #[error("failed to read {}: {source}", dir.display())]
    ReadDir {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to open {}: {reason}", path.display())]
    Library { path: PathBuf, reason: String },

    #[error("{} does not export {symbol}", path.display())]
    MissingSymbol {
        path: PathBuf,
        symbol: &'static str,
    },

    #[error("module constructor in {} returned null", path.display())]
    NullInstance { path: PathBuf },
}

/// Configuration file errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Read(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Command execution errors
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("command not found: {0}")]
    NotFound(String),

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),

    #[error("execution failed: {0}")]
    ExecutionFailed(String),
}

//! Connection configuration
//!
//! [`Options`] is the validated, builder-style bundle a [`crate::Bot`] is
//! assembled from. [`ConfigFile`] is its on-disk YAML form with environment
//! overrides.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::application::errors::{ConfigError, BotError, PathNotFoundError, ValidationError};
use crate::domain::entities::Intent;
use crate::infrastructure::commands::LoadPolicy;
use crate::infrastructure::logging::LogLevel;

/// Logger sub-configuration
#[derive(Debug, Clone)]
pub struct LoggerOptions {
    pub level: LogLevel,
    pub file: PathBuf,
}

impl LoggerOptions {
    /// Parse a level name (case-insensitive) and a destination file.
    pub fn new(level: &str, file: impl Into<PathBuf>) -> Result<Self, ValidationError> {
        Ok(Self {
            level: level.parse()?,
            file: file.into(),
        })
    }
}

/// Validated connection options.
///
/// Default paths resolve against an explicit base directory rather than the
/// ambient working directory, so builders stay testable without changing
/// process state.
#[derive(Debug, Clone)]
pub struct Options {
    token: String,
    prefix: String,
    intents: Vec<Intent>,
    logger: Option<LoggerOptions>,
    commands_path: PathBuf,
    events_path: PathBuf,
    load_policy: LoadPolicy,
}

impl Options {
    /// Requires a non-empty token and prefix. Defaults: the starter intent
    /// set, `base_dir/commands` and `base_dir/events`.
    pub fn new(
        token: impl Into<String>,
        prefix: impl Into<String>,
        base_dir: impl AsRef<Path>,
    ) -> Result<Self, ValidationError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ValidationError::MissingToken);
        }

        let prefix = prefix.into();
        if prefix.is_empty() {
            return Err(ValidationError::MissingPrefix);
        }

        let base = base_dir.as_ref();
        Ok(Self {
            token,
            prefix,
            intents: Intent::default_set().to_vec(),
            logger: None,
            commands_path: base.join("commands"),
            events_path: base.join("events"),
            load_policy: LoadPolicy::default(),
        })
    }

    /// Append intents by name, skipping ones already present.
    pub fn add_intents<I, S>(mut self, names: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            let intent: Intent = name.as_ref().parse()?;
            if !self.intents.contains(&intent) {
                self.intents.push(intent);
            }
        }
        Ok(self)
    }

    pub fn with_logger(mut self, logger: LoggerOptions) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Replace the commands root. The path must exist on disk.
    pub fn set_commands_path(mut self, path: impl AsRef<Path>) -> Result<Self, PathNotFoundError> {
        self.commands_path = resolve_dir(path.as_ref())?;
        Ok(self)
    }

    /// Replace the events root. The path must exist on disk.
    pub fn set_events_path(mut self, path: impl AsRef<Path>) -> Result<Self, PathNotFoundError> {
        self.events_path = resolve_dir(path.as_ref())?;
        Ok(self)
    }

    /// Choose how a failing command module affects the loading pass.
    pub fn set_load_policy(mut self, policy: LoadPolicy) -> Self {
        self.load_policy = policy;
        self
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn intents(&self) -> &[Intent] {
        &self.intents
    }

    pub fn logger(&self) -> Option<&LoggerOptions> {
        self.logger.as_ref()
    }

    pub fn commands_path(&self) -> &Path {
        &self.commands_path
    }

    pub fn events_path(&self) -> &Path {
        &self.events_path
    }

    pub fn load_policy(&self) -> LoadPolicy {
        self.load_policy
    }
}

fn resolve_dir(path: &Path) -> Result<PathBuf, PathNotFoundError> {
    path.canonicalize().map_err(|_| PathNotFoundError {
        path: path.to_path_buf(),
    })
}

/// On-disk configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigFile {
    pub bot: BotSection,
    #[serde(default)]
    pub logger: Option<LoggerSection>,
    #[serde(default)]
    pub paths: Option<PathsSection>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct BotSection {
    pub token: String,
    pub prefix: String,
    #[serde(default)]
    pub intents: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct LoggerSection {
    pub level: String,
    pub file: PathBuf,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct PathsSection {
    pub commands: Option<PathBuf>,
    pub events: Option<PathBuf>,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            bot: BotSection {
                token: String::new(),
                prefix: "!".to_string(),
                intents: Vec::new(),
            },
            logger: Some(LoggerSection {
                level: "info".to_string(),
                file: PathBuf::from("logs/bot.log"),
            }),
            paths: None,
        }
    }
}

impl ConfigFile {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&content)?)
    }

    /// Override token and prefix from `BOT_TOKEN` / `BOT_PREFIX`.
    pub fn apply_env(&mut self) {
        if let Ok(token) = std::env::var("BOT_TOKEN") {
            self.bot.token = token;
        }
        if let Ok(prefix) = std::env::var("BOT_PREFIX") {
            self.bot.prefix = prefix;
        }
    }

    /// Validate the file contents into [`Options`].
    pub fn into_options(self, base_dir: impl AsRef<Path>) -> Result<Options, BotError> {
        let mut options = Options::new(self.bot.token, self.bot.prefix, base_dir)?;
        options = options.add_intents(&self.bot.intents)?;

        if let Some(logger) = self.logger {
            options = options.with_logger(LoggerOptions::new(&logger.level, logger.file)?);
        }

        if let Some(paths) = self.paths {
            if let Some(commands) = paths.commands {
                options = options.set_commands_path(commands)?;
            }
            if let Some(events) = paths.events {
                options = options.set_events_path(events)?;
            }
        }

        Ok(options)
    }
}

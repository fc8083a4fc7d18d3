//! Level-filtered dual-sink logger
//!
//! Each log call writes one colorized line to stdout and appends one
//! uncolored line to the configured file. Calls below the configured
//! threshold are suppressed from both sinks; `error` bypasses the
//! threshold entirely, so errors always surface.

use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::Local;

use crate::application::errors::ValidationError;
use crate::infrastructure::config::LoggerOptions;

const RESET: &str = "\x1b[0m";
const CYAN: &str = "\x1b[96m";
const MAGENTA: &str = "\x1b[95m";
const YELLOW: &str = "\x1b[93m";

/// Log severity, ordered info < warn < error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Info = 0,
    Warn = 1,
    Error = 2,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }

    fn colorized(&self) -> &'static str {
        match self {
            LogLevel::Info => "\x1b[92mINFO\x1b[0m",
            LogLevel::Warn => "\x1b[93mWARN\x1b[0m",
            LogLevel::Error => "\x1b[91mERROR\x1b[0m",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = ValidationError;

    /// Case-insensitive; the stored level is always the canonical form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            other => Err(ValidationError::UnknownLogLevel(other.to_string())),
        }
    }
}

/// Runtime logger writing to stdout and an append-only file.
pub struct Logger {
    level: LogLevel,
    file: PathBuf,
    date: String,
    time: String,
}

impl Logger {
    pub fn new(options: &LoggerOptions) -> Self {
        let mut logger = Self {
            level: options.level,
            file: options.file.clone(),
            date: String::new(),
            time: String::new(),
        };
        logger.update_time();
        logger
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn file(&self) -> &Path {
        &self.file
    }

    pub fn info(&mut self, msg: &str) {
        if self.level > LogLevel::Info {
            return;
        }
        self.log(msg, LogLevel::Info);
    }

    pub fn warn(&mut self, msg: &str) {
        if self.level > LogLevel::Warn {
            return;
        }
        self.log(msg, LogLevel::Warn);
    }

    /// Never suppressed, regardless of the configured threshold.
    pub fn error(&mut self, msg: &str) {
        self.log(msg, LogLevel::Error);
    }

    fn log(&mut self, msg: &str, level: LogLevel) {
        self.update_time();
        self.console_log(msg, level);
        self.file_log(msg, level);
    }

    fn update_time(&mut self) {
        let now = Local::now();
        self.date = now.format("%B %-d").to_string();
        self.time = now.format("%H:%M:%S").to_string();
    }

    fn console_log(&self, msg: &str, level: LogLevel) {
        let date = format!("{CYAN}{}{RESET} {MAGENTA}{}{RESET}", self.date, self.time);
        let brand = format!("[{YELLOW}LOG{RESET}/{}]", level.colorized());
        println!("{date} {brand}: {msg}");
    }

    fn file_log(&self, msg: &str, level: LogLevel) {
        let line = format!("{} {} [LOG/{}]: {}\n", self.date, self.time, level, msg);
        let result = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.file)
            .and_then(|mut f| f.write_all(line.as_bytes()));

        // Losing the log file is fatal by design.
        if let Err(e) = result {
            panic!("failed to append to {}: {e}", self.file.display());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logger(level: LogLevel, dir: &tempfile::TempDir) -> Logger {
        let options = LoggerOptions {
            level,
            file: dir.path().join("bot.log"),
        };
        Logger::new(&options)
    }

    fn read_log(logger: &Logger) -> String {
        std::fs::read_to_string(logger.file()).unwrap_or_default()
    }

    #[test]
    fn parses_levels_case_insensitively() {
        assert_eq!("INFO".parse::<LogLevel>().unwrap(), LogLevel::Info);
        assert_eq!("Warn".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert_eq!("error".parse::<LogLevel>().unwrap(), LogLevel::Error);
    }

    #[test]
    fn rejects_unknown_level() {
        let err = "debug".parse::<LogLevel>().unwrap_err();
        assert_eq!(err, ValidationError::UnknownLogLevel("debug".into()));
    }

    #[test]
    fn severity_ordering() {
        assert!(LogLevel::Info < LogLevel::Warn);
        assert!(LogLevel::Warn < LogLevel::Error);
    }

    #[test]
    fn warn_threshold_suppresses_info() {
        let dir = tempfile::tempdir().unwrap();
        let mut logger = logger(LogLevel::Warn, &dir);

        logger.info("quiet");
        assert_eq!(read_log(&logger), "");

        logger.warn("careful");
        logger.error("broken");

        let contents = read_log(&logger);
        assert!(!contents.contains("quiet"));
        assert!(contents.contains("[LOG/WARN]: careful"));
        assert!(contents.contains("[LOG/ERROR]: broken"));
    }

    #[test]
    fn error_bypasses_the_threshold() {
        let dir = tempfile::tempdir().unwrap();
        let mut logger = logger(LogLevel::Error, &dir);

        logger.warn("careful");
        logger.error("broken");

        let contents = read_log(&logger);
        assert!(!contents.contains("careful"));
        assert!(contents.contains("[LOG/ERROR]: broken"));
    }

    #[test]
    fn file_lines_match_the_format() {
        let dir = tempfile::tempdir().unwrap();
        let mut logger = logger(LogLevel::Info, &dir);

        logger.info("hello");

        let contents = read_log(&logger);
        assert!(contents.ends_with("[LOG/INFO]: hello\n"));
        assert!(!contents.contains('\x1b'));

        // "<date> <time>" prefix: long month, day, HH:MM:SS.
        let prefix = contents.split(" [LOG/").next().unwrap();
        let mut parts = prefix.rsplitn(2, ' ');
        let time = parts.next().unwrap();
        let date = parts.next().unwrap();
        assert_eq!(time.len(), 8);
        assert_eq!(time.matches(':').count(), 2);
        assert!(date.contains(' '));
    }

    #[test]
    fn appends_across_calls() {
        let dir = tempfile::tempdir().unwrap();
        let mut logger = logger(LogLevel::Info, &dir);

        logger.info("first");
        logger.info("second");

        let contents = read_log(&logger);
        assert_eq!(contents.lines().count(), 2);
    }
}

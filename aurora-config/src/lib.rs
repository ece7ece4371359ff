//! Aurora Config - Pure configuration data structures
//!
//! This crate contains only data structures, no logic or global state.
//! It serves as the shared configuration vocabulary across all Aurora crates.
//!
//! The project file (`aurora.json`) deserializes straight into [`AuroraConfig`];
//! every field has a default, so `{}` is a valid project file.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration for the lexical scanner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexerConfig {
    /// Drop whitespace and line-break tokens from the output
    pub filter_trivia: bool,
    /// Reject inputs larger than this many bytes before scanning
    pub max_input_bytes: Option<usize>,
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            filter_trivia: true,
            max_input_bytes: None,
        }
    }
}

/// Log verbosity, ordered from quietest to loudest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Parse a level name; `silent` is accepted as an alias for `off`
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "off" | "silent" => Some(LogLevel::Off),
            "error" => Some(LogLevel::Error),
            "warn" => Some(LogLevel::Warn),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            "trace" => Some(LogLevel::Trace),
            _ => None,
        }
    }
}

/// Execution phase enum for phase-specific configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Lexer,
    Repl,
    Cli,
}

impl Phase {
    /// Get the string name of the phase
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Lexer => "lexer",
            Phase::Repl => "repl",
            Phase::Cli => "cli",
        }
    }

    /// Get the log target name for this phase
    pub fn target(&self) -> &'static str {
        match self {
            Phase::Lexer => "aurora::lexer",
            Phase::Repl => "aurora::repl",
            Phase::Cli => "aurora::cli",
        }
    }

    /// All phases, in pipeline order
    pub const ALL: [Phase; 3] = [Phase::Lexer, Phase::Repl, Phase::Cli];
}

/// Per-phase log levels; unset phases fall back to `global`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub global: LogLevel,
    pub lexer: Option<LogLevel>,
    pub repl: Option<LogLevel>,
    pub cli: Option<LogLevel>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            global: LogLevel::Warn,
            lexer: None,
            repl: None,
            cli: None,
        }
    }
}

impl LogConfig {
    /// Get log level for a specific phase
    pub fn level_for(&self, phase: Phase) -> LogLevel {
        let specific = match phase {
            Phase::Lexer => self.lexer,
            Phase::Repl => self.repl,
            Phase::Cli => self.cli,
        };
        specific.unwrap_or(self.global)
    }
}

/// Top-level project configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuroraConfig {
    pub lexer: LexerConfig,
    pub log: LogConfig,
}

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

impl AuroraConfig {
    /// Parse a project file body
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }
}

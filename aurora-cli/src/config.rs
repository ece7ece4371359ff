//! CLI 配置
//!
//! 读取项目文件 `aurora.json`，再叠加命令行参数

use std::path::{Path, PathBuf};

use aurora_api::{AuroraConfig, AuroraError, LogLevel};

/// Project file looked up in the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "aurora.json";

/// Command-line values that take precedence over the project file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub raw: bool,
    /// `-v` count: 1 = info, 2 = debug, 3+ = trace
    pub verbose: u8,
    pub log_level: Option<LogLevel>,
    pub log_lexer: Option<LogLevel>,
}

/// Load the project configuration.
///
/// An explicit path must exist. Without one, `./aurora.json` is used when
/// present and defaults otherwise.
pub fn load_project_config(explicit: Option<&Path>) -> Result<AuroraConfig, AuroraError> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let default = PathBuf::from(DEFAULT_CONFIG_FILE);
            if !default.exists() {
                return Ok(AuroraConfig::default());
            }
            default
        }
    };
    let content = std::fs::read_to_string(&path)?;
    Ok(AuroraConfig::from_json_str(&content)?)
}

pub fn apply_overrides(config: &mut AuroraConfig, overrides: &Overrides) {
    if overrides.raw {
        config.lexer.filter_trivia = false;
    }

    let verbose = match overrides.verbose {
        0 => None,
        1 => Some(LogLevel::Info),
        2 => Some(LogLevel::Debug),
        _ => Some(LogLevel::Trace),
    };
    if let Some(level) = overrides.log_level.or(verbose) {
        config.log.global = level;
    }
    if let Some(level) = overrides.log_lexer {
        config.log.lexer = Some(level);
    }
}

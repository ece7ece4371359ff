//! API 层配置
//!
//! 执行配置 RunConfig，由项目文件或命令行参数构造

use aurora_config::{AuroraConfig, LexerConfig};

/// Per-run configuration handed to [`crate::lex`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunConfig {
    /// Scanner options
    pub lexer: LexerConfig,
}

impl RunConfig {
    /// Take the run-relevant part of a project configuration
    pub fn from_project(config: &AuroraConfig) -> Self {
        Self {
            lexer: config.lexer.clone(),
        }
    }

    /// Same configuration with trivia kept or dropped
    pub fn with_filter_trivia(mut self, filter: bool) -> Self {
        self.lexer.filter_trivia = filter;
        self
    }
}

//! API 类型定义
//!
//! 词法分析的输出类型。

use aurora_core::{AuroraTag, Token};
use serde::Serialize;

/// Result of a successful [`crate::lex`] call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexOutput<'src> {
    /// Tokens in input order, ending with the end-of-input sentinel
    pub tokens: Vec<Token<'src, AuroraTag>>,
    /// Whether whitespace and line breaks were dropped
    pub filtered: bool,
}

impl<'src> LexOutput<'src> {
    /// Number of tokens, sentinel excluded
    pub fn len(&self) -> usize {
        self.tokens.len().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Owned, serialisable copies of every token
    pub fn records(&self) -> Vec<TokenRecord> {
        self.tokens.iter().map(TokenRecord::from).collect()
    }
}

/// Owned token view for JSON output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenRecord {
    pub tag: AuroraTag,
    /// Lexeme, with invalid UTF-8 replaced
    pub text: String,
    pub line: usize,
    pub column: usize,
    pub cursor: usize,
}

impl From<&Token<'_, AuroraTag>> for TokenRecord {
    fn from(token: &Token<'_, AuroraTag>) -> Self {
        Self {
            tag: token.tag(),
            text: String::from_utf8_lossy(token.lexeme()).into_owned(),
            line: token.line(),
            column: token.column(),
            cursor: token.cursor(),
        }
    }
}

impl std::fmt::Display for TokenRecord {
    /// `TAG 'text' @line:col #cursor`
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} '{}' @{}:{} #{}",
            self.tag,
            self.text.escape_debug(),
            self.line,
            self.column,
            self.cursor
        )
    }
}

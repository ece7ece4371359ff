//! Lexer 构建器
//!
//! Scanners over the standard Aurora rule table. The table is still handed to
//! the scanner explicitly; these helpers only pick it for the caller.

use aurora_config::LexerConfig;

use super::rules::standard_rules;
use super::token_kind::AuroraTag;
use crate::kit::lexer::{RuleTable, ScanError, Scanner, Token};

/// Scanner over the shared standard table
pub fn build_scanner() -> Scanner<&'static RuleTable<AuroraTag>> {
    Scanner::new(standard_rules())
}

/// Raw Aurora token stream, trivia included
pub fn tokenize(input: &[u8]) -> Result<Vec<Token<'_, AuroraTag>>, ScanError<'_, AuroraTag>> {
    build_scanner().tokenize(input)
}

/// Aurora token stream without whitespace and line breaks
pub fn tokenize_filtered(
    input: &[u8],
) -> Result<Vec<Token<'_, AuroraTag>>, ScanError<'_, AuroraTag>> {
    build_scanner().tokenize_filtered(input)
}

/// Raw or filtered, as `config.filter_trivia` selects
pub fn tokenize_with_config<'src>(
    input: &'src [u8],
    config: &LexerConfig,
) -> Result<Vec<Token<'src, AuroraTag>>, ScanError<'src, AuroraTag>> {
    if config.filter_trivia {
        tokenize_filtered(input)
    } else {
        tokenize(input)
    }
}

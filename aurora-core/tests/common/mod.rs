//! 测试辅助工具

#![allow(dead_code)]

use aurora_core::{AuroraTag, Token};

/// `(tag, text, line, column, cursor)` view of a token
pub type Row = (AuroraTag, String, usize, usize, usize);

pub fn rows(tokens: &[Token<'_, AuroraTag>]) -> Vec<Row> {
    tokens
        .iter()
        .map(|t| {
            (
                t.tag(),
                String::from_utf8_lossy(t.lexeme()).into_owned(),
                t.line(),
                t.column(),
                t.cursor(),
            )
        })
        .collect()
}

pub fn row(tag: AuroraTag, text: &str, line: usize, column: usize, cursor: usize) -> Row {
    (tag, text.to_string(), line, column, cursor)
}

/// Concatenate every lexeme except the sentinel's
pub fn concat(tokens: &[Token<'_, AuroraTag>]) -> Vec<u8> {
    tokens
        .iter()
        .filter(|t| !t.is_eof())
        .flat_map(|t| t.lexeme().iter().copied())
        .collect()
}

pub fn tags(tokens: &[Token<'_, AuroraTag>]) -> Vec<AuroraTag> {
    tokens.iter().map(|t| t.tag()).collect()
}

//! Lexer error types
//!
//! A scan fails in exactly one way: no rule recognizes the byte run at the
//! cursor. The error carries the offending byte and its position; the tokens
//! scanned before it travel alongside in [`ScanError`].

use std::fmt;

use thiserror::Error;

use super::core::SourcePosition;
use super::token::Token;

/// What went wrong
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// No lexical rule matched the remaining input
    #[error("no lexical rule matched byte 0x{byte:02x}")]
    NoRuleMatched { byte: u8 },
}

/// Lexical error with the position of the first unmatched byte
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("[{}:{}] {kind}", .position.line, .position.column)]
pub struct LexerError {
    pub kind: ErrorKind,
    pub position: SourcePosition,
}

impl LexerError {
    /// Create an error at the given position
    pub fn at(kind: ErrorKind, position: SourcePosition) -> Self {
        Self { kind, position }
    }

    /// 1-based line of the failure
    pub fn line(&self) -> usize {
        self.position.line
    }

    /// 1-based byte column of the failure
    pub fn column(&self) -> usize {
        self.position.column
    }

    /// 0-based byte offset of the failure
    pub fn cursor(&self) -> usize {
        self.position.cursor
    }
}

/// A failed scan: the error plus every token accumulated before it.
///
/// The partial sequence is never filtered and never ends with a sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanError<'src, K> {
    error: LexerError,
    partial: Vec<Token<'src, K>>,
}

impl<'src, K> ScanError<'src, K> {
    pub fn new(error: LexerError, partial: Vec<Token<'src, K>>) -> Self {
        Self { error, partial }
    }

    pub fn error(&self) -> &LexerError {
        &self.error
    }

    /// Tokens scanned before the failure, in input order
    pub fn partial(&self) -> &[Token<'src, K>] {
        &self.partial
    }

    pub fn into_parts(self) -> (LexerError, Vec<Token<'src, K>>) {
        (self.error, self.partial)
    }

    /// Drop the partial tokens, keeping an owned error
    pub fn into_error(self) -> LexerError {
        self.error
    }
}

impl<K> fmt::Display for ScanError<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.error.fmt(f)
    }
}

impl<K: fmt::Debug> std::error::Error for ScanError<'_, K> {}

impl<K> From<ScanError<'_, K>> for LexerError {
    fn from(err: ScanError<'_, K>) -> Self {
        err.into_error()
    }
}

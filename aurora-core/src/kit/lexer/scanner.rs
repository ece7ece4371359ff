//! Scanner: drives a [`RuleMatcher`] over the whole input
//!
//! One pass, no recovery. Every step consumes at least one byte, so a scan
//! takes at most `input.len()` matcher calls.

use tracing::{debug, debug_span, trace, warn};

use super::core::SourcePosition;
use super::error::{ErrorKind, LexerError, ScanError};
use super::matcher::RuleMatcher;
use super::token::Token;
use super::types::LexTag;

const TARGET: &str = "aurora::lexer";

/// Tokenizer over an explicitly supplied rule matcher.
///
/// Holds no mutable state; one scanner can serve any number of inputs,
/// from any number of threads when the matcher is `Sync`.
#[derive(Debug, Clone, Copy)]
pub struct Scanner<M> {
    matcher: M,
}

impl<M: RuleMatcher> Scanner<M> {
    pub fn new(matcher: M) -> Self {
        Self { matcher }
    }

    pub fn matcher(&self) -> &M {
        &self.matcher
    }

    /// Tokenize `input` completely.
    ///
    /// On success the last token is the end-of-input sentinel, positioned just
    /// past the last real token. On failure the returned [`ScanError`] holds
    /// every token scanned before the first unmatched byte.
    pub fn tokenize<'src>(
        &self,
        input: &'src [u8],
    ) -> Result<Vec<Token<'src, M::Tag>>, ScanError<'src, M::Tag>> {
        let span = debug_span!(target: TARGET, "tokenize", len = input.len());
        let _enter = span.enter();

        let mut position = SourcePosition::start();
        let mut tokens = Vec::new();

        while position.cursor < input.len() {
            let remaining = &input[position.cursor..];
            let Some(found) = self.matcher.match_rule(remaining) else {
                let error = LexerError::at(
                    ErrorKind::NoRuleMatched {
                        byte: remaining[0],
                    },
                    position,
                );
                warn!(target: TARGET, %error, scanned = tokens.len(), "lexical scan failed");
                return Err(ScanError::new(error, tokens));
            };
            debug_assert!(
                !found.run.is_empty() && found.run.len() <= remaining.len(),
                "rule matcher returned an empty or out-of-range run"
            );

            trace!(
                target: TARGET,
                tag = ?found.tag,
                line = position.line,
                column = position.column,
                cursor = position.cursor,
                len = found.run.len(),
                "produced token"
            );
            tokens.push(Token::new(found.tag, found.run, position));
            position.advance(found.run.len(), found.tag.is_line_break());
        }

        tokens.push(Token::eof(position));
        debug!(
            target: TARGET,
            tokens = tokens.len(),
            lines = position.line,
            "scan complete"
        );
        Ok(tokens)
    }

    /// Tokenize `input` and drop whitespace and line-break tokens.
    ///
    /// Surviving tokens keep their original positions. A failed scan is
    /// passed through untouched, partial tokens unfiltered.
    pub fn tokenize_filtered<'src>(
        &self,
        input: &'src [u8],
    ) -> Result<Vec<Token<'src, M::Tag>>, ScanError<'src, M::Tag>> {
        let tokens = self.tokenize(input)?;
        Ok(filter_trivia(tokens))
    }
}

/// Keep only semantic tokens (and the sentinel), preserving order
pub fn filter_trivia<K: LexTag>(tokens: Vec<Token<'_, K>>) -> Vec<Token<'_, K>> {
    tokens.into_iter().filter(|token| !token.is_trivia()).collect()
}

//! Aurora API - Lexing orchestration layer
//!
//! Provides the unified entry point used by the CLI and by library users:
//! - Configuration abstraction (RunConfig)
//! - Input limits and view selection (raw or filtered)
//! - Unified error handling (AuroraError)

use tracing::{debug, info};

pub mod config;
pub mod error;
pub mod types;

pub use config::RunConfig;
pub use error::{AuroraError, ConfigError, ErrorReport, LexerError};
pub use types::{LexOutput, TokenRecord};

// Re-export config and core types
pub use aurora_config;
pub use aurora_config::{AuroraConfig, LexerConfig, LogConfig, LogLevel, Phase};
pub use aurora_core::{AuroraTag, Token};

const TARGET: &str = "aurora::lexer";

/// Tokenize `source` under `config`.
///
/// Oversized inputs are rejected before any scanning. A lexical failure
/// drops the partial prefix; use [`aurora_core::tokenize`] directly to keep it.
pub fn lex<'src>(
    source: &'src [u8],
    config: &RunConfig,
) -> Result<LexOutput<'src>, AuroraError> {
    if let Some(limit) = config.lexer.max_input_bytes {
        if source.len() > limit {
            return Err(AuroraError::InputTooLarge {
                len: source.len(),
                limit,
            });
        }
    }

    debug!(
        target: TARGET,
        len = source.len(),
        filtered = config.lexer.filter_trivia,
        "starting lexer"
    );
    let tokens =
        aurora_core::tokenize_with_config(source, &config.lexer).map_err(|e| e.into_error())?;
    info!(target: TARGET, tokens = tokens.len(), "lexer completed");

    Ok(LexOutput {
        tokens,
        filtered: config.lexer.filter_trivia,
    })
}

/// Convenience wrapper for text sources
pub fn lex_str<'src>(
    source: &'src str,
    config: &RunConfig,
) -> Result<LexOutput<'src>, AuroraError> {
    lex(source.as_bytes(), config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_lex_filtered_by_default() {
        let output = lex_str("a + 1\n", &RunConfig::default()).unwrap();
        assert!(output.filtered);
        let tags: Vec<_> = output.tokens.iter().map(|t| t.tag()).collect();
        assert_eq!(
            tags,
            vec![AuroraTag::Ident, AuroraTag::Add, AuroraTag::Number, AuroraTag::Eof]
        );
        assert_eq!(output.len(), 3);
    }

    #[test]
    fn test_lex_raw() {
        let config = RunConfig::default().with_filter_trivia(false);
        let output = lex_str("a + 1\n", &config).unwrap();
        assert_eq!(output.len(), 6);
        assert!(!output.filtered);
    }

    #[test]
    fn test_lex_empty() {
        let output = lex(b"", &RunConfig::default()).unwrap();
        assert!(output.is_empty());
        assert_eq!(output.tokens.len(), 1);
    }

    #[test]
    fn test_lex_rejects_oversized_input() {
        let mut config = RunConfig::default();
        config.lexer.max_input_bytes = Some(4);
        assert!(lex(b"abcd", &config).is_ok());
        let err = lex(b"abcde", &config).unwrap_err();
        assert!(matches!(err, AuroraError::InputTooLarge { len: 5, limit: 4 }));
    }

    #[test]
    fn test_lex_error_position() {
        let err = lex_str("x = 1;\ny = $", &RunConfig::default()).unwrap_err();
        assert_eq!(err.line(), Some(2));
        assert_eq!(err.column(), Some(5));
    }

    #[test]
    fn test_records_and_display() {
        let output = lex_str("print \"hi\"", &RunConfig::default()).unwrap();
        let records = output.records();
        assert_eq!(records[0].to_string(), "PRINT 'print' @1:1 #0");
        assert_eq!(records[1].to_string(), "STR '\\\"hi\\\"' @1:7 #6");
        assert_eq!(records[2].to_string(), "EOF '' @1:11 #10");

        let json = serde_json::to_value(&records[1]).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "tag": "STR", "text": "\"hi\"", "line": 1, "column": 7, "cursor": 6 })
        );
    }
}

//! Aurora Core - Front end of the Aurora toolchain (pure logic, no IO)
//!
//! Converts raw source bytes into a linear stream of classified,
//! position-annotated tokens for the later stages (parser, emitter,
//! evaluator) to consume.
//!
//! Configuration is passed explicitly via parameters, not via global state.
//! The same holds for the rule table: the scanner is handed its matcher.

pub mod compiler;
pub mod kit;

// Re-export common types
pub use compiler::lexer::builder::{
    build_scanner, tokenize, tokenize_filtered, tokenize_with_config,
};
pub use compiler::lexer::token_kind::AuroraTag;
pub use kit::lexer::{LexerError, ScanError, SourcePosition, Token};

// Re-export config types from aurora-config
pub use aurora_config::LexerConfig;

//! Rule-driven lexical scanner
//!
//! Generic over the tag enumeration, so any language that can describe its
//! lexemes as a [`RuleMatcher`] gets:
//! - longest-match tokenization with exact line/column/cursor bookkeeping
//! - a synthetic end-of-input sentinel on every successful scan
//! - a filtered view without whitespace and line-break tokens
//!
//! Aurora's own tag set and rule table live in `compiler::lexer`.

pub mod core;
pub mod error;
pub mod matcher;
pub mod rules;
pub mod scanner;
pub mod token;
pub mod types;

pub use self::core::SourcePosition;
pub use error::{ErrorKind, LexerError, ScanError};
pub use matcher::{FnMatcher, RuleMatch, RuleMatcher};
pub use rules::{RuleError, RuleTable};
pub use scanner::Scanner;
pub use token::Token;
pub use types::LexTag;

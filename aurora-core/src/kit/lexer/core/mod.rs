//! Lexer primitives shared by every scanner

pub mod position;

pub use position::SourcePosition;

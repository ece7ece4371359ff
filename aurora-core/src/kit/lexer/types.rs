//! Tag contract between a language's tag enumeration and the scanner

use std::fmt::Debug;

/// A closed enumeration of lexical categories.
///
/// The scanner gives three kinds of tag special treatment:
/// - the line-break tag resets the column and bumps the line
/// - whitespace and line-break tags are dropped by the filtered view
/// - [`LexTag::EOF`] is reserved for the synthetic end-of-input token and
///   must never be produced by a rule
pub trait LexTag: Copy + Eq + Debug {
    /// Tag of the end-of-input sentinel
    const EOF: Self;

    /// Whether a token with this tag ends a line
    fn is_line_break(&self) -> bool;

    /// Whether a token with this tag is insignificant horizontal space
    fn is_whitespace(&self) -> bool;

    /// Whitespace or line break
    fn is_trivia(&self) -> bool {
        self.is_whitespace() || self.is_line_break()
    }

    fn is_eof(&self) -> bool {
        *self == Self::EOF
    }
}

//! Token record
//!
//! A token borrows its byte run from the scanned input, so a whole token
//! stream costs one `Vec` and no copies of the source.

use super::core::SourcePosition;
use super::types::LexTag;

/// One classified, positioned unit of consumed input.
///
/// Immutable once produced; all fields are read through accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'src, K> {
    tag: K,
    lexeme: &'src [u8],
    position: SourcePosition,
}

impl<'src, K: LexTag> Token<'src, K> {
    pub fn new(tag: K, lexeme: &'src [u8], position: SourcePosition) -> Self {
        Self {
            tag,
            lexeme,
            position,
        }
    }

    /// End-of-input sentinel at `position`
    pub fn eof(position: SourcePosition) -> Self {
        Self::new(K::EOF, &[], position)
    }

    /// The exact byte run consumed; empty only for the sentinel
    pub fn lexeme(&self) -> &'src [u8] {
        self.lexeme
    }

    /// The byte run as text, if it is valid UTF-8
    pub fn text(&self) -> Option<&'src str> {
        std::str::from_utf8(self.lexeme).ok()
    }

    pub fn tag(&self) -> K {
        self.tag
    }

    pub fn position(&self) -> SourcePosition {
        self.position
    }

    /// 1-based line at the token's start
    pub fn line(&self) -> usize {
        self.position.line
    }

    /// 1-based byte column at the token's start
    pub fn column(&self) -> usize {
        self.position.column
    }

    /// 0-based byte offset of the token's start
    pub fn cursor(&self) -> usize {
        self.position.cursor
    }

    pub fn len(&self) -> usize {
        self.lexeme.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lexeme.is_empty()
    }

    /// Byte offset just past the token
    pub fn end_cursor(&self) -> usize {
        self.position.cursor + self.lexeme.len()
    }

    pub fn is_eof(&self) -> bool {
        self.tag.is_eof()
    }

    pub fn is_trivia(&self) -> bool {
        self.tag.is_trivia()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum TestTag {
        Word,
        Space,
        Eof,
    }

    impl LexTag for TestTag {
        const EOF: Self = TestTag::Eof;

        fn is_line_break(&self) -> bool {
            false
        }

        fn is_whitespace(&self) -> bool {
            matches!(self, TestTag::Space)
        }
    }

    #[test]
    fn test_token_accessors() {
        let token = Token::new(TestTag::Word, b"abc", SourcePosition::new(2, 5, 17));
        assert_eq!(token.tag(), TestTag::Word);
        assert_eq!(token.lexeme(), b"abc");
        assert_eq!(token.text(), Some("abc"));
        assert_eq!(token.line(), 2);
        assert_eq!(token.column(), 5);
        assert_eq!(token.cursor(), 17);
        assert_eq!(token.len(), 3);
        assert_eq!(token.end_cursor(), 20);
        assert!(!token.is_eof());
        assert!(!token.is_trivia());
    }

    #[test]
    fn test_eof_token() {
        let token: Token<'_, TestTag> = Token::eof(SourcePosition::new(1, 4, 3));
        assert!(token.is_eof());
        assert!(token.is_empty());
        assert_eq!(token.text(), Some(""));
        assert_eq!(token.end_cursor(), 3);
    }

    #[test]
    fn test_non_utf8_lexeme() {
        let token = Token::new(TestTag::Space, &[0xff, 0xfe], SourcePosition::start());
        assert_eq!(token.text(), None);
        assert!(token.is_trivia());
    }
}

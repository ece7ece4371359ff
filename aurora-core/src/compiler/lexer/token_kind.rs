//! Aurora Token 类型定义

use serde::{Deserialize, Serialize};

use crate::kit::lexer::LexTag;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum AuroraTag {
    // 字面量 (0-2)
    Number = 0,
    Str,
    Logical,

    // 关键字 (10-17)
    If = 10,
    Else,
    Not,
    Or,
    And,
    Var,
    Func,
    Print,

    // 标识符 (20)
    Ident = 20,

    // 双字符符号 (30)
    Equal = 30,

    // 单字符符号 (40-54)
    GreaterThan = 40,
    LessThan,
    Assign,
    ParenBegin,
    ParenEnd,
    BlockBegin,
    BlockEnd,
    Add,
    Sub,
    Mult,
    Div,
    Exponent,
    Semi,
    Comma,
    Colon,

    // 空白字符 (240-241)
    Whitespace = 240,
    BreakLine,

    // 输入结束（仅由 Scanner 合成）
    Eof = 255,
}

impl AuroraTag {
    /// Stable upper-case name, as used in diagnostics and JSON output
    pub fn name(&self) -> &'static str {
        match self {
            AuroraTag::Number => "NUMBER",
            AuroraTag::Str => "STR",
            AuroraTag::Logical => "LOGICAL",
            AuroraTag::If => "IF",
            AuroraTag::Else => "ELSE",
            AuroraTag::Not => "NOT",
            AuroraTag::Or => "OR",
            AuroraTag::And => "AND",
            AuroraTag::Var => "VAR",
            AuroraTag::Func => "FUNC",
            AuroraTag::Print => "PRINT",
            AuroraTag::Ident => "IDENT",
            AuroraTag::Equal => "EQUAL",
            AuroraTag::GreaterThan => "GREATER_THAN",
            AuroraTag::LessThan => "LESS_THAN",
            AuroraTag::Assign => "ASSIGN",
            AuroraTag::ParenBegin => "PAREN_BEGIN",
            AuroraTag::ParenEnd => "PAREN_END",
            AuroraTag::BlockBegin => "BLOCK_BEGIN",
            AuroraTag::BlockEnd => "BLOCK_END",
            AuroraTag::Add => "ADD",
            AuroraTag::Sub => "SUB",
            AuroraTag::Mult => "MULT",
            AuroraTag::Div => "DIV",
            AuroraTag::Exponent => "EXPONENT",
            AuroraTag::Semi => "SEMI",
            AuroraTag::Comma => "COMMA",
            AuroraTag::Colon => "COLON",
            AuroraTag::Whitespace => "WHITESPACE",
            AuroraTag::BreakLine => "BREAK_LINE",
            AuroraTag::Eof => "EOF",
        }
    }

    pub fn is_keyword(&self) -> bool {
        (*self as u8) >= 10 && (*self as u8) < 20
    }

    pub fn is_literal(&self) -> bool {
        (*self as u8) < 10
    }

    /// Arithmetic, comparison and assignment symbols
    pub fn is_operator(&self) -> bool {
        matches!(
            self,
            AuroraTag::Equal
                | AuroraTag::GreaterThan
                | AuroraTag::LessThan
                | AuroraTag::Assign
                | AuroraTag::Add
                | AuroraTag::Sub
                | AuroraTag::Mult
                | AuroraTag::Div
                | AuroraTag::Exponent
        )
    }
}

impl LexTag for AuroraTag {
    const EOF: Self = AuroraTag::Eof;

    fn is_line_break(&self) -> bool {
        matches!(self, AuroraTag::BreakLine)
    }

    fn is_whitespace(&self) -> bool {
        matches!(self, AuroraTag::Whitespace)
    }
}

impl From<AuroraTag> for u8 {
    fn from(val: AuroraTag) -> Self {
        val as u8
    }
}

impl std::fmt::Display for AuroraTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repr_ranges() {
        assert_eq!(u8::from(AuroraTag::Number), 0);
        assert_eq!(u8::from(AuroraTag::If), 10);
        assert_eq!(u8::from(AuroraTag::Ident), 20);
        assert_eq!(u8::from(AuroraTag::GreaterThan), 40);
        assert_eq!(u8::from(AuroraTag::Colon), 54);
        assert_eq!(u8::from(AuroraTag::Whitespace), 240);
        assert_eq!(u8::from(AuroraTag::Eof), 255);
    }

    #[test]
    fn test_special_tags() {
        assert!(AuroraTag::BreakLine.is_line_break());
        assert!(AuroraTag::Whitespace.is_trivia());
        assert!(!AuroraTag::Ident.is_trivia());
        assert!(AuroraTag::Eof.is_eof());
        assert_eq!(<AuroraTag as LexTag>::EOF, AuroraTag::Eof);
    }

    #[test]
    fn test_classification() {
        assert!(AuroraTag::Print.is_keyword());
        assert!(!AuroraTag::Ident.is_keyword());
        assert!(AuroraTag::Logical.is_literal());
        assert!(AuroraTag::Div.is_operator());
        assert!(!AuroraTag::Comma.is_operator());
    }

    #[test]
    fn test_name_matches_serde() {
        let json = serde_json::to_string(&AuroraTag::BreakLine).unwrap();
        assert_eq!(json, format!("\"{}\"", AuroraTag::BreakLine.name()));
        let json = serde_json::to_string(&AuroraTag::GreaterThan).unwrap();
        assert_eq!(json, "\"GREATER_THAN\"");
    }
}

//! Aurora 词法规则表
//!
//! Order matters only for equal-length matches: keywords and `true`/`false`
//! sit before `Ident`, so `if` is a keyword while `iffy` is an identifier.

use once_cell::sync::Lazy;

use super::token_kind::AuroraTag;
use crate::kit::lexer::RuleTable;

/// The standard `(tag, pattern)` pairs, in declaration order
pub const AURORA_RULES: &[(AuroraTag, &str)] = &[
    (AuroraTag::Number, r"[0-9][0-9_]*"),
    (AuroraTag::Logical, r"true|false"),
    // 关键字
    (AuroraTag::If, r"if"),
    (AuroraTag::Else, r"else"),
    (AuroraTag::Not, r"not"),
    (AuroraTag::Or, r"or"),
    (AuroraTag::And, r"and"),
    (AuroraTag::Var, r"var"),
    (AuroraTag::Func, r"func"),
    (AuroraTag::Print, r"print"),
    (AuroraTag::Str, r#""[^"\n]*""#),
    (AuroraTag::Equal, r"=="),
    (AuroraTag::GreaterThan, r">"),
    (AuroraTag::LessThan, r"<"),
    (AuroraTag::Ident, r"[A-Za-z_][A-Za-z0-9_]*"),
    // 空白与换行
    (AuroraTag::BreakLine, r"\r?\n"),
    (AuroraTag::Whitespace, r"[ \t]+"),
    // 单独的 \r；\r\n 总是更长的 BreakLine
    (AuroraTag::Whitespace, r"\r"),
    // 单字符符号
    (AuroraTag::Assign, r"="),
    (AuroraTag::ParenBegin, r"\("),
    (AuroraTag::ParenEnd, r"\)"),
    (AuroraTag::BlockBegin, r"\{"),
    (AuroraTag::BlockEnd, r"\}"),
    (AuroraTag::Add, r"\+"),
    (AuroraTag::Sub, r"-"),
    (AuroraTag::Mult, r"\*"),
    (AuroraTag::Div, r"/"),
    (AuroraTag::Exponent, r"\^"),
    (AuroraTag::Semi, r";"),
    (AuroraTag::Comma, r","),
    (AuroraTag::Colon, r":"),
];

static STANDARD_RULES: Lazy<RuleTable<AuroraTag>> = Lazy::new(|| {
    RuleTable::new(AURORA_RULES).expect("built-in rule table is valid")
});

/// Shared, immutable rule table for the Aurora language
pub fn standard_rules() -> &'static RuleTable<AuroraTag> {
    &STANDARD_RULES
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kit::lexer::RuleMatcher;

    fn first(input: &str) -> Option<(AuroraTag, &str)> {
        standard_rules()
            .match_rule(input.as_bytes())
            .map(|m| (m.tag, std::str::from_utf8(m.run).unwrap()))
    }

    #[test]
    fn test_table_builds_with_every_rule() {
        let table = standard_rules();
        assert_eq!(table.len(), AURORA_RULES.len());
        assert!(!table.tags().any(|tag| tag == AuroraTag::Eof));
    }

    #[test]
    fn test_keyword_beats_ident_on_tie() {
        assert_eq!(first("if x"), Some((AuroraTag::If, "if")));
        assert_eq!(first("print(1)"), Some((AuroraTag::Print, "print")));
        assert_eq!(first("true;"), Some((AuroraTag::Logical, "true")));
    }

    #[test]
    fn test_longer_ident_beats_keyword() {
        assert_eq!(first("iffy"), Some((AuroraTag::Ident, "iffy")));
        assert_eq!(first("falsey"), Some((AuroraTag::Ident, "falsey")));
        assert_eq!(first("or_else"), Some((AuroraTag::Ident, "or_else")));
    }

    #[test]
    fn test_equal_beats_assign() {
        assert_eq!(first("== 1"), Some((AuroraTag::Equal, "==")));
        assert_eq!(first("= 1"), Some((AuroraTag::Assign, "=")));
    }

    #[test]
    fn test_literals() {
        assert_eq!(first("1_000 "), Some((AuroraTag::Number, "1_000")));
        assert_eq!(first(r#""hi there" x"#), Some((AuroraTag::Str, r#""hi there""#)));
        // unterminated on this line
        assert_eq!(first("\"abc\nd\""), None);
    }

    #[test]
    fn test_crlf_is_one_break() {
        assert_eq!(first("\r\nx"), Some((AuroraTag::BreakLine, "\r\n")));
        assert_eq!(first(" \t\r\n"), Some((AuroraTag::Whitespace, " \t")));
        assert_eq!(first("\r x"), Some((AuroraTag::Whitespace, "\r")));
    }

    #[test]
    fn test_symbols() {
        let cases = [
            ("(", AuroraTag::ParenBegin),
            (")", AuroraTag::ParenEnd),
            ("{", AuroraTag::BlockBegin),
            ("}", AuroraTag::BlockEnd),
            ("+", AuroraTag::Add),
            ("-", AuroraTag::Sub),
            ("*", AuroraTag::Mult),
            ("/", AuroraTag::Div),
            ("^", AuroraTag::Exponent),
            (";", AuroraTag::Semi),
            (",", AuroraTag::Comma),
            (":", AuroraTag::Colon),
            (">", AuroraTag::GreaterThan),
            ("<", AuroraTag::LessThan),
        ];
        for (text, tag) in cases {
            assert_eq!(first(text), Some((tag, text)), "symbol {text:?}");
        }
    }

    #[test]
    fn test_unknown_bytes_do_not_match() {
        assert_eq!(first("\x07"), None);
        assert_eq!(first("@"), None);
        assert!(standard_rules().match_rule(&[0xc3, 0xa9]).is_none());
    }
}

//! CLI 格式化输出
//!
//! 提供命令行友好的 token 输出、错误显示和源码上下文打印。

use std::io::{self, Write};

use aurora_api::{AuroraError, TokenRecord};

/// How `aurora lex` prints tokens
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// One `TAG 'text' @line:col #cursor` line per token
    Text,
    /// A JSON array of token records
    Json,
}

pub fn write_tokens<W: Write>(
    out: &mut W,
    records: &[TokenRecord],
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => {
            for record in records {
                writeln!(out, "{record}")?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, records)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// 打印错误并显示源代码上下文
pub fn print_error_with_source(e: &AuroraError, source: &str) {
    eprintln!("❌ {}", e);

    if let (Some(line), Some(col)) = (e.line(), e.column()) {
        let stderr = io::stderr();
        let _ = write_source_context(&mut stderr.lock(), source, line, col);
    }
}

/// 打印源代码上下文（显示错误行前后几行）
pub fn write_source_context<W: Write>(
    out: &mut W,
    source: &str,
    error_line: usize,
    error_col: usize,
) -> io::Result<()> {
    const CONTEXT_LINES: usize = 5; // 错误行前后显示的上下文行数

    let lines: Vec<&str> = source.lines().collect();
    let total_lines = lines.len();

    if error_line == 0 || error_line > total_lines {
        return Ok(());
    }

    let start_line = error_line.saturating_sub(CONTEXT_LINES).max(1);
    let end_line = (error_line + CONTEXT_LINES).min(total_lines);

    // 行号的最大宽度用于对齐
    let width = end_line.to_string().len();
    let separator = "-".repeat(width + 1);

    writeln!(out, "{separator}|--")?;
    for line_idx in start_line..=end_line {
        writeln!(out, "{:>width$} | {}", line_idx, lines[line_idx - 1])?;
        if line_idx == error_line {
            // columns count bytes, so the caret lines up for ASCII source
            let marker = " ".repeat(error_col.saturating_sub(1));
            writeln!(out, "{:width$} | {}^", "", marker)?;
        }
    }
    writeln!(out, "{separator}|--")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use aurora_api::{lex_str, RunConfig};
    use pretty_assertions::assert_eq;

    fn render(source: &str, line: usize, col: usize) -> String {
        let mut out = Vec::new();
        write_source_context(&mut out, source, line, col).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_caret_under_column() {
        assert_eq!(
            render("var x = 1;\nx = $;\n", 2, 5),
            "--|--\n1 | var x = 1;\n2 | x = $;\n  |     ^\n--|--\n"
        );
    }

    #[test]
    fn test_line_out_of_range_prints_nothing() {
        assert_eq!(render("a\n", 3, 1), "");
        assert_eq!(render("a\n", 0, 1), "");
    }

    #[test]
    fn test_context_window_is_clipped() {
        let source: String = (1..=20).map(|i| format!("l{i}\n")).collect();
        let text = render(&source, 10, 1);
        assert!(text.contains(" 5 | l5\n"));
        assert!(!text.contains(" 4 | l4\n"));
        assert!(text.contains("15 | l15\n"));
        assert!(!text.contains("16 | l16"));
    }

    #[test]
    fn test_write_tokens_text() {
        let output = lex_str("x = 1", &RunConfig::default()).unwrap();
        let mut out = Vec::new();
        write_tokens(&mut out, &output.records(), OutputFormat::Text).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "IDENT 'x' @1:1 #0\nASSIGN '=' @1:3 #2\nNUMBER '1' @1:5 #4\nEOF '' @1:6 #5\n"
        );
    }

    #[test]
    fn test_write_tokens_json() {
        let output = lex_str("x", &RunConfig::default()).unwrap();
        let mut out = Vec::new();
        write_tokens(&mut out, &output.records(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value[0]["tag"], "IDENT");
        assert_eq!(value[1]["tag"], "EOF");
        assert_eq!(value[1]["cursor"], 1);
    }
}

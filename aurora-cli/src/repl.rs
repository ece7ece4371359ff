//! Interactive lexer loop
//!
//! Reads one line at a time, tokenizes it and prints the tokens. A lexical
//! error is reported and the loop goes on; end of input ends it.

use std::io::{self, BufRead, Write};

use aurora_api::{lex, RunConfig};
use tracing::{debug, warn};

pub const PROMPT: &str = ">> ";

const TARGET: &str = "aurora::repl";

pub fn start<R: BufRead, W: Write>(
    mut input: R,
    out: &mut W,
    config: &RunConfig,
) -> io::Result<()> {
    let mut buf = Vec::new();
    let mut line_no = 0usize;

    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            writeln!(out)?;
            debug!(target: TARGET, lines = line_no, "end of input");
            return Ok(());
        }
        line_no += 1;

        let line = strip_line_end(&buf);
        debug!(target: TARGET, line = line_no, len = line.len(), "read line");
        match lex(line, config) {
            Ok(output) => {
                for record in output.records() {
                    writeln!(out, "{record}")?;
                }
            }
            Err(e) => {
                warn!(target: TARGET, line = line_no, error = %e, "line rejected");
                writeln!(out, "{}", e.to_report())?;
            }
        }
    }
}

fn strip_line_end(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

//! Line-at-a-time driver
//!
//! Reads lines from any `BufRead`, transforms each one, and writes it out
//! before reading the next.

use crate::transform::Transformer;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Outcome of one run over an input stream
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Lines transformed and written
    pub lines: usize,
    /// The read error that ended the run early, if any
    pub read_error: Option<String>,
}

/// Transform every line of `reader` into `writer`.
///
/// Lines are split on `\n` with a trailing `\r` dropped. Bytes that are not
/// valid UTF-8 become U+FFFD and the run carries on. An I/O error while
/// reading is reported on `writer` as `Error reading input: <cause>` and ends
/// the run without failing it. Write errors are returned.
pub fn process<R: BufRead, W: Write>(
    mut reader: R,
    writer: &mut W,
    transformer: &Transformer,
) -> Result<RunSummary> {
    let mut summary = RunSummary::default();
    let terminate = transformer.terminates_lines();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                writeln!(writer, "Error reading input: {}", e)
                    .context("Failed to write to output")?;
                writer.flush().context("Failed to flush output")?;
                tracing::debug!(error = %e, lines = summary.lines, "input ended with read error");
                summary.read_error = Some(e.to_string());
                return Ok(summary);
            }
        }

        let line = String::from_utf8_lossy(strip_line_ending(&buf));
        let transformed = transformer.apply(&line);
        let written = if terminate {
            writeln!(writer, "{}", transformed)
        } else {
            write!(writer, "{}", transformed)
        };
        written.with_context(|| format!("Failed to write line {}", summary.lines + 1))?;
        writer.flush().context("Failed to flush output")?;

        summary.lines += 1;
    }

    tracing::debug!(lines = summary.lines, mode = ?transformer.mode(), "input exhausted");
    Ok(summary)
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expander::{expand, ExpandedSet};
    use std::io::{self, BufReader, Cursor, Read};

    fn run(input: &[u8], transformer: &Transformer) -> (String, RunSummary) {
        let mut out = Vec::new();
        let summary = process(Cursor::new(input), &mut out, transformer).unwrap();
        (String::from_utf8(out).unwrap(), summary)
    }

    #[test]
    fn test_translate_appends_newlines() {
        let transformer = Transformer::Translate {
            from: expand("a-z"),
            to: expand("A-Z"),
        };
        let (out, summary) = run(b"hello\nworld\n", &transformer);
        assert_eq!(out, "HELLO\nWORLD\n");
        assert_eq!(summary.lines, 2);
        assert_eq!(summary.read_error, None);
    }

    #[test]
    fn test_delete_and_squeeze_do_not_append_newlines() {
        let (out, _) = run(b"hello\nworld\n", &Transformer::Delete(ExpandedSet::from("lo")));
        assert_eq!(out, "hewrd");

        let (out, _) = run(b"aab\nbba\n", &Transformer::Squeeze(ExpandedSet::from("ab")));
        assert_eq!(out, "abba");
    }

    #[test]
    fn test_final_line_without_newline() {
        let transformer = Transformer::Translate {
            from: ExpandedSet::from("x"),
            to: ExpandedSet::from("y"),
        };
        let (out, summary) = run(b"x\nxx", &transformer);
        assert_eq!(out, "y\nyy\n");
        assert_eq!(summary.lines, 2);
    }

    #[test]
    fn test_crlf_is_stripped() {
        let transformer = Transformer::Delete(ExpandedSet::from("z"));
        let (out, _) = run(b"az\r\nbz\r\n", &transformer);
        assert_eq!(out, "ab");
    }

    #[test]
    fn test_empty_input() {
        let (out, summary) = run(b"", &Transformer::Squeeze(ExpandedSet::from("a")));
        assert_eq!(out, "");
        assert_eq!(summary, RunSummary::default());
    }

    #[test]
    fn test_invalid_utf8_line_does_not_stop_the_run() {
        let transformer = Transformer::Delete(ExpandedSet::from("x"));
        let (out, summary) = run(b"axb\ncaf\xe9\nmore x lines\n", &transformer);
        assert_eq!(out, "abcaf\u{FFFD}more  lines");
        assert_eq!(summary.lines, 3);
        assert_eq!(summary.read_error, None);
    }

    struct BrokenReader;

    impl Read for BrokenReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("device went away"))
        }
    }

    #[test]
    fn test_io_error_reports_and_stops() {
        let transformer = Transformer::Translate {
            from: ExpandedSet::from("a"),
            to: ExpandedSet::from("b"),
        };
        let reader = BufReader::new(Cursor::new(&b"aa\n"[..]).chain(BrokenReader));
        let mut out = Vec::new();
        let summary = process(reader, &mut out, &transformer).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "bb\nError reading input: device went away\n"
        );
        assert_eq!(summary.lines, 1);
        assert_eq!(summary.read_error, Some("device went away".to_string()));
    }
}

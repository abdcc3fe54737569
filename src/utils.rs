//! Miscellaneous utility functions.

use anyhow::Context as _;
use colored::Colorize;
use std::fmt::Write as _;
use std::io::Write;
use std::io::{self, ErrorKind};

use crate::tokenizer::{LexError, Spanned, Token};

/// Returns the 1-indexed `(line, column)` of the character at `offset`.
///
/// Both are counted in characters; a `\n` starts a new line. An offset past
/// the end of `text` is located one column after the last character.
pub fn line_column(text: &str, offset: usize) -> (usize, usize) {
    let mut line = 1;
    let mut column = 1;
    for c in text.chars().take(offset) {
        if c == '\n' {
            line += 1;
            column = 1;
        } else {
            column += 1;
        }
    }
    (line, column)
}

/// Renders a lex error against its source text, pointing a caret at the
/// offending character:
///
/// ```text
/// error: not a valid number at position: 8
///  --> 1:9
///   |
/// 1 | {"age": 2.}
///   |         ^
/// ```
pub fn render_diagnostic(text: &str, error: &LexError) -> String {
    let (line, column) = line_column(text, error.offset());
    let source_line = text.lines().nth(line - 1).unwrap_or_default();
    let gutter = " ".repeat(line.to_string().len());

    let mut out = String::new();
    // NOTE: writing to a String cannot fail
    let _ = writeln!(out, "error: {error}");
    let _ = writeln!(out, "{gutter}--> {line}:{column}");
    let _ = writeln!(out, "{gutter} |");
    let _ = writeln!(out, "{line} | {}", source_line.trim_end_matches('\r'));
    let _ = write!(out, "{gutter} | {}^", " ".repeat(column - 1));
    out
}

/// Colorizes a token's lexeme by token family.
fn colored_lexeme(token: &Token) -> colored::ColoredString {
    let lexeme = token.to_string();
    match token {
        Token::Null => lexeme.red().dimmed(),
        Token::True | Token::False => lexeme.yellow().bold(),
        Token::NumberLiteral(_) => lexeme.yellow(),
        Token::StringLiteral(_) => lexeme.green(),
        // the space lexeme would be invisible
        Token::Blank => "\u{b7}".dimmed(),
        _ => lexeme.cyan(),
    }
}

/// Write a single token as `Kind lexeme`, optionally prefixed by its
/// `start..end` offsets. Silently returns `Ok(())` on broken pipe so that
/// piping to tools like `less` or `head` exits cleanly.
///
/// # Errors
///
/// Returns an error if writing to `writer` fails.
pub fn write_colored_token<W: Write>(
    writer: &mut W,
    spanned: &Spanned,
    show_offsets: bool,
) -> anyhow::Result<()> {
    let result = (|| -> io::Result<()> {
        if show_offsets {
            let span = format!("{}..{}", spanned.start, spanned.end);
            write!(writer, "{} ", span.magenta())?;
        }
        let kind = spanned.token.kind_name();
        writeln!(writer, "{} {}", kind.bold(), colored_lexeme(&spanned.token))
    })();

    match result {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == ErrorKind::BrokenPipe => Ok(()),
        Err(err) => Err(err).context("write token to stdout"),
    }
}

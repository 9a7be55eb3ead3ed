//! Markdown-lite tokenizer for free-text CV fields
//!
//! Understands bullets (`-` / `*`), emphasis markers (stripped, not
//! rendered) and inline `[text](url)` links. Everything else is plain text.

use std::borrow::Cow;

pub mod ast;
pub mod inline;

pub use ast::*;
pub use inline::MAX_LINK_MATCHES;

/// Glyph that replaces `-` / `*` list markers
pub const BULLET: char = '•';

/// Parse free text into one [`ParsedLine`] per physical line.
///
/// Lines are split on `\n` with a trailing `\r` dropped; a trailing newline
/// yields a final blank line.
pub fn parse(text: &str) -> Vec<ParsedLine> {
    if text.is_empty() {
        return Vec::new();
    }
    text.split('\n')
        .map(|line| parse_line(line.strip_suffix('\r').unwrap_or(line)))
        .collect()
}

/// Parse a single physical line
pub fn parse_line(line: &str) -> ParsedLine {
    if line.trim().is_empty() {
        return ParsedLine::blank();
    }

    let leading = line.chars().take_while(|c| c.is_whitespace()).count();
    let body = rewrite_bullet(line.trim());
    let stripped = inline::strip_emphasis(&body);

    ParsedLine {
        indent: leading / 2,
        segments: inline::extract_links(&stripped),
    }
}

fn rewrite_bullet(line: &str) -> Cow<'_, str> {
    let mut chars = line.chars();
    match (chars.next(), chars.next()) {
        (Some('-' | '*'), Some(next)) if next.is_whitespace() => {
            Cow::Owned(format!("{} {}", BULLET, line[1..].trim_start()))
        }
        _ => Cow::Borrowed(line),
    }
}

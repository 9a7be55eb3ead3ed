//! Inline scanning: emphasis stripping and link extraction
//!
//! Both passes walk the line left to right over chars. Emphasis runs first
//! and leaves `[text](url)` markup in place (only the text part is stripped,
//! the target is copied verbatim); link extraction then splits the result
//! into segments.

use super::ast::Segment;

/// Upper bound on link matches per line; text past the cap stays plain
pub const MAX_LINK_MATCHES: usize = 100;

/// Positions of a `[text](url)` match within a char slice
#[derive(Debug, Clone, PartialEq, Eq)]
struct LinkMatch {
    text: std::ops::Range<usize>,
    url: std::ops::Range<usize>,
    end: usize,
}

/// Match `[text](url)` starting at `start`, both parts non-empty
fn match_link(chars: &[char], start: usize) -> Option<LinkMatch> {
    if chars.get(start) != Some(&'[') {
        return None;
    }
    let close = start + 1 + chars[start + 1..].iter().position(|&c| c == ']')?;
    if close == start + 1 || chars.get(close + 1) != Some(&'(') {
        return None;
    }
    let url_start = close + 2;
    let url_end = url_start + chars.get(url_start..)?.iter().position(|&c| c == ')')?;
    if url_end == url_start {
        return None;
    }
    Some(LinkMatch {
        text: start + 1..close,
        url: url_start..url_end,
        end: url_end + 1,
    })
}

fn collect(chars: &[char]) -> String {
    chars.iter().collect()
}

fn is_word_char(c: Option<&char>) -> bool {
    c.is_some_and(|c| c.is_alphanumeric())
}

/// Match an emphasis span of `width` copies of `marker` at `start`.
///
/// The body must be non-empty and free of `marker`, which makes the match
/// non-greedy. Underscore spans additionally need word boundaries on the
/// outside so identifiers like `snake_case_name` survive.
fn match_span(chars: &[char], start: usize, marker: char, width: usize) -> Option<(String, usize)> {
    let opening = chars.get(start..start + width)?;
    if opening.iter().any(|&c| c != marker) {
        return None;
    }
    if marker == '_' && start > 0 && is_word_char(chars.get(start - 1)) {
        return None;
    }
    let body_start = start + width;
    let body_len = chars.get(body_start..)?.iter().position(|&c| c == marker)?;
    if body_len == 0 {
        return None;
    }
    let body_end = body_start + body_len;
    let closing = chars.get(body_end..body_end + width)?;
    if closing.iter().any(|&c| c != marker) {
        return None;
    }
    let end = body_end + width;
    if marker == '_' && is_word_char(chars.get(end)) {
        return None;
    }
    Some((collect(&chars[body_start..body_end]), end))
}

fn match_emphasis(chars: &[char], start: usize) -> Option<(String, usize)> {
    match chars[start] {
        '*' => match_span(chars, start, '*', 2).or_else(|| match_span(chars, start, '*', 1)),
        '_' => match_span(chars, start, '_', 2).or_else(|| match_span(chars, start, '_', 1)),
        _ => None,
    }
}

/// Remove `**bold**`, `*italic*`, `__bold__` and `_italic_` markers
pub fn strip_emphasis(line: &str) -> String {
    let chars: Vec<char> = line.chars().collect();
    let mut out = String::with_capacity(line.len());
    let mut i = 0;

    while i < chars.len() {
        if let Some(link) = match_link(&chars, i) {
            out.push('[');
            out.push_str(&strip_emphasis(&collect(&chars[link.text.clone()])));
            out.push_str("](");
            out.push_str(&collect(&chars[link.url.clone()]));
            out.push(')');
            i = link.end;
            continue;
        }
        if let Some((body, end)) = match_emphasis(&chars, i) {
            out.push_str(&strip_emphasis(&body));
            i = end;
            continue;
        }
        out.push(chars[i]);
        i += 1;
    }

    out
}

/// Split a line into text and link segments.
///
/// A line without links comes back as a single text segment holding the
/// whole line, even when that line is empty.
pub fn extract_links(line: &str) -> Vec<Segment> {
    let chars: Vec<char> = line.chars().collect();
    let mut segments = Vec::new();
    let mut plain = String::new();
    let mut matches = 0;
    let mut i = 0;

    while i < chars.len() {
        if matches < MAX_LINK_MATCHES {
            if let Some(link) = match_link(&chars, i) {
                matches += 1;
                if !plain.is_empty() {
                    segments.push(Segment::text(std::mem::take(&mut plain)));
                }
                segments.push(Segment::link(
                    collect(&chars[link.text]),
                    collect(&chars[link.url]),
                ));
                i = link.end;
                continue;
            }
        }
        plain.push(chars[i]);
        i += 1;
    }

    if !plain.is_empty() || segments.is_empty() {
        segments.push(Segment::text(plain));
    }
    segments
}

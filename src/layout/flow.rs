//! Text flow: places wrapped text and markdown-lite blocks line by line

use crate::parser::{self, ParsedLine, Segment};

use super::cursor::Cursor;
use super::engine::LayoutContext;
use super::types::{DrawCommand, FontStyle, Point, TextStyle};

/// Place a single physical line at `x`, breaking the page first if needed
pub fn place_line(
    cursor: &mut Cursor,
    out: &mut Vec<DrawCommand>,
    text: &str,
    x: f64,
    style: TextStyle,
) {
    cursor.ensure_line(out);
    out.push(DrawCommand::Text {
        text: text.to_string(),
        at: Point::new(x, cursor.y()),
        style,
    });
    cursor.advance(1.0);
}

/// Wrap `text` to the column `[x, right]` and place every resulting line
pub fn place_wrapped(
    ctx: &LayoutContext<'_>,
    cursor: &mut Cursor,
    out: &mut Vec<DrawCommand>,
    text: &str,
    x: f64,
    right: f64,
    style: TextStyle,
) {
    for line in ctx
        .measure
        .wrap_text(text, right - x, style.font, style.size)
    {
        place_line(cursor, out, &line, x, style);
    }
}

/// Tokenize a markdown-lite block and place it in the column `[left, right]`
pub fn place_markdown(
    ctx: &LayoutContext<'_>,
    cursor: &mut Cursor,
    out: &mut Vec<DrawCommand>,
    text: &str,
    left: f64,
    right: f64,
) {
    for line in parser::parse(text) {
        place_parsed_line(ctx, cursor, out, &line, left, right);
    }
}

/// Place one tokenized line.
///
/// Blank lines advance half a line. Lines without links are wrapped as a
/// whole; lines with links are laid out segment by segment.
pub fn place_parsed_line(
    ctx: &LayoutContext<'_>,
    cursor: &mut Cursor,
    out: &mut Vec<DrawCommand>,
    line: &ParsedLine,
    left: f64,
    right: f64,
) {
    if line.is_blank() {
        cursor.half_line();
        return;
    }

    let x = ctx.config.indented_left(left, right, line.indent);
    if line.has_links() {
        place_segments(ctx, cursor, out, &line.segments, x, right);
    } else {
        let style = ctx.body_style(FontStyle::Normal);
        place_wrapped(ctx, cursor, out, &line.visible_text(), x, right, style);
    }
}

/// Lay out text and link segments on one logical line, soft-wrapping to
/// `start + continuation_indent` when a segment would cross `right`
pub fn place_segments(
    ctx: &LayoutContext<'_>,
    cursor: &mut Cursor,
    out: &mut Vec<DrawCommand>,
    segments: &[Segment],
    start: f64,
    right: f64,
) {
    let continuation = start + ctx.config.continuation_indent;
    let text_style = ctx.body_style(FontStyle::Normal);
    let link_style = TextStyle {
        color: ctx.colors.link,
        ..text_style
    };
    let width_of = |s: &str| {
        ctx.measure
            .measure_width(s, text_style.font, text_style.size)
    };

    cursor.ensure_line(out);
    let mut x = start;
    let mut line_start = start;

    for segment in segments {
        let width = width_of(segment.visible());
        if x + width > right && x > line_start {
            cursor.advance(1.0);
            cursor.ensure_line(out);
            x = continuation;
            line_start = continuation;
        }

        match segment {
            Segment::Link { text, url } => {
                out.push(DrawCommand::Link {
                    text: text.clone(),
                    url: url.clone(),
                    at: Point::new(x, cursor.y()),
                    style: link_style,
                });
                x += width;
            }
            Segment::Text { content } => {
                let content = if x == line_start {
                    content.trim_start()
                } else {
                    content.as_str()
                };
                if x + width_of(content) <= right {
                    out.push(DrawCommand::Text {
                        text: content.to_string(),
                        at: Point::new(x, cursor.y()),
                        style: text_style,
                    });
                    x += width_of(content);
                    continue;
                }

                // Still too wide on a fresh line: wrap inside the segment
                let pieces = ctx.measure.wrap_text(
                    content,
                    right - continuation,
                    text_style.font,
                    text_style.size,
                );
                for (i, piece) in pieces.iter().enumerate() {
                    if i > 0 {
                        cursor.advance(1.0);
                        cursor.ensure_line(out);
                        x = continuation;
                        line_start = continuation;
                    }
                    out.push(DrawCommand::Text {
                        text: piece.clone(),
                        at: Point::new(x, cursor.y()),
                        style: text_style,
                    });
                    x += width_of(piece);
                }
            }
        }
    }

    cursor.advance(1.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::config::LayoutConfig;
    use crate::layout::engine::ThemeColors;
    use crate::layout::measure::tests::FixedWidth;
    use crate::locale::Locale;
    use crate::stylesheet::Rgb;
    use pretty_assertions::assert_eq;

    const LINK_BLUE: Rgb = Rgb::new(0, 0, 255);

    fn run(text: &str, char_width: f64) -> (Vec<DrawCommand>, Cursor) {
        let config = LayoutConfig::default();
        let measure = FixedWidth(char_width);
        let ctx = LayoutContext {
            config: &config,
            measure: &measure,
            colors: ThemeColors {
                link: LINK_BLUE,
                ..ThemeColors::default()
            },
            locale: Locale::En,
        };
        let mut cursor = Cursor::new(&config);
        let mut out = Vec::new();
        place_markdown(&ctx, &mut cursor, &mut out, text, 20.0, 190.0);
        (out, cursor)
    }

    fn positions(out: &[DrawCommand]) -> Vec<(String, f64, f64)> {
        out.iter()
            .filter_map(|cmd| {
                let at = cmd.position()?;
                Some((cmd.text()?.to_string(), at.x, at.y))
            })
            .collect()
    }

    #[test]
    fn test_bullets_each_take_a_line() {
        let (out, cursor) = run("- Built X\n- Shipped Y", 2.0);
        assert_eq!(
            positions(&out),
            vec![
                ("• Built X".to_string(), 20.0, 20.0),
                ("• Shipped Y".to_string(), 20.0, 27.0),
            ]
        );
        assert_eq!(cursor.y(), 34.0);
    }

    #[test]
    fn test_blank_line_advances_half() {
        let (_, cursor) = run("a\n\nb", 2.0);
        assert_eq!(cursor.y(), 20.0 + 7.0 + 3.5 + 7.0);
    }

    #[test]
    fn test_indent_shifts_x() {
        let (out, _) = run("top\n    - nested", 2.0);
        assert_eq!(positions(&out)[1], ("• nested".to_string(), 30.0, 27.0));
    }

    #[test]
    fn test_deep_indent_keeps_words_whole() {
        let text = format!("{}word here", " ".repeat(70));
        let (out, cursor) = run(&text, 2.0);
        assert_eq!(positions(&out), vec![("word here".to_string(), 160.0, 20.0)]);
        assert_eq!(cursor.y(), 27.0);
    }

    #[test]
    fn test_long_text_wraps_within_column() {
        let word = "abcde ";
        let (out, cursor) = run(&word.repeat(20), 2.0);
        let lines = positions(&out);
        assert!(lines.len() > 1);
        for (text, x, _) in &lines {
            assert!(x + text.chars().count() as f64 * 2.0 <= 190.0);
        }
        assert_eq!(cursor.y(), 20.0 + lines.len() as f64 * 7.0);
    }

    #[test]
    fn test_link_line_mixes_colors() {
        let (out, cursor) = run("See [site](https://a.b) now", 1.0);
        assert_eq!(out.len(), 3);
        assert!(matches!(&out[0], DrawCommand::Text { text, at, style }
            if text == "See " && at.x == 20.0 && style.color == Rgb::BLACK));
        assert!(matches!(&out[1], DrawCommand::Link { text, url, at, style }
            if text == "site" && url == "https://a.b" && at.x == 24.0 && style.color == LINK_BLUE));
        assert!(matches!(&out[2], DrawCommand::Text { text, at, .. }
            if text == " now" && at.x == 28.0));
        assert_eq!(cursor.y(), 27.0);
    }

    #[test]
    fn test_link_overflow_continues_indented() {
        let text = format!("{} [link](https://x.y)", "a".repeat(166));
        let (out, cursor) = run(&text, 1.0);
        let link = out
            .iter()
            .find(|cmd| matches!(cmd, DrawCommand::Link { .. }))
            .and_then(DrawCommand::position);
        assert_eq!(link, Some(Point::new(23.0, 27.0)));
        assert_eq!(cursor.y(), 34.0);
    }

    #[test]
    fn test_flow_breaks_page_near_bottom() {
        let text = (0..40).map(|i| format!("line {}", i)).collect::<Vec<_>>().join("\n");
        let (out, cursor) = run(&text, 1.0);
        let breaks = out.iter().filter(|c| **c == DrawCommand::NewPage).count();
        assert_eq!(breaks, 1);
        assert_eq!(cursor.page_count(), 2);
        assert_eq!(positions(&out)[37], ("line 37".to_string(), 20.0, 20.0));
    }
}

//! Integration tests for the markdown-lite tokenizer

use pretty_assertions::assert_eq;

use cv_press::parser::{parse_line, MAX_LINK_MATCHES};
use cv_press::{parse, Segment};

#[test]
fn test_description_block() {
    let lines = parse("Led the team:\n  - **Shipped** v2\n  * wrote [docs](https://docs.rs)\n\nThanks");
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0].visible_text(), "Led the team:");
    assert_eq!((lines[1].indent, lines[1].visible_text()), (1, "• Shipped v2".to_string()));
    assert_eq!(
        lines[2].segments,
        vec![Segment::text("• wrote "), Segment::link("docs", "https://docs.rs")]
    );
    assert!(lines[3].is_blank());
    assert_eq!(lines[4].indent, 0);
}

#[test]
fn test_reparsing_visible_text_is_stable() {
    let inputs = [
        "plain words only",
        "see [a](https://a.example) and [b](https://b.example)",
        "- bullet with *emphasis*",
        "[only](x)",
    ];
    for input in inputs {
        let once = parse_line(input);
        let twice = parse_line(&once.visible_text());
        assert_eq!(once.visible_text(), twice.visible_text(), "input {:?}", input);
    }
}

#[test]
fn test_link_urls_keep_underscores() {
    let line = parse_line("[profile](https://example.com/some_user_name)");
    assert_eq!(
        line.segments,
        vec![Segment::link("profile", "https://example.com/some_user_name")]
    );
}

#[test]
fn test_link_extraction_is_capped() {
    let text = "[x](y) ".repeat(MAX_LINK_MATCHES + 5);
    let line = parse_line(&text);
    let links = line.segments.iter().filter(|s| s.is_link()).count();
    assert_eq!(links, MAX_LINK_MATCHES);
    assert!(line.visible_text().ends_with("[x](y)"));
}

#[test]
fn test_incomplete_link_is_text() {
    let line = parse_line("see [here] (x) or [](url) or [t]()");
    assert!(!line.has_links());
    assert_eq!(line.visible_text(), "see [here] (x) or [](url) or [t]()");
}

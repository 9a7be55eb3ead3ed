//! Section rendering: personal header, section headings and entries

use crate::locale::{ContactLabel, SectionKey};
use crate::model::{present, EntryView, PersonalInfo};
use crate::parser::Segment;

use super::cursor::{BreakLimit, Cursor};
use super::engine::LayoutContext;
use super::flow;
use super::photo;
use super::types::{DrawCommand, FontStyle, Point, TextStyle};

/// Place the personal header block.
///
/// The photo, when it decodes, sits in the top-right corner and narrows every
/// header line so text stays clear of it. Name and headline positions do not
/// depend on the photo.
pub fn personal_header(
    ctx: &LayoutContext<'_>,
    cursor: &mut Cursor,
    out: &mut Vec<DrawCommand>,
    personal: &PersonalInfo,
) {
    let config = ctx.config;
    let left = config.left_margin;

    let has_photo = match present(&personal.photo) {
        Some(value) => photo::place_photo(value, config, ctx.colors.photo_border, out),
        None => false,
    };
    let right = config.header_right_edge(has_photo);

    if !personal.name.trim().is_empty() {
        out.push(DrawCommand::Text {
            text: personal.name.trim().to_string(),
            at: Point::new(left, cursor.y()),
            style: TextStyle::new(FontStyle::Bold, config.name_font_size, ctx.colors.text),
        });
    }
    cursor.advance_by(config.name_spacing);

    if let Some(headline) = present(&personal.headline) {
        let style = TextStyle::new(
            FontStyle::Italic,
            config.headline_font_size,
            ctx.colors.text,
        );
        flow::place_wrapped(ctx, cursor, out, headline.trim(), left, right, style);
    }

    let divider_y = cursor.y() - config.header_divider_offset;
    out.push(DrawCommand::Line {
        from: Point::new(left, divider_y),
        to: Point::new(right, divider_y),
        color: ctx.colors.divider,
        width: config.divider_width,
    });
    cursor.advance_by(config.header_divider_gap);

    let body = ctx.body_style(FontStyle::Normal);
    let labeled = |label: ContactLabel, value: &Option<String>| {
        present(value).map(|v| format!("{}: {}", ctx.locale.label(label), v.trim()))
    };

    let contact: Vec<String> = [
        Some(personal.email.trim().to_string()).filter(|e| !e.is_empty()),
        labeled(ContactLabel::Phone, &personal.phone),
        present(&personal.location).map(|l| l.trim().to_string()),
    ]
    .into_iter()
    .flatten()
    .collect();
    if !contact.is_empty() {
        flow::place_wrapped(ctx, cursor, out, &contact.join(" | "), left, right, body);
    }

    let details: Vec<String> = [
        labeled(ContactLabel::Age, &personal.age),
        labeled(ContactLabel::Nationality, &personal.nationality),
    ]
    .into_iter()
    .flatten()
    .collect();
    if !details.is_empty() {
        flow::place_wrapped(ctx, cursor, out, &details.join(" | "), left, right, body);
    }

    for (label, value) in [
        (ContactLabel::Website, &personal.website),
        (ContactLabel::Linkedin, &personal.linkedin),
    ] {
        if let Some(value) = present(value) {
            labeled_link(ctx, cursor, out, ctx.locale.label(label), value.trim(), right);
        }
    }

    cursor.advance_by(config.section_spacing);
    if has_photo {
        let photo_bottom = photo::photo_bounds(config).bottom();
        cursor.move_below(photo_bottom + config.section_spacing);
    }
}

/// A black `Label: ` followed by the value as a hyperlink, kept inside the
/// header column
fn labeled_link(
    ctx: &LayoutContext<'_>,
    cursor: &mut Cursor,
    out: &mut Vec<DrawCommand>,
    label: &str,
    value: &str,
    right: f64,
) {
    let segments = [
        Segment::text(format!("{}: ", label)),
        Segment::link(value, link_target(value)),
    ];
    flow::place_segments(ctx, cursor, out, &segments, ctx.config.left_margin, right);
}

/// Link target for a website value; bare hosts get an `https://` scheme
pub fn link_target(value: &str) -> String {
    let value = value.trim();
    if value.contains("://") || value.starts_with("mailto:") {
        value.to_string()
    } else {
        format!("https://{}", value)
    }
}

/// Uppercased localized title with a full-width divider under it
pub fn section_heading(
    ctx: &LayoutContext<'_>,
    cursor: &mut Cursor,
    out: &mut Vec<DrawCommand>,
    key: SectionKey,
) {
    let config = ctx.config;
    cursor.ensure_room(0.0, BreakLimit::Section, out);

    out.push(DrawCommand::Text {
        text: ctx.locale.section_title(key).to_uppercase(),
        at: Point::new(config.left_margin, cursor.y()),
        style: TextStyle::new(FontStyle::Bold, config.heading_font_size, ctx.colors.text),
    });

    let divider_y = cursor.y() + config.heading_divider_offset;
    out.push(DrawCommand::Line {
        from: Point::new(config.left_margin, divider_y),
        to: Point::new(config.right_margin, divider_y),
        color: ctx.colors.divider,
        width: config.divider_width,
    });
    cursor.advance_by(config.heading_gap);
}

/// One experience or education entry: bold title, italic period with an
/// optional location, then the description flowed as markdown-lite
pub fn entry(
    ctx: &LayoutContext<'_>,
    cursor: &mut Cursor,
    out: &mut Vec<DrawCommand>,
    view: &EntryView<'_>,
) {
    let config = ctx.config;
    let (left, right) = (config.left_margin, config.right_margin);
    cursor.ensure_room(0.0, BreakLimit::Entry, out);

    // Title and period lines always take their row, even when blank
    let heading = view.heading.trim();
    if heading.is_empty() {
        cursor.ensure_line(out);
        cursor.advance(1.0);
    } else {
        let bold = ctx.body_style(FontStyle::Bold);
        flow::place_wrapped(ctx, cursor, out, heading, left, right, bold);
    }

    let italic = ctx.body_style(FontStyle::Italic);
    let period = format!("{} - {}", view.start_date.trim(), view.end_date.trim());
    cursor.ensure_line(out);
    let y = cursor.y();
    out.push(DrawCommand::Text {
        text: period.clone(),
        at: Point::new(left, y),
        style: italic,
    });
    if let Some(location) = view.location {
        let x = left + ctx.measure.measure_width(&period, italic.font, italic.size);
        out.push(DrawCommand::Text {
            text: format!(" | {}", location.trim()),
            at: Point::new(x, y),
            style: italic,
        });
    }
    cursor.advance(1.0);

    if let Some(description) = view.description {
        flow::place_markdown(ctx, cursor, out, description, left, right);
    }
    cursor.advance_by(config.entry_gap);
}

/// Heading plus entries; nothing is placed for an empty list.
///
/// Returns whether the section was placed.
pub fn entry_section(
    ctx: &LayoutContext<'_>,
    cursor: &mut Cursor,
    out: &mut Vec<DrawCommand>,
    key: SectionKey,
    entries: &[EntryView<'_>],
) -> bool {
    if entries.is_empty() {
        return false;
    }
    section_heading(ctx, cursor, out, key);
    for view in entries {
        entry(ctx, cursor, out, view);
    }
    cursor.advance_by(ctx.config.section_spacing - ctx.config.entry_gap);
    true
}

/// Heading plus a markdown-lite body; nothing is placed for blank text.
///
/// Returns whether the section was placed.
pub fn text_section(
    ctx: &LayoutContext<'_>,
    cursor: &mut Cursor,
    out: &mut Vec<DrawCommand>,
    key: SectionKey,
    text: &str,
) -> bool {
    if text.trim().is_empty() {
        return false;
    }
    section_heading(ctx, cursor, out, key);
    let config = ctx.config;
    flow::place_markdown(ctx, cursor, out, text, config.left_margin, config.right_margin);
    cursor.advance_by(config.section_spacing);
    true
}

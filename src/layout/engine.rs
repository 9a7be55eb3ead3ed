//! Document composition
//!
//! Places the personal header and the body sections in their fixed order,
//! producing a `LayoutResult` of draw commands. Layout is pure: it never
//! touches a drawing surface, only the `TextMeasure` capability.
//!
//! ## Key Functions
//!
//! - [`compose`]: Main entry point for layout computation
//! - [`ThemeColors::resolve`]: Stylesheet colors with per-document overrides

use crate::locale::{Locale, SectionKey};
use crate::model::{present, CvData, EducationBlock, EntryView, ExperienceBlock};
use crate::stylesheet::{self, Rgb, Stylesheet};

use super::config::LayoutConfig;
use super::cursor::Cursor;
use super::measure::TextMeasure;
use super::sections;
use super::types::{DrawCommand, FontStyle, LayoutResult, TextStyle};

// ============================================
// Context
// ============================================

/// Colors resolved once per document
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeColors {
    pub text: Rgb,
    pub divider: Rgb,
    pub link: Rgb,
    pub photo_border: Rgb,
}

impl ThemeColors {
    /// Stylesheet tokens, with the document's own divider and link colors
    /// taking precedence when set
    pub fn resolve(cv: &CvData, stylesheet: &Stylesheet) -> Self {
        Self {
            text: stylesheet.color(stylesheet::TEXT, None),
            divider: stylesheet.color(stylesheet::DIVIDER, present(&cv.divider_color)),
            link: stylesheet.color(stylesheet::LINK, present(&cv.link_color)),
            photo_border: stylesheet.color(stylesheet::PHOTO_BORDER, None),
        }
    }
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self::resolve(&CvData::default(), &Stylesheet::default())
    }
}

/// Everything placement functions read but never modify
pub struct LayoutContext<'a> {
    pub config: &'a LayoutConfig,
    pub measure: &'a dyn TextMeasure,
    pub colors: ThemeColors,
    pub locale: Locale,
}

impl LayoutContext<'_> {
    /// Body-size text in the theme's text color
    pub fn body_style(&self, font: FontStyle) -> TextStyle {
        TextStyle::new(font, self.config.body_font_size, self.colors.text)
    }
}

// ============================================
// Composition
// ============================================

/// Lay out a whole CV.
///
/// Sections with no content are omitted entirely, heading included.
pub fn compose(cv: &CvData, ctx: &LayoutContext<'_>) -> LayoutResult {
    let mut cursor = Cursor::new(ctx.config);
    let mut out: Vec<DrawCommand> = Vec::new();

    sections::personal_header(ctx, &mut cursor, &mut out, &cv.personal);

    let experience: Vec<EntryView<'_>> = cv.experience.iter().map(ExperienceBlock::view).collect();
    let education: Vec<EntryView<'_>> = cv.education.iter().map(EducationBlock::view).collect();

    for key in SectionKey::ALL {
        let placed = match key {
            SectionKey::Experience => {
                sections::entry_section(ctx, &mut cursor, &mut out, key, &experience)
            }
            SectionKey::Education => {
                sections::entry_section(ctx, &mut cursor, &mut out, key, &education)
            }
            SectionKey::Qualities => {
                sections::text_section(ctx, &mut cursor, &mut out, key, &cv.qualities)
            }
            SectionKey::Skills => {
                sections::text_section(ctx, &mut cursor, &mut out, key, &cv.skills)
            }
            SectionKey::Interests => {
                sections::text_section(ctx, &mut cursor, &mut out, key, &cv.interests)
            }
        };
        if !placed {
            log::debug!("section {:?} is empty, skipped", key);
        }
    }

    log::debug!(
        "composed {} draw commands over {} page(s)",
        out.len(),
        cursor.page_count()
    );

    LayoutResult {
        commands: out,
        page_count: cursor.page_count(),
    }
}

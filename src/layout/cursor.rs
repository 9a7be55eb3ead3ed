//! Vertical position tracking and page breaking
//!
//! Placement functions take the cursor and the command buffer explicitly;
//! nothing here draws except the page break marker.

use super::config::LayoutConfig;
use super::types::DrawCommand;

/// Which configured limit a break check is made against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakLimit {
    /// Checked before a section heading
    Section,
    /// Checked before an experience/education entry
    Entry,
    /// Checked before every placed line
    Line,
}

/// Current vertical position and page number
#[derive(Debug, Clone, PartialEq)]
pub struct Cursor {
    y: f64,
    page: usize,
    top: f64,
    line_height: f64,
    section_limit: f64,
    entry_limit: f64,
    line_limit: f64,
}

impl Cursor {
    /// Start at the top margin of the first page
    pub fn new(config: &LayoutConfig) -> Self {
        Self {
            y: config.top_margin,
            page: 0,
            top: config.top_margin,
            line_height: config.line_height,
            section_limit: config.section_break_limit,
            entry_limit: config.entry_break_limit,
            line_limit: config.bottom_margin,
        }
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// Zero-based index of the current page
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_count(&self) -> usize {
        self.page + 1
    }

    fn limit(&self, limit: BreakLimit) -> f64 {
        match limit {
            BreakLimit::Section => self.section_limit,
            BreakLimit::Entry => self.entry_limit,
            BreakLimit::Line => self.line_limit,
        }
    }

    /// Start a new page if `required` more millimetres would cross `limit`.
    ///
    /// Returns whether a break happened.
    pub fn ensure_room(
        &mut self,
        required: f64,
        limit: BreakLimit,
        out: &mut Vec<DrawCommand>,
    ) -> bool {
        let bound = self.limit(limit);
        if self.y + required <= bound {
            return false;
        }
        log::debug!(
            "page break at y={:.1} (need {:.1}, {:?} limit {:.1})",
            self.y,
            required,
            limit,
            bound
        );
        out.push(DrawCommand::NewPage);
        self.page += 1;
        self.y = self.top;
        true
    }

    /// Check room for one line against the hard bottom limit
    pub fn ensure_line(&mut self, out: &mut Vec<DrawCommand>) -> bool {
        self.ensure_room(self.line_height, BreakLimit::Line, out)
    }

    /// Move down by a number of line heights
    pub fn advance(&mut self, lines: f64) {
        self.y += lines * self.line_height;
    }

    pub fn half_line(&mut self) {
        self.advance(0.5);
    }

    /// Move down by an absolute distance
    pub fn advance_by(&mut self, distance: f64) {
        self.y += distance;
    }

    /// Move down to `y` unless already below it
    pub fn move_below(&mut self, y: f64) {
        self.y = self.y.max(y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn place_line(cursor: &mut Cursor, out: &mut Vec<DrawCommand>) -> f64 {
        cursor.ensure_line(out);
        let y = cursor.y();
        cursor.advance(1.0);
        y
    }

    #[test]
    fn test_starts_at_top_margin() {
        let cursor = Cursor::new(&LayoutConfig::default());
        assert_eq!(cursor.y(), 20.0);
        assert_eq!(cursor.page_count(), 1);
    }

    #[test]
    fn test_lines_fill_page_then_break_once() {
        let config = LayoutConfig::default();
        let mut cursor = Cursor::new(&config);
        let mut out = Vec::new();

        let fit = ((config.bottom_margin - config.top_margin) / config.line_height).floor() as usize;
        for k in 0..fit {
            let y = place_line(&mut cursor, &mut out);
            assert_eq!(y, config.top_margin + k as f64 * config.line_height);
        }
        assert!(out.is_empty(), "no break within the first {} lines", fit);

        let y = place_line(&mut cursor, &mut out);
        assert_eq!(out, vec![DrawCommand::NewPage]);
        assert_eq!(y, config.top_margin);
        assert_eq!(cursor.y(), config.top_margin + config.line_height);
        assert_eq!(cursor.page_count(), 2);
    }

    #[test]
    fn test_limits_are_distinct() {
        let mut cursor = Cursor::new(&LayoutConfig::default());
        let mut out = Vec::new();
        cursor.advance_by(215.0);

        assert!(!cursor.ensure_room(0.0, BreakLimit::Section, &mut out));
        cursor.advance_by(15.0);
        assert!(cursor.ensure_room(0.0, BreakLimit::Section, &mut out));
        assert_eq!(cursor.y(), 20.0);

        cursor.advance_by(235.0);
        assert!(!cursor.ensure_room(0.0, BreakLimit::Entry, &mut out));
        assert!(!cursor.ensure_line(&mut out));
        cursor.advance_by(20.0);
        assert!(cursor.ensure_room(0.0, BreakLimit::Entry, &mut out));
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn test_move_below_never_moves_up() {
        let mut cursor = Cursor::new(&LayoutConfig::default());
        cursor.move_below(60.0);
        assert_eq!(cursor.y(), 60.0);
        cursor.move_below(40.0);
        assert_eq!(cursor.y(), 60.0);
        cursor.half_line();
        assert_eq!(cursor.y(), 63.5);
    }
}

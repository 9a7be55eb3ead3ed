//! Configuration for the layout engine
//!
//! All lengths are millimetres on an A4 page with the origin in the top-left
//! corner; font sizes are points.

/// Configuration options for layout computation
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Page size (width, height)
    pub page_size: (f64, f64),

    /// Left edge of the content column
    pub left_margin: f64,

    /// Right edge of the content column
    pub right_margin: f64,

    /// Baseline of the first line on every page
    pub top_margin: f64,

    /// Hard limit checked before every placed line
    pub bottom_margin: f64,

    /// Limit checked before a section heading
    pub section_break_limit: f64,

    /// Limit checked before each experience/education entry
    pub entry_break_limit: f64,

    /// Distance between consecutive baselines
    pub line_height: f64,

    /// Gap after each section
    pub section_spacing: f64,

    /// Advance from a section heading baseline to the first body line
    pub heading_gap: f64,

    /// Divider offset below a section heading baseline
    pub heading_divider_offset: f64,

    /// Gap after each experience/education entry
    pub entry_gap: f64,

    /// Advance after the name line
    pub name_spacing: f64,

    /// Lift of the header divider above the line following the header block
    pub header_divider_offset: f64,

    /// Advance from the header divider to the first contact line
    pub header_divider_gap: f64,

    /// Horizontal offset per markdown indent level
    pub indent_step: f64,

    /// Extra indent for soft-wrapped continuation lines
    pub continuation_indent: f64,

    /// Narrowest column an indented line may be left with
    pub min_line_width: f64,

    /// Side of the square photo
    pub photo_size: f64,

    /// Top edge of the photo square
    pub photo_top: f64,

    /// Horizontal clearance kept between text and the photo
    pub photo_clearance: f64,

    pub divider_width: f64,
    pub photo_border_width: f64,

    pub name_font_size: f64,
    pub headline_font_size: f64,
    pub heading_font_size: f64,
    pub body_font_size: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            page_size: (210.0, 297.0),
            left_margin: 20.0,
            right_margin: 190.0,
            top_margin: 20.0,
            bottom_margin: 280.0,
            section_break_limit: 240.0,
            entry_break_limit: 260.0,
            line_height: 7.0,
            section_spacing: 10.0,
            heading_gap: 8.0,
            heading_divider_offset: 2.0,
            entry_gap: 5.0,
            name_spacing: 10.0,
            header_divider_offset: 2.0,
            header_divider_gap: 3.0,
            indent_step: 5.0,
            continuation_indent: 3.0,
            min_line_width: 30.0,
            photo_size: 40.0,
            photo_top: 12.0,
            photo_clearance: 5.0,
            divider_width: 0.5,
            photo_border_width: 0.2,
            name_font_size: 18.0,
            headline_font_size: 12.0,
            heading_font_size: 14.0,
            body_font_size: 10.0,
        }
    }
}

impl LayoutConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the horizontal margins
    pub fn with_margins(mut self, left: f64, right: f64) -> Self {
        self.left_margin = left;
        self.right_margin = right;
        self
    }

    /// Set the top margin and the hard bottom limit
    pub fn with_vertical_margins(mut self, top: f64, bottom: f64) -> Self {
        self.top_margin = top;
        self.bottom_margin = bottom;
        self
    }

    /// Set the limits checked before section headings and entries
    pub fn with_break_limits(mut self, section: f64, entry: f64) -> Self {
        self.section_break_limit = section;
        self.entry_break_limit = entry;
        self
    }

    /// Set the line height
    pub fn with_line_height(mut self, line_height: f64) -> Self {
        self.line_height = line_height;
        self
    }

    /// Set the photo square size
    pub fn with_photo_size(mut self, size: f64) -> Self {
        self.photo_size = size;
        self
    }

    /// Left edge of a line at markdown indent `level` in the column
    /// `[left, right]`, capped so `min_line_width` stays available
    pub fn indented_left(&self, left: f64, right: f64, level: usize) -> f64 {
        let cap = (right - self.min_line_width).max(left);
        (left + level as f64 * self.indent_step).min(cap)
    }

    /// Left edge of a photo placed in the top-right corner
    pub fn photo_left(&self) -> f64 {
        self.right_margin - self.photo_size
    }

    /// Right edge available to header text when a photo is present
    pub fn header_right_edge(&self, has_photo: bool) -> f64 {
        if has_photo {
            self.photo_left() - self.photo_clearance
        } else {
            self.right_margin
        }
    }
}

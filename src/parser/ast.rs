//! Parsed markdown-lite lines

/// One contiguous run of a parsed line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Plain text, emphasis markers already removed
    Text { content: String },
    /// Hyperlink with its display text and target
    Link { text: String, url: String },
}

impl Segment {
    pub fn text(content: impl Into<String>) -> Self {
        Segment::Text {
            content: content.into(),
        }
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Segment::Link {
            text: text.into(),
            url: url.into(),
        }
    }

    /// The characters that end up on the page
    pub fn visible(&self) -> &str {
        match self {
            Segment::Text { content } => content,
            Segment::Link { text, .. } => text,
        }
    }

    pub fn is_link(&self) -> bool {
        matches!(self, Segment::Link { .. })
    }
}

/// One physical input line after tokenizing
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedLine {
    /// Leading whitespace count divided by two
    pub indent: usize,
    pub segments: Vec<Segment>,
}

impl ParsedLine {
    /// The line produced for blank input, rendered as a half-line gap
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn is_blank(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn has_links(&self) -> bool {
        self.segments.iter().any(Segment::is_link)
    }

    /// Concatenated visible text of all segments
    pub fn visible_text(&self) -> String {
        self.segments.iter().map(Segment::visible).collect()
    }
}

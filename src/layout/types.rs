//! Core types for the layout engine

use std::fmt;

use crate::stylesheet::Rgb;

use super::photo::PhotoData;

/// A 2D point in page coordinates (millimetres, origin top-left)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Bottom edge y-coordinate
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Weight/slant variant of the document's single font family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontStyle {
    #[default]
    Normal,
    Bold,
    Italic,
    BoldItalic,
}

impl FontStyle {
    pub fn is_bold(self) -> bool {
        matches!(self, FontStyle::Bold | FontStyle::BoldItalic)
    }
}

impl fmt::Display for FontStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FontStyle::Normal => "normal",
            FontStyle::Bold => "bold",
            FontStyle::Italic => "italic",
            FontStyle::BoldItalic => "bold-italic",
        })
    }
}

/// Font, size and fill color for a run of text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub font: FontStyle,
    pub size: f64,
    pub color: Rgb,
}

impl TextStyle {
    pub fn new(font: FontStyle, size: f64, color: Rgb) -> Self {
        Self { font, size, color }
    }
}

/// One abstract drawing operation produced by layout
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Text with its baseline starting at `at`
    Text {
        text: String,
        at: Point,
        style: TextStyle,
    },
    /// Clickable text
    Link {
        text: String,
        url: String,
        at: Point,
        style: TextStyle,
    },
    Line {
        from: Point,
        to: Point,
        color: Rgb,
        width: f64,
    },
    /// Stroked rectangle outline
    Rect {
        bounds: BoundingBox,
        color: Rgb,
        width: f64,
    },
    Image {
        photo: PhotoData,
        bounds: BoundingBox,
    },
    NewPage,
}

impl DrawCommand {
    /// Visible text carried by text and link commands
    pub fn text(&self) -> Option<&str> {
        match self {
            DrawCommand::Text { text, .. } | DrawCommand::Link { text, .. } => Some(text),
            _ => None,
        }
    }

    /// Baseline position of text and link commands
    pub fn position(&self) -> Option<Point> {
        match self {
            DrawCommand::Text { at, .. } | DrawCommand::Link { at, .. } => Some(*at),
            _ => None,
        }
    }

    pub fn style(&self) -> Option<&TextStyle> {
        match self {
            DrawCommand::Text { style, .. } | DrawCommand::Link { style, .. } => Some(style),
            _ => None,
        }
    }
}

impl fmt::Display for DrawCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawCommand::Text { text, at, style } => write!(
                f,
                "text ({:.1}, {:.1}) {} {} {} {:?}",
                at.x, at.y, style.font, style.size, style.color, text
            ),
            DrawCommand::Link {
                text,
                url,
                at,
                style,
            } => write!(
                f,
                "link ({:.1}, {:.1}) {} {} {} {:?} -> {}",
                at.x, at.y, style.font, style.size, style.color, text, url
            ),
            DrawCommand::Line {
                from,
                to,
                color,
                width,
            } => write!(
                f,
                "line ({:.1}, {:.1}) -> ({:.1}, {:.1}) {} w={}",
                from.x, from.y, to.x, to.y, color, width
            ),
            DrawCommand::Rect {
                bounds,
                color,
                width,
            } => write!(
                f,
                "rect ({:.1}, {:.1}) {:.1}x{:.1} {} w={}",
                bounds.x, bounds.y, bounds.width, bounds.height, color, width
            ),
            DrawCommand::Image { photo, bounds } => write!(
                f,
                "image {} ({:.1}, {:.1}) {:.1}x{:.1}",
                photo.format, bounds.x, bounds.y, bounds.width, bounds.height
            ),
            DrawCommand::NewPage => f.write_str("new-page"),
        }
    }
}

/// Output of layout: draw commands in paint order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LayoutResult {
    pub commands: Vec<DrawCommand>,
    pub page_count: usize,
}

impl LayoutResult {
    /// Commands split at page breaks
    pub fn pages(&self) -> Vec<&[DrawCommand]> {
        self.commands
            .split(|cmd| matches!(cmd, DrawCommand::NewPage))
            .collect()
    }

    /// All visible text in paint order
    pub fn texts(&self) -> Vec<&str> {
        self.commands.iter().filter_map(DrawCommand::text).collect()
    }

    /// First text or link command whose text equals `text`
    pub fn find_text(&self, text: &str) -> Option<&DrawCommand> {
        self.commands.iter().find(|cmd| cmd.text() == Some(text))
    }

    /// One command per line, for debugging and snapshots
    pub fn listing(&self) -> String {
        self.commands
            .iter()
            .map(|cmd| cmd.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

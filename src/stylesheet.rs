//! Theme colors for rendered documents
//!
//! A stylesheet maps color tokens (`divider`, `link`, `text`, `photo-border`)
//! to hex strings. Records may override the divider and link colors; whatever
//! string ends up chosen goes through [`resolve_hex`], which never fails.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading or parsing stylesheets
#[derive(Error, Debug)]
pub enum StylesheetError {
    #[error("Failed to read stylesheet file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse stylesheet TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// An RGB color with 8-bit components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Components scaled to the 0.0..=1.0 range used by PDF color operators
    pub fn to_unit(self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Parse a `#rrggbb` / `rrggbb` string, case-insensitive.
///
/// Anything else resolves to black; no error is reported.
pub fn resolve_hex(hex: &str) -> Rgb {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Rgb::BLACK;
    }
    let component = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).unwrap_or(0);
    Rgb::new(component(0), component(2), component(4))
}

/// Token for the section and header divider lines
pub const DIVIDER: &str = "divider";
/// Token for hyperlink text
pub const LINK: &str = "link";
/// Token for regular text
pub const TEXT: &str = "text";
/// Token for the border drawn around the photo
pub const PHOTO_BORDER: &str = "photo-border";

/// A stylesheet mapping color tokens to hex values
#[derive(Debug, Clone)]
pub struct Stylesheet {
    /// Optional name for the stylesheet
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    /// Color mappings: token name -> hex color
    pub colors: HashMap<String, String>,
}

/// TOML structure for deserializing stylesheets
#[derive(Deserialize)]
struct TomlStylesheet {
    metadata: Option<TomlMetadata>,
    #[serde(default)]
    colors: HashMap<String, String>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

const DEFAULT_PALETTE: &str = r##"
[metadata]
name = "classic"
description = "Black text and dividers, blue links"

[colors]
divider = "#000000"
link = "#0000FF"
text = "#000000"
photo-border = "#C8C8C8"
"##;

impl Stylesheet {
    /// Load stylesheet from TOML file
    pub fn from_file(path: &Path) -> Result<Self, StylesheetError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load stylesheet from TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, StylesheetError> {
        let parsed: TomlStylesheet = toml::from_str(content)?;

        Ok(Stylesheet {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            colors: parsed.colors,
        })
    }

    /// Look up a token in this stylesheet only
    pub fn resolve(&self, token: &str) -> Option<&str> {
        self.colors.get(token).map(|s| s.as_str())
    }

    /// Look up a token, falling back to the default palette and then to black
    pub fn resolve_or_default(&self, token: &str) -> String {
        if let Some(color) = self.resolve(token) {
            return color.to_string();
        }

        let default = Self::default();
        if let Some(color) = default.resolve(token) {
            return color.to_string();
        }

        "#000000".to_string()
    }

    /// Resolve a token to RGB, preferring a per-document override when given
    pub fn color(&self, token: &str, override_hex: Option<&str>) -> Rgb {
        match override_hex {
            Some(hex) => resolve_hex(hex),
            None => resolve_hex(&self.resolve_or_default(token)),
        }
    }
}

impl Default for Stylesheet {
    fn default() -> Self {
        Self::from_str(DEFAULT_PALETTE).expect("Default palette should be valid TOML")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_hex_with_and_without_hash() {
        assert_eq!(resolve_hex("#1a2B3c"), Rgb::new(0x1a, 0x2b, 0x3c));
        assert_eq!(resolve_hex("FF8000"), Rgb::new(255, 128, 0));
        assert_eq!(resolve_hex("#0000FF"), Rgb::new(0, 0, 255));
    }

    #[test]
    fn test_resolve_hex_malformed_is_black() {
        for bad in ["", "#", "#fff", "#12345", "#1234567", "zzzzzz", "#12 456", "##123456", "#éééé"] {
            assert_eq!(resolve_hex(bad), Rgb::BLACK, "input {:?}", bad);
        }
    }

    #[test]
    fn test_rgb_display_and_unit() {
        assert_eq!(Rgb::new(0, 0, 255).to_string(), "#0000ff");
        assert_eq!(Rgb::new(255, 0, 0).to_unit(), [1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_default_stylesheet() {
        let stylesheet = Stylesheet::default();
        assert_eq!(stylesheet.name.as_deref(), Some("classic"));
        assert_eq!(stylesheet.resolve(DIVIDER), Some("#000000"));
        assert_eq!(stylesheet.resolve(LINK), Some("#0000FF"));
        assert!(stylesheet.colors.contains_key(PHOTO_BORDER));
    }

    #[test]
    fn test_resolve_or_default_fallback() {
        let empty = Stylesheet {
            name: None,
            description: None,
            colors: HashMap::new(),
        };
        assert_eq!(empty.resolve_or_default(LINK), "#0000FF");
        assert_eq!(empty.resolve_or_default("unknown"), "#000000");
    }

    #[test]
    fn test_color_prefers_override() {
        let stylesheet = Stylesheet::default();
        assert_eq!(stylesheet.color(LINK, None), Rgb::new(0, 0, 255));
        assert_eq!(stylesheet.color(LINK, Some("#00ff00")), Rgb::new(0, 255, 0));
        assert_eq!(stylesheet.color(LINK, Some("not a color")), Rgb::BLACK);
    }

    #[test]
    fn test_parse_toml_with_metadata() {
        let toml_str = r##"
[metadata]
name = "Teal"
description = "Teal accents"

[colors]
divider = "#008080"
"##;
        let stylesheet = Stylesheet::from_str(toml_str).expect("Should parse");
        assert_eq!(stylesheet.name, Some("Teal".to_string()));
        assert_eq!(stylesheet.description, Some("Teal accents".to_string()));
        assert_eq!(stylesheet.color(DIVIDER, None), Rgb::new(0, 128, 128));
        assert_eq!(stylesheet.color(LINK, None), Rgb::new(0, 0, 255));
    }

    #[test]
    fn test_invalid_toml_error() {
        let invalid = "this is not valid toml {{{{";
        assert!(Stylesheet::from_str(invalid).is_err());
    }
}

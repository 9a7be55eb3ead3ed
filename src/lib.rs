//! cv-press - Render structured CV data to a paginated A4 PDF
//!
//! This library provides a markdown-lite tokenizer, a layout engine that
//! flows text across pages, and a PDF renderer built on lopdf.
//!
//! # Example
//!
//! ```rust
//! use cv_press::{render, CvData};
//!
//! let cv = CvData::from_json_str(r#"{"personal": {"name": "Ada Lovelace"}}"#).unwrap();
//! let doc = render(&cv).unwrap();
//! assert!(doc.bytes.starts_with(b"%PDF"));
//! assert!(doc.file_name.starts_with("CV_Ada_Lovelace_"));
//! ```

pub mod error;
pub mod layout;
pub mod locale;
pub mod model;
pub mod parser;
pub mod renderer;
pub mod stylesheet;

pub use error::LoadError;
pub use layout::{LayoutConfig, LayoutResult, PhotoError};
pub use locale::Locale;
pub use model::{CvData, EducationBlock, ExperienceBlock, PersonalInfo};
pub use parser::{parse, ParsedLine, Segment};
pub use renderer::{PdfConfig, PdfSurface, Surface};

use std::path::{Path, PathBuf};

use thiserror::Error;

// Re-export Stylesheet for public API
pub use stylesheet::{Stylesheet, StylesheetError};

/// Errors that can occur while producing the PDF
#[derive(Debug, Error)]
pub enum RenderError {
    /// Error assembling or serializing the PDF
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    /// Error writing the output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration for the complete render pipeline
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// Layout configuration
    pub layout: LayoutConfig,
    /// PDF output configuration
    pub pdf: PdfConfig,
    /// Stylesheet for color resolution
    pub stylesheet: Stylesheet,
    /// Language of section titles and contact labels
    pub locale: Locale,
    /// Debug mode: print the draw-command listing to stderr
    pub debug: bool,
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the layout configuration
    pub fn with_layout(mut self, config: LayoutConfig) -> Self {
        self.layout = config;
        self
    }

    /// Set the PDF configuration
    pub fn with_pdf(mut self, config: PdfConfig) -> Self {
        self.pdf = config;
        self
    }

    /// Set the stylesheet for color resolution
    pub fn with_stylesheet(mut self, stylesheet: Stylesheet) -> Self {
        self.stylesheet = stylesheet;
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Enable or disable debug mode
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

/// A rendered PDF and the name it should be saved under
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub page_count: usize,
}

/// Compute the draw commands for a CV without producing a PDF
pub fn layout_document(cv: &CvData, config: &RenderConfig) -> LayoutResult {
    let ctx = layout::LayoutContext {
        config: &config.layout,
        measure: &renderer::HelveticaMetrics,
        colors: layout::ThemeColors::resolve(cv, &config.stylesheet),
        locale: config.locale,
    };
    layout::compose(cv, &ctx)
}

/// Render a CV to PDF with default configuration
pub fn render(cv: &CvData) -> Result<RenderedDocument, RenderError> {
    render_with_config(cv, &RenderConfig::default())
}

/// Render a CV to PDF with custom configuration
///
/// # Example
///
/// ```rust
/// use cv_press::{render_with_config, CvData, Locale, PdfConfig, RenderConfig};
///
/// let config = RenderConfig::new()
///     .with_locale(Locale::Fr)
///     .with_pdf(PdfConfig::new().with_compress(false));
///
/// let doc = render_with_config(&CvData::default(), &config).unwrap();
/// assert_eq!(doc.page_count, 1);
/// ```
pub fn render_with_config(
    cv: &CvData,
    config: &RenderConfig,
) -> Result<RenderedDocument, RenderError> {
    let result = layout_document(cv, config);

    if config.debug {
        eprintln!("=== Layout Debug ===");
        eprintln!("{}", result.listing());
        eprintln!("====================");
    }

    let mut pdf = config.pdf.clone();
    let name = cv.personal.name.trim();
    if pdf.title.is_none() && !name.is_empty() {
        pdf.title = Some(format!("CV - {}", name));
    }

    let mut surface = PdfSurface::new(pdf, config.layout.page_size);
    renderer::execute(&result, &mut surface);
    let bytes = surface.to_bytes()?;

    let timestamp = chrono::Utc::now().timestamp_millis();
    Ok(RenderedDocument {
        file_name: output_file_name(&cv.personal.name, timestamp),
        bytes,
        page_count: result.page_count,
    })
}

/// Render a CV and write it into `dir` under its generated file name
pub fn render_to_dir(
    cv: &CvData,
    config: &RenderConfig,
    dir: &Path,
) -> Result<PathBuf, RenderError> {
    let doc = render_with_config(cv, config)?;
    let path = dir.join(&doc.file_name);
    std::fs::write(&path, &doc.bytes)?;
    log::info!("wrote {} page(s) to {}", doc.page_count, path.display());
    Ok(path)
}

/// `CV_<name>_<timestamp>.pdf` with whitespace runs in the name collapsed to
/// `_`; a blank name becomes `document`
pub fn output_file_name(name: &str, timestamp_ms: i64) -> String {
    let words: Vec<&str> = name.split_whitespace().collect();
    let stem = if words.is_empty() {
        "document".to_string()
    } else {
        words.join("_")
    };
    format!("CV_{}_{}.pdf", stem, timestamp_ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_file_name() {
        assert_eq!(
            output_file_name("Ada Lovelace", 1700000000000),
            "CV_Ada_Lovelace_1700000000000.pdf"
        );
        assert_eq!(output_file_name("  Ada \t King  ", 5), "CV_Ada_King_5.pdf");
    }

    #[test]
    fn test_output_file_name_blank() {
        assert_eq!(output_file_name("", 1), "CV_document_1.pdf");
        assert_eq!(output_file_name("   ", 1), "CV_document_1.pdf");
    }

    #[test]
    fn test_render_produces_pdf() {
        let cv = CvData::from_json_str(r#"{"personal": {"name": "Ada"}, "skills": "Rust"}"#)
            .unwrap();
        let doc = render(&cv).unwrap();
        assert!(doc.bytes.starts_with(b"%PDF"));
        assert_eq!(doc.page_count, 1);
        assert!(doc.file_name.starts_with("CV_Ada_"));
        assert!(doc.file_name.ends_with(".pdf"));
    }

    #[test]
    fn test_layout_uses_locale() {
        let cv = CvData {
            skills: "Rust".to_string(),
            ..Default::default()
        };
        let fr = layout_document(&cv, &RenderConfig::new().with_locale(Locale::Fr));
        assert!(fr.find_text("COMPÉTENCES").is_some());
        let en = layout_document(&cv, &RenderConfig::new());
        assert!(en.find_text("SKILLS").is_some());
    }

    #[test]
    fn test_render_to_dir_writes_file() {
        let dir = std::env::temp_dir().join(format!("cv-press-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let cv = CvData::default();
        let path = render_to_dir(&cv, &RenderConfig::default(), &dir).unwrap();
        assert!(path.file_name().unwrap().to_string_lossy().starts_with("CV_document_"));
        assert!(std::fs::read(&path).unwrap().starts_with(b"%PDF"));
        std::fs::remove_dir_all(&dir).unwrap();
    }
}

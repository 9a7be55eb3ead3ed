//! Configuration for PDF rendering

/// Configuration options for PDF output
#[derive(Debug, Clone)]
pub struct PdfConfig {
    /// Document title written to the info dictionary
    pub title: Option<String>,

    /// Producer string written to the info dictionary
    pub producer: String,

    /// Whether to deflate content streams
    pub compress: bool,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            title: None,
            producer: format!("cv-press {}", env!("CARGO_PKG_VERSION")),
            compress: true,
        }
    }
}

impl PdfConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the document title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_producer(mut self, producer: impl Into<String>) -> Self {
        self.producer = producer.into();
        self
    }

    /// Set whether content streams are compressed
    pub fn with_compress(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }
}

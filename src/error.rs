//! Error types for loading CV records

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read CV record: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid CV JSON at line {line}, column {column}: {message}")]
    Json {
        line: usize,
        column: usize,
        message: String,
    },
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            return LoadError::Io(err.into());
        }
        LoadError::Json {
            line: err.line(),
            column: err.column(),
            message: err.to_string(),
        }
    }
}

impl LoadError {
    /// Source position for JSON errors
    pub fn position(&self) -> Option<(usize, usize)> {
        match self {
            LoadError::Json { line, column, .. } => Some((*line, *column)),
            LoadError::Io(_) => None,
        }
    }
}

//! Layout engine for computing text positions and page breaks
//!
//! This module takes CV data and computes where every line goes, producing a
//! LayoutResult of draw commands split across pages.

pub mod config;
pub mod cursor;
pub mod engine;
pub mod error;
pub mod flow;
pub mod measure;
pub mod photo;
pub mod sections;
pub mod types;

pub use config::LayoutConfig;
pub use cursor::{BreakLimit, Cursor};
pub use engine::{compose, LayoutContext, ThemeColors};
pub use error::PhotoError;
pub use measure::{wrap_greedy, TextMeasure};
pub use photo::{PhotoData, PhotoFormat, RgbPixels};
pub use types::*;

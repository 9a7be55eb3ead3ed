//! PDF renderer for generating output from layout results
//!
//! Layout produces draw commands; this module replays them onto a `Surface`.
//! `PdfSurface` is the lopdf-backed implementation.

pub mod config;
pub mod metrics;
pub mod pdf;

pub use config::PdfConfig;
pub use metrics::HelveticaMetrics;
pub use pdf::PdfSurface;

use crate::layout::{BoundingBox, DrawCommand, FontStyle, LayoutResult, PhotoData, PhotoError, Point};
use crate::stylesheet::Rgb;

/// Drawing capability required by the executor
pub trait Surface {
    /// Fill color for subsequent text
    fn set_text_color(&mut self, color: Rgb);

    fn text(&mut self, text: &str, at: Point, font: FontStyle, size: f64);

    /// Text that is also a clickable link to `url`
    fn link_text(&mut self, text: &str, url: &str, at: Point, font: FontStyle, size: f64);

    fn line(&mut self, from: Point, to: Point, color: Rgb, width: f64);

    /// Stroked rectangle outline
    fn rect(&mut self, bounds: BoundingBox, color: Rgb, width: f64);

    fn image(&mut self, photo: &PhotoData, bounds: BoundingBox) -> Result<(), PhotoError>;

    fn new_page(&mut self);
}

/// Replay layout commands onto a surface.
///
/// A photo that fails to decode here is skipped together with its border.
pub fn execute(layout: &LayoutResult, surface: &mut dyn Surface) {
    let mut text_color: Option<Rgb> = None;
    let mut skip_border = false;

    for cmd in &layout.commands {
        match cmd {
            DrawCommand::Text { text, at, style } => {
                use_color(surface, &mut text_color, style.color);
                surface.text(text, *at, style.font, style.size);
            }
            DrawCommand::Link {
                text,
                url,
                at,
                style,
            } => {
                use_color(surface, &mut text_color, style.color);
                surface.link_text(text, url, *at, style.font, style.size);
            }
            DrawCommand::Line {
                from,
                to,
                color,
                width,
            } => surface.line(*from, *to, *color, *width),
            DrawCommand::Rect {
                bounds,
                color,
                width,
            } => {
                if std::mem::take(&mut skip_border) {
                    continue;
                }
                surface.rect(*bounds, *color, *width);
            }
            DrawCommand::Image { photo, bounds } => {
                if let Err(err) = surface.image(photo, *bounds) {
                    log::warn!("Skipping photo: {}", err);
                    skip_border = true;
                }
            }
            DrawCommand::NewPage => {
                surface.new_page();
                text_color = None;
            }
        }
    }
}

fn use_color(surface: &mut dyn Surface, current: &mut Option<Rgb>, color: Rgb) {
    if *current != Some(color) {
        surface.set_text_color(color);
        *current = Some(color);
    }
}

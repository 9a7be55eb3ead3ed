//! lopdf-backed drawing surface
//!
//! Layout coordinates are millimetres from the top-left corner; PDF user
//! space is points from the bottom-left. Conversion happens here and only here.

use std::path::Path;

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream, StringFormat};

use crate::layout::{BoundingBox, FontStyle, PhotoData, PhotoError, Point, TextMeasure};
use crate::stylesheet::Rgb;
use crate::RenderError;

use super::config::PdfConfig;
use super::metrics::{base_font, to_win_ansi, HelveticaMetrics};
use super::Surface;

const PT_PER_MM: f64 = 72.0 / 25.4;

/// Share of the font size below the baseline covered by a link's click area
const LINK_DESCENT: f64 = 0.2;
const LINK_ASCENT: f64 = 0.8;

const FONTS: [FontStyle; 4] = [
    FontStyle::Normal,
    FontStyle::Bold,
    FontStyle::Italic,
    FontStyle::BoldItalic,
];

fn font_resource(font: FontStyle) -> &'static str {
    match font {
        FontStyle::Normal => "F1",
        FontStyle::Bold => "F2",
        FontStyle::Italic => "F3",
        FontStyle::BoldItalic => "F4",
    }
}

fn real(value: f64) -> Object {
    (value as f32).into()
}

fn color_operands(color: Rgb) -> Vec<Object> {
    color.to_unit().iter().map(|c| (*c).into()).collect()
}

#[derive(Default)]
struct PageBuffer {
    operations: Vec<Operation>,
    annotations: Vec<Dictionary>,
    images: Vec<(String, ObjectId)>,
}

/// Accumulates pages of drawing operations and assembles them into a PDF
pub struct PdfSurface {
    config: PdfConfig,
    document: Document,
    width_pt: f64,
    height_pt: f64,
    pages: Vec<PageBuffer>,
    image_count: usize,
}

impl PdfSurface {
    /// Start a document with one empty page of `page_size` millimetres
    pub fn new(config: PdfConfig, page_size: (f64, f64)) -> Self {
        Self {
            config,
            document: Document::with_version("1.5"),
            width_pt: page_size.0 * PT_PER_MM,
            height_pt: page_size.1 * PT_PER_MM,
            pages: vec![PageBuffer::default()],
            image_count: 0,
        }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn x(&self, mm: f64) -> f64 {
        mm * PT_PER_MM
    }

    fn y(&self, mm: f64) -> f64 {
        self.height_pt - mm * PT_PER_MM
    }

    fn push(&mut self, op: &str, operands: Vec<Object>) {
        if let Some(page) = self.pages.last_mut() {
            page.operations.push(Operation::new(op, operands));
        }
    }

    fn stroke_setup(&mut self, color: Rgb, width: f64) {
        self.push("w", vec![real(width * PT_PER_MM)]);
        self.push("RG", color_operands(color));
    }

    /// Assemble the page tree, fonts and info dictionary
    pub fn finish(mut self) -> Result<Document, RenderError> {
        let mut fonts = Dictionary::new();
        for font in FONTS {
            let font_id = self.document.add_object(dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => base_font(font),
                "Encoding" => "WinAnsiEncoding",
            });
            fonts.set(font_resource(font), font_id);
        }
        let fonts_id = self.document.add_object(fonts);

        let pages_id = self.document.new_object_id();
        let media_box: Vec<Object> = vec![0.into(), 0.into(), real(self.width_pt), real(self.height_pt)];
        let mut kids: Vec<Object> = Vec::with_capacity(self.pages.len());

        for page in std::mem::take(&mut self.pages) {
            let content = Content {
                operations: page.operations,
            };
            let content_id = self
                .document
                .add_object(Stream::new(dictionary! {}, content.encode()?));

            let mut xobjects = Dictionary::new();
            for (name, id) in page.images {
                xobjects.set(name, id);
            }

            let annots: Vec<Object> = page
                .annotations
                .into_iter()
                .map(|annot| self.document.add_object(annot).into())
                .collect();

            let page_id = self.document.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => media_box.clone(),
                "Contents" => content_id,
                "Resources" => dictionary! {
                    "Font" => fonts_id,
                    "XObject" => xobjects,
                },
                "Annots" => annots,
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        self.document.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
            }),
        );

        let catalog_id = self.document.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        self.document.trailer.set("Root", catalog_id);

        let mut info = dictionary! {
            "Producer" => Object::string_literal(self.config.producer.clone()),
            "CreationDate" => Object::string_literal(
                chrono::Utc::now().format("D:%Y%m%d%H%M%SZ").to_string()
            ),
        };
        if let Some(title) = &self.config.title {
            info.set("Title", Object::String(to_win_ansi(title), StringFormat::Literal));
        }
        let info_id = self.document.add_object(info);
        self.document.trailer.set("Info", info_id);

        if self.config.compress {
            self.document.compress();
        }
        Ok(self.document)
    }

    /// Serialize the finished document
    pub fn to_bytes(self) -> Result<Vec<u8>, RenderError> {
        let mut document = self.finish()?;
        let mut bytes = Vec::new();
        document.save_to(&mut bytes)?;
        Ok(bytes)
    }

    pub fn save(self, path: &Path) -> Result<(), RenderError> {
        let bytes = self.to_bytes()?;
        std::fs::write(path, bytes)?;
        Ok(())
    }
}

impl Surface for PdfSurface {
    fn set_text_color(&mut self, color: Rgb) {
        self.push("rg", color_operands(color));
    }

    fn text(&mut self, text: &str, at: Point, font: FontStyle, size: f64) {
        if text.is_empty() {
            return;
        }
        let (x, y) = (self.x(at.x), self.y(at.y));
        self.push("BT", vec![]);
        self.push("Tf", vec![font_resource(font).into(), real(size)]);
        self.push("Td", vec![real(x), real(y)]);
        self.push(
            "Tj",
            vec![Object::String(to_win_ansi(text), StringFormat::Literal)],
        );
        self.push("ET", vec![]);
    }

    fn link_text(&mut self, text: &str, url: &str, at: Point, font: FontStyle, size: f64) {
        self.text(text, at, font, size);

        let x1 = self.x(at.x);
        let x2 = x1 + HelveticaMetrics.measure_width(text, font, size) * PT_PER_MM;
        let baseline = self.y(at.y);
        let rect: Vec<Object> = vec![
            real(x1),
            real(baseline - size * LINK_DESCENT),
            real(x2),
            real(baseline + size * LINK_ASCENT),
        ];
        let annot = dictionary! {
            "Type" => "Annot",
            "Subtype" => "Link",
            "Rect" => rect,
            "Border" => vec![0.into(), 0.into(), 0.into()],
            "A" => dictionary! {
                "Type" => "Action",
                "S" => "URI",
                "URI" => Object::string_literal(url),
            },
        };
        if let Some(page) = self.pages.last_mut() {
            page.annotations.push(annot);
        }
    }

    fn line(&mut self, from: Point, to: Point, color: Rgb, width: f64) {
        self.stroke_setup(color, width);
        let (x1, y1, x2, y2) = (self.x(from.x), self.y(from.y), self.x(to.x), self.y(to.y));
        self.push("m", vec![real(x1), real(y1)]);
        self.push("l", vec![real(x2), real(y2)]);
        self.push("S", vec![]);
    }

    fn rect(&mut self, bounds: BoundingBox, color: Rgb, width: f64) {
        self.stroke_setup(color, width);
        let (x, y) = (self.x(bounds.x), self.y(bounds.bottom()));
        self.push(
            "re",
            vec![
                real(x),
                real(y),
                real(bounds.width * PT_PER_MM),
                real(bounds.height * PT_PER_MM),
            ],
        );
        self.push("S", vec![]);
    }

    fn image(&mut self, photo: &PhotoData, bounds: BoundingBox) -> Result<(), PhotoError> {
        let pixels = photo.decode_rgb()?;
        let image_id = self.document.add_object(Stream::new(
            dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Width" => i64::from(pixels.width),
                "Height" => i64::from(pixels.height),
                "ColorSpace" => "DeviceRGB",
                "BitsPerComponent" => 8,
            },
            pixels.data,
        ));

        self.image_count += 1;
        let name = format!("Im{}", self.image_count);
        let (x, y) = (self.x(bounds.x), self.y(bounds.bottom()));
        let (w, h) = (bounds.width * PT_PER_MM, bounds.height * PT_PER_MM);

        self.push("q", vec![]);
        self.push(
            "cm",
            vec![real(w), 0.into(), 0.into(), real(h), real(x), real(y)],
        );
        self.push("Do", vec![name.as_str().into()]);
        self.push("Q", vec![]);
        if let Some(page) = self.pages.last_mut() {
            page.images.push((name, image_id));
        }
        Ok(())
    }

    fn new_page(&mut self) {
        self.pages.push(PageBuffer::default());
    }
}

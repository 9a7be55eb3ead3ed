//! Photo decoding and top-right placement

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::ImageFormat;

use crate::stylesheet::Rgb;

use super::config::LayoutConfig;
use super::error::PhotoError;
use super::types::{BoundingBox, DrawCommand};

/// Raster formats accepted for the photo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotoFormat {
    Png,
    Jpeg,
    Gif,
}

impl PhotoFormat {
    fn image_format(self) -> ImageFormat {
        match self {
            PhotoFormat::Png => ImageFormat::Png,
            PhotoFormat::Jpeg => ImageFormat::Jpeg,
            PhotoFormat::Gif => ImageFormat::Gif,
        }
    }
}

impl fmt::Display for PhotoFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PhotoFormat::Png => "png",
            PhotoFormat::Jpeg => "jpeg",
            PhotoFormat::Gif => "gif",
        })
    }
}

/// Encoded photo bytes with a sniffed format
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoData {
    pub format: PhotoFormat,
    pub bytes: Vec<u8>,
}

/// Decoded 8-bit RGB pixels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbPixels {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl PhotoData {
    /// Decode a `data:image/...;base64,...` URL, or a bare base64 payload
    pub fn from_data_url(value: &str) -> Result<Self, PhotoError> {
        let value = value.trim();
        let payload = match value.strip_prefix("data:") {
            Some(rest) => {
                let (header, payload) = rest
                    .split_once(',')
                    .ok_or_else(|| PhotoError::invalid_data_url(rest))?;
                if !header.ends_with(";base64") {
                    return Err(PhotoError::invalid_data_url(header));
                }
                payload
            }
            None => value,
        };

        let cleaned: String = payload.chars().filter(|c| !c.is_whitespace()).collect();
        let bytes = STANDARD.decode(cleaned)?;
        Self::from_bytes(bytes)
    }

    /// Wrap raw encoded bytes after checking their format
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, PhotoError> {
        let format = match image::guess_format(&bytes) {
            Ok(ImageFormat::Png) => PhotoFormat::Png,
            Ok(ImageFormat::Jpeg) => PhotoFormat::Jpeg,
            Ok(ImageFormat::Gif) => PhotoFormat::Gif,
            Ok(other) => return Err(PhotoError::UnsupportedFormat(format!("{:?}", other))),
            Err(_) => return Err(PhotoError::UnsupportedFormat("unknown".to_string())),
        };
        Ok(Self { format, bytes })
    }

    /// Decode to RGB pixels; alpha is dropped
    pub fn decode_rgb(&self) -> Result<RgbPixels, PhotoError> {
        let image = image::load_from_memory_with_format(&self.bytes, self.format.image_format())?;
        let rgb = image.to_rgb8();
        Ok(RgbPixels {
            width: rgb.width(),
            height: rgb.height(),
            data: rgb.into_raw(),
        })
    }
}

/// The square a photo occupies in the top-right corner
pub fn photo_bounds(config: &LayoutConfig) -> BoundingBox {
    BoundingBox::new(
        config.photo_left(),
        config.photo_top,
        config.photo_size,
        config.photo_size,
    )
}

/// Emit the photo and its border, or log why it was skipped.
///
/// Returns whether the photo was placed.
pub fn place_photo(
    value: &str,
    config: &LayoutConfig,
    border: Rgb,
    out: &mut Vec<DrawCommand>,
) -> bool {
    match PhotoData::from_data_url(value) {
        Ok(photo) => {
            let bounds = photo_bounds(config);
            out.push(DrawCommand::Image { photo, bounds });
            out.push(DrawCommand::Rect {
                bounds,
                color: border,
                width: config.photo_border_width,
            });
            true
        }
        Err(err) => {
            log::warn!("Skipping photo: {}", err);
            false
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// A 1x1 PNG encoded as a data URL
    pub(crate) fn tiny_png_data_url() -> String {
        let mut bytes = std::io::Cursor::new(Vec::new());
        image::RgbImage::from_pixel(1, 1, image::Rgb([200, 10, 10]))
            .write_to(&mut bytes, ImageFormat::Png)
            .expect("encode png");
        format!("data:image/png;base64,{}", STANDARD.encode(bytes.into_inner()))
    }

    #[test]
    fn test_decode_png_data_url() {
        let photo = PhotoData::from_data_url(&tiny_png_data_url()).expect("Should decode");
        assert_eq!(photo.format, PhotoFormat::Png);
        let pixels = photo.decode_rgb().expect("Should decode pixels");
        assert_eq!((pixels.width, pixels.height), (1, 1));
        assert_eq!(pixels.data, vec![200, 10, 10]);
    }

    #[test]
    fn test_bare_base64_payload_is_accepted() {
        let url = tiny_png_data_url();
        let payload = url.split_once(',').map(|(_, p)| p).unwrap_or_default();
        assert!(PhotoData::from_data_url(payload).is_ok());
    }

    #[test]
    fn test_rejects_non_base64_header() {
        let err = PhotoData::from_data_url("data:image/png,rawbytes").unwrap_err();
        assert!(matches!(err, PhotoError::InvalidDataUrl { .. }));
    }

    #[test]
    fn test_rejects_bad_base64() {
        let err = PhotoData::from_data_url("data:image/png;base64,@@@").unwrap_err();
        assert!(matches!(err, PhotoError::Base64(_)));
    }

    #[test]
    fn test_rejects_unknown_bytes() {
        let err = PhotoData::from_bytes(b"definitely not an image".to_vec()).unwrap_err();
        assert!(matches!(err, PhotoError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_truncated_png_fails_at_decode() {
        let mut bytes = PhotoData::from_data_url(&tiny_png_data_url()).expect("decode").bytes;
        bytes.truncate(20);
        let photo = PhotoData::from_bytes(bytes).expect("signature still matches");
        assert!(matches!(photo.decode_rgb(), Err(PhotoError::Decode(_))));
    }

    #[test]
    fn test_place_photo_emits_image_and_border() {
        let config = LayoutConfig::default();
        let mut out = Vec::new();
        assert!(place_photo(&tiny_png_data_url(), &config, Rgb::new(200, 200, 200), &mut out));
        assert_eq!(out.len(), 2);
        assert!(matches!(&out[0], DrawCommand::Image { bounds, .. } if *bounds == photo_bounds(&config)));
        assert!(matches!(&out[1], DrawCommand::Rect { width, .. } if *width == config.photo_border_width));
    }

    #[test]
    fn test_place_photo_skips_garbage() {
        let mut out = Vec::new();
        assert!(!place_photo("data:text/plain;base64,aGVsbG8=", &LayoutConfig::default(), Rgb::BLACK, &mut out));
        assert!(out.is_empty());
    }
}

//! Raster export of the rendered surface.

use thiserror::Error;
use tiny_skia::Pixmap;

/// Export errors. Both are retryable: nothing about the drawing is lost.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Image encoding failed: {0}")]
    Encoding(String),
    #[error("Nothing to encode: image is {width}x{height}")]
    EmptyImage { width: u32, height: u32 },
}

/// Result type for export operations.
pub type ExportResult<T> = Result<T, ExportError>;

/// Encoded raster formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageFormat {
    #[default]
    Png,
}

impl ImageFormat {
    pub fn mime_type(self) -> &'static str {
        match self {
            ImageFormat::Png => "image/png",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
        }
    }
}

/// An encoded snapshot of the surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    /// Encoded file bytes.
    pub bytes: Vec<u8>,
    /// Width in physical pixels.
    pub width: u32,
    /// Height in physical pixels.
    pub height: u32,
    pub format: ImageFormat,
}

impl EncodedImage {
    pub fn mime_type(&self) -> &'static str {
        self.format.mime_type()
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Turns rendered pixels into an encoded image.
pub trait ImageEncoder: Send + Sync {
    fn encode(&self, pixmap: &Pixmap) -> ExportResult<EncodedImage>;
}

/// 8-bit RGBA PNG encoder.
#[derive(Debug, Clone, Copy, Default)]
pub struct PngEncoder;

impl ImageEncoder for PngEncoder {
    fn encode(&self, pixmap: &Pixmap) -> ExportResult<EncodedImage> {
        let (width, height) = (pixmap.width(), pixmap.height());
        if width == 0 || height == 0 {
            return Err(ExportError::EmptyImage { width, height });
        }

        let rgba = straight_rgba(pixmap);
        let mut bytes = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut bytes, width, height);
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder
                .write_header()
                .map_err(|e| ExportError::Encoding(e.to_string()))?;
            writer
                .write_image_data(&rgba)
                .map_err(|e| ExportError::Encoding(e.to_string()))?;
            writer
                .finish()
                .map_err(|e| ExportError::Encoding(e.to_string()))?;
        }

        log::info!("Encoded {}x{} PNG ({} bytes)", width, height, bytes.len());
        Ok(EncodedImage {
            bytes,
            width,
            height,
            format: ImageFormat::Png,
        })
    }
}

/// Un-premultiply the pixmap into plain RGBA bytes.
pub fn straight_rgba(pixmap: &Pixmap) -> Vec<u8> {
    let mut rgba = Vec::with_capacity(pixmap.data().len());
    for pixel in pixmap.pixels() {
        let c = pixel.demultiply();
        rgba.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }
    rgba
}

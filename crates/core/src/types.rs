//! Domain types for building a presentation from images.

use std::io::Cursor;

use image::{ImageFormat, ImageReader};

use crate::error::{Error, Result};
use crate::geometry::{Canvas, Placement};

/// An ordered presentation under construction.
///
/// Slides are appended one at a time and kept in presentation order; the
/// writer emits them in exactly this order. Assembly reads the model without
/// mutating it, so one presentation can be saved more than once.
#[derive(Debug, Clone, Default)]
pub struct Presentation {
    canvas: Canvas,
    slides: Vec<Slide>,
}

impl Presentation {
    /// Create an empty presentation over the default canvas.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty presentation over an explicit canvas.
    pub fn with_canvas(canvas: Canvas) -> Self {
        Self {
            canvas,
            slides: Vec::new(),
        }
    }

    /// The canvas this presentation is laid out on.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Slides in presentation order.
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Append one slide.
    ///
    /// `png` must be decodable PNG bytes; they are probed for their pixel
    /// dimensions and stored verbatim, never re-encoded. On any decode
    /// failure the presentation is left unchanged.
    pub fn add_slide(&mut self, title: impl Into<String>, png: Vec<u8>) -> Result<()> {
        let (width, height) = probe_png_dimensions(&png)?;
        let placement = self.canvas.fit(width, height)?;

        let title = title.into();
        log::debug!(
            "slide {}: \"{}\" {}x{} px -> {:?}",
            self.slides.len() + 1,
            title,
            width,
            height,
            placement
        );

        self.slides.push(Slide {
            title,
            image: png,
            placement,
        });

        Ok(())
    }
}

/// One presentation page: a title, the original PNG bytes, and where the
/// image sits on the canvas.
#[derive(Debug, Clone)]
pub struct Slide {
    /// Title text shown above the image.
    pub title: String,

    /// The original encoded PNG, byte for byte.
    pub image: Vec<u8>,

    /// Image position and extent on the canvas, in EMU.
    pub placement: Placement,
}

/// Read the pixel dimensions out of PNG bytes.
///
/// Only the header is decoded; anything that is not PNG is rejected even if
/// it is a decodable image, since the package writes the bytes under a
/// `.png` media name with an `image/png` content type.
fn probe_png_dimensions(png: &[u8]) -> Result<(u32, u32)> {
    let reader = ImageReader::new(Cursor::new(png))
        .with_guessed_format()
        .map_err(|e| Error::Decode(format!("unreadable image bytes: {}", e)))?;

    match reader.format() {
        Some(ImageFormat::Png) => {}
        Some(other) => {
            return Err(Error::Decode(format!("expected PNG, got {:?}", other)));
        }
        None => return Err(Error::Decode("unrecognized image format".to_string())),
    }

    reader
        .into_dimensions()
        .map_err(|e| Error::Decode(format!("invalid PNG: {}", e)))
}

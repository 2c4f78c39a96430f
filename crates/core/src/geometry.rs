//! Slide canvas geometry.
//!
//! Computes where a source image lands on the slide surface: the image keeps
//! its pixel aspect ratio, one axis fills the canvas, and the other axis is
//! centered.

use crate::error::{Error, Result};

/// Default slide surface width in EMU (16:9 widescreen).
pub const DEFAULT_CANVAS_WIDTH: i64 = 12_192_000;

/// Default slide surface height in EMU (16:9 widescreen).
pub const DEFAULT_CANVAS_HEIGHT: i64 = 6_858_000;

/// The drawable slide surface, in EMU.
///
/// Passed explicitly into the fitter and the part generators; tests run
/// with small canvases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Canvas {
    pub width: i64,
    pub height: i64,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_WIDTH,
            height: DEFAULT_CANVAS_HEIGHT,
        }
    }
}

impl Canvas {
    /// Create a canvas with explicit dimensions.
    pub fn new(width: i64, height: i64) -> Self {
        Self { width, height }
    }

    /// Fit a source image of `source_width` x `source_height` pixels onto
    /// this canvas.
    ///
    /// Landscape sources span the full canvas width and are centered
    /// vertically; portrait and square sources span the full canvas height
    /// and are centered horizontally. The centering offset is kept as
    /// computed even when the derived dimension overshoots the canvas, so
    /// it can come out negative for elongated sources.
    pub fn fit(&self, source_width: u32, source_height: u32) -> Result<Placement> {
        if source_width == 0 || source_height == 0 {
            return Err(Error::Validation(format!(
                "image dimensions must be positive, got {}x{}",
                source_width, source_height
            )));
        }

        let ratio = f64::from(source_width) / f64::from(source_height);

        if source_width > source_height {
            let width = self.width;
            let height = (width as f64 * ratio).round() as i64;
            Ok(Placement {
                width,
                height,
                top: (self.height - height) / 2,
                left: 0,
            })
        } else {
            let height = self.height;
            let width = (height as f64 * ratio).round() as i64;
            Ok(Placement {
                width,
                height,
                top: 0,
                left: (self.width - width) / 2,
            })
        }
    }
}

/// Where a slide image sits on the canvas, in EMU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub width: i64,
    pub height: i64,
    pub top: i64,
    pub left: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_square_fills_height() {
        let canvas = Canvas::default();
        let placement = canvas.fit(100, 100).unwrap();

        assert_eq!(placement.height, canvas.height);
        assert_eq!(placement.width, canvas.height);
        assert_eq!(placement.top, 0);
        assert_eq!(placement.left, (canvas.width - canvas.height) / 2);
    }

    #[test]
    fn test_fit_portrait_fills_height_and_centers() {
        let canvas = Canvas::default();
        let placement = canvas.fit(1, 2).unwrap();

        assert_eq!(placement.height, 6_858_000);
        assert_eq!(placement.width, 3_429_000);
        assert_eq!(placement.top, 0);
        assert_eq!(placement.left, 4_381_500);
    }

    #[test]
    fn test_fit_portrait_preserves_aspect_ratio() {
        let canvas = Canvas::default();
        let placement = canvas.fit(3, 4).unwrap();

        assert_eq!(placement.width, 5_143_500);
        assert_eq!(placement.height, 6_858_000);
        let fitted = placement.width as f64 / placement.height as f64;
        assert!((fitted - 0.75).abs() < 1e-6);
    }

    #[test]
    fn test_fit_landscape_pins_width() {
        let canvas = Canvas::default();
        let placement = canvas.fit(2, 1).unwrap();

        assert_eq!(placement.width, canvas.width);
        assert_eq!(placement.left, 0);
        // Derived height follows width * source_width / source_height.
        assert_eq!(placement.height, 24_384_000);
        // Centering is preserved, not clamped, when the height overshoots.
        assert_eq!(placement.top, -8_763_000);
    }

    #[test]
    fn test_fit_rejects_zero_dimensions() {
        let canvas = Canvas::default();

        assert!(matches!(canvas.fit(0, 10), Err(Error::Validation(_))));
        assert!(matches!(canvas.fit(10, 0), Err(Error::Validation(_))));
    }

    #[test]
    fn test_fit_custom_canvas() {
        let canvas = Canvas::new(1_000, 500);
        let placement = canvas.fit(10, 10).unwrap();

        assert_eq!(placement.width, 500);
        assert_eq!(placement.height, 500);
        assert_eq!(placement.top, 0);
        assert_eq!(placement.left, 250);
    }

    #[test]
    fn test_fit_is_deterministic() {
        let canvas = Canvas::default();
        assert_eq!(canvas.fit(640, 480).unwrap(), canvas.fit(640, 480).unwrap());
    }
}

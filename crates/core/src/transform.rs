//! Coordinate mapping from displayed pixels to native image pixels.
//!
//! The host renders the image at some size (e.g. 400x300) while the source
//! image may be much larger (e.g. 1600x1200). Hosts only ever see crop
//! rectangles in the native grid, so every rectangle the engine applies is
//! passed through [`CoordinateTransform::to_native`] before it is reported.

use crate::geometry::{CropRect, DisplayedImage};
use serde::{Deserialize, Serialize};

/// A crop rectangle in native image pixels, as handed to the host.
///
/// Fields are rounded independently, so `width` and `height` can differ by
/// one unit even though the displayed box is square.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReportedRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Mapping between the displayed and native pixel grids.
pub struct CoordinateTransform;

impl CoordinateTransform {
    /// Scales each field of `rect` by `natural_width / width` and rounds it.
    ///
    /// # Example
    ///
    /// ```
    /// use image_crop_core::{CoordinateTransform, CropRect, DisplayedImage, ReportedRect};
    ///
    /// let image = DisplayedImage::new(100, 100, 400, 400).unwrap();
    /// let reported = CoordinateTransform::to_native(&CropRect::square(10.0, 10.0, 50.0), &image);
    /// assert_eq!(reported, ReportedRect { x: 40, y: 40, width: 200, height: 200 });
    /// ```
    pub fn to_native(rect: &CropRect, image: &DisplayedImage) -> ReportedRect {
        let scale = image.scale();
        ReportedRect {
            x: Self::scale_field(rect.x, scale),
            y: Self::scale_field(rect.y, scale),
            width: Self::scale_field(rect.width, scale),
            height: Self::scale_field(rect.height, scale),
        }
    }

    fn scale_field(value: f32, scale: f64) -> u32 {
        (value as f64 * scale).round().max(0.0) as u32
    }
}

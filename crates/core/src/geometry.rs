//! Displayed-space geometry and the crop constraint engine.
//!
//! Everything here works in displayed pixels, i.e. the pixel grid of the image
//! as it is rendered on screen. Mapping to the image's native pixels lives in
//! [`crate::transform`].
//!
//! The functions in this module never fail. Pointer deltas that would push the
//! crop box out of the image or below its minimum side are clamped.

use crate::error::{CropError, Result};
use emath::{Pos2, Vec2, pos2};
use serde::{Deserialize, Serialize};

/// An image as rendered by the host, with its rendered and intrinsic sizes.
///
/// The host guarantees a uniform scale, so only the horizontal ratio is used
/// when converting between spaces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DisplayedImage {
    width: u32,
    height: u32,
    natural_width: u32,
    natural_height: u32,
}

impl DisplayedImage {
    /// Creates a displayed image description.
    ///
    /// # Errors
    ///
    /// Returns [`CropError::InvalidImage`] if any dimension is zero, which
    /// would leave no room for a crop box and no defined scale factor.
    pub fn new(width: u32, height: u32, natural_width: u32, natural_height: u32) -> Result<Self> {
        if width == 0 || height == 0 || natural_width == 0 || natural_height == 0 {
            return Err(CropError::InvalidImage {
                width,
                height,
                natural_width,
                natural_height,
            });
        }
        Ok(Self {
            width,
            height,
            natural_width,
            natural_height,
        })
    }

    /// An image rendered at its intrinsic size.
    pub fn unscaled(width: u32, height: u32) -> Result<Self> {
        Self::new(width, height, width, height)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn natural_width(&self) -> u32 {
        self.natural_width
    }

    pub fn natural_height(&self) -> u32 {
        self.natural_height
    }

    /// Rendered size as a vector, for arithmetic with pointer positions.
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    /// Native pixels per displayed pixel.
    pub fn scale(&self) -> f64 {
        self.natural_width as f64 / self.width as f64
    }
}

/// One of the four corner handles of the crop box.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Corner {
    NorthWest,
    NorthEast,
    SouthWest,
    SouthEast,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::NorthWest,
        Corner::NorthEast,
        Corner::SouthWest,
        Corner::SouthEast,
    ];

    /// The corner diagonally across the box.
    pub fn opposite(self) -> Corner {
        match self {
            Corner::NorthWest => Corner::SouthEast,
            Corner::NorthEast => Corner::SouthWest,
            Corner::SouthWest => Corner::NorthEast,
            Corner::SouthEast => Corner::NorthWest,
        }
    }

    /// Whether this corner lies on the top-left/bottom-right diagonal.
    pub fn is_nwse(self) -> bool {
        matches!(self, Corner::NorthWest | Corner::SouthEast)
    }
}

/// The crop box in displayed pixels.
///
/// Produced by the constraint engine, so it is always square and always fits
/// inside the displayed image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CropRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl CropRect {
    pub fn square(x: f32, y: f32, side: f32) -> Self {
        Self {
            x,
            y,
            width: side,
            height: side,
        }
    }

    /// Top-left corner.
    pub fn min(&self) -> Pos2 {
        pos2(self.x, self.y)
    }

    /// Bottom-right corner.
    pub fn max(&self) -> Pos2 {
        pos2(self.x + self.width, self.y + self.height)
    }

    pub fn corner(&self, corner: Corner) -> Pos2 {
        match corner {
            Corner::NorthWest => self.min(),
            Corner::NorthEast => pos2(self.x + self.width, self.y),
            Corner::SouthWest => pos2(self.x, self.y + self.height),
            Corner::SouthEast => self.max(),
        }
    }

    pub fn is_square(&self) -> bool {
        self.width == self.height
    }

    /// Whether the box lies entirely within the displayed image.
    pub fn is_within(&self, image: &DisplayedImage) -> bool {
        let size = image.size();
        self.x >= 0.0
            && self.y >= 0.0
            && self.width >= 0.0
            && self.height >= 0.0
            && self.max().x <= size.x
            && self.max().y <= size.y
    }
}

/// Computes a square box with one corner pinned at `anchor`, growing towards
/// the pointer.
///
/// `delta` is the pointer position minus the anchor. The larger axis delta
/// decides the side, which is then capped by the room left between the anchor
/// and the image edge in the direction of growth on each axis. Drawing a new
/// box and resizing from a corner both go through here; they differ only in
/// where the anchor was seeded.
pub fn resize_from_anchor(
    anchor: Pos2,
    delta: Vec2,
    image: &DisplayedImage,
    min_side: f32,
) -> CropRect {
    let size = image.size();

    let raw_side = delta.x.abs().max(delta.y.abs()).max(min_side);
    let vertical_cap = if delta.y > 0.0 {
        size.y - anchor.y
    } else {
        anchor.y
    };
    let horizontal_cap = if delta.x > 0.0 {
        size.x - anchor.x
    } else {
        anchor.x
    };
    // Caps are whole pixels so a fractional anchor cannot push the box past an edge.
    let side = raw_side
        .min(vertical_cap.floor())
        .min(horizontal_cap.floor())
        .max(0.0);

    let x = if delta.x > 0.0 { anchor.x } else { anchor.x - side };
    let y = if delta.y > 0.0 { anchor.y } else { anchor.y - side };

    CropRect::square(
        x.max(0.0).round().min(size.x - side),
        y.max(0.0).round().min(size.y - side),
        side,
    )
}

/// Shifts the box by an incremental pointer movement, keeping it inside the
/// image. The size never changes.
pub fn translate(rect: CropRect, movement: Vec2, image: &DisplayedImage) -> CropRect {
    let size = image.size();
    let x = (rect.x + movement.x)
        .round()
        .max(0.0)
        .min(size.x - rect.width);
    let y = (rect.y + movement.y)
        .round()
        .max(0.0)
        .min(size.y - rect.height);

    CropRect { x, y, ..rect }
}

/// The box shown once the image is ready: the largest square that fits,
/// centered on the image.
pub fn initial_square(image: &DisplayedImage, min_side: f32) -> CropRect {
    let size = image.size();
    let side = size.x.min(size.y).round();
    let anchor = pos2((size.x - side) / 2.0, (size.y - side) / 2.0);

    resize_from_anchor(anchor, Vec2::splat(side), image, min_side)
}

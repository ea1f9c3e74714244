//! Image-Crop Core Library
//!
//! This library provides the interactive core of a square image-cropping
//! widget: the crop-region state machine, its geometry constraints and the
//! mapping from displayed pixels to native image pixels.
//!
//! # Overview
//!
//! The host renders the image and its crop box and forwards pointer events.
//! The library handles:
//!
//! - **Interaction**: classifying a press as draw, move or corner resize via [`interaction`]
//! - **Constraints**: keeping the box square, above its minimum side and inside the image via [`geometry`]
//! - **Coordinate Mapping**: displayed to native pixels via [`transform`]
//! - **Notifications**: bubbling `crop:init` / `crop:change` events via [`events`]
//!
//! # Quick Start
//!
//! ```
//! use image_crop_core::{CropEngine, DisplayedImage, PointerSample, TargetRole};
//! use image_crop_core::emath::{pos2, vec2};
//!
//! let mut engine = CropEngine::default();
//! engine.image_ready(DisplayedImage::new(300, 200, 600, 400).unwrap());
//!
//! // Drag the box 20px to the left.
//! engine.pointer_down(TargetRole::CropBox, PointerSample::at(pos2(150.0, 100.0)));
//! engine.pointer_move(PointerSample::at(pos2(130.0, 100.0)), vec2(-20.0, 0.0));
//! engine.pointer_up();
//!
//! assert_eq!(engine.reported().unwrap().x, 60);
//! ```
//!
//! # Module Structure
//!
//! - [`config`]: Configuration loading and validation
//! - [`engine`]: The per-widget [`CropEngine`]
//! - [`error`]: Error types and result aliases
//! - [`events`]: Notifications and listener propagation
//! - [`geometry`]: Displayed-space types and the constraint engine
//! - [`interaction`]: Pointer interaction state machine
//! - [`transform`]: Displayed-to-native coordinate mapping

pub mod config;
pub mod engine;
pub mod error;
pub mod events;
pub mod geometry;
pub mod interaction;
pub mod transform;

// Re-export primary types for convenience
pub use config::CropConfig;
pub use engine::{CropEngine, on_change};
pub use error::{CropError, Result};
pub use events::{CropEvent, CropListener, Propagation};
pub use geometry::{Corner, CropRect, DisplayedImage};
pub use interaction::{
    CursorHint, Input, InteractionState, Mode, PointerSample, Session, TargetRole,
};
pub use transform::{CoordinateTransform, ReportedRect};

pub use emath;

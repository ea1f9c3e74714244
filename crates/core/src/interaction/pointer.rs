//! Pointer positions and their mapping into widget-local coordinates.

use emath::{Pos2, Vec2};
use serde::{Deserialize, Serialize};

/// A pointer position as reported by the host.
///
/// Hosts deliver page coordinates; the widget may sit anywhere on the page
/// and the page may be scrolled, so both are carried along with the sample.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PointerSample {
    /// Pointer position in page coordinates.
    pub page: Pos2,
    /// Top-left of the widget relative to the viewport.
    pub widget_origin: Pos2,
    /// Current page scroll offset.
    pub scroll: Vec2,
}

impl PointerSample {
    /// A sample for a widget at the page origin with no scroll.
    pub fn at(page: Pos2) -> Self {
        Self {
            page,
            ..Default::default()
        }
    }

    pub fn with_widget_origin(mut self, widget_origin: Pos2) -> Self {
        self.widget_origin = widget_origin;
        self
    }

    pub fn with_scroll(mut self, scroll: Vec2) -> Self {
        self.scroll = scroll;
        self
    }

    /// Position relative to the widget's top-left, snapped to whole displayed pixels.
    pub fn local(&self) -> Pos2 {
        (self.page - self.widget_origin.to_vec2() - self.scroll).round()
    }
}

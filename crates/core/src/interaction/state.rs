//! Interaction state types.
//!
//! A [`Session`] lives between pointer-down and pointer-up/leave. The observable
//! [`InteractionState`] is derived from it rather than stored separately.

use crate::geometry::Corner;
use emath::Pos2;
use serde::{Deserialize, Serialize};

/// What the pointer landed on when the button went down.
///
/// The host classifies its own markup into one of these roles, so the engine
/// never needs to know how the box and handles are rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetRole {
    /// The crop box interior.
    CropBox,
    /// One of the four corner handles.
    Handle(Corner),
    /// The image outside the crop box.
    Background,
    /// The host could not classify the target; treated as [`TargetRole::Background`].
    Unknown,
}

/// How pointer movement is interpreted during a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    /// A fresh box drawn from the press position.
    Draw,
    /// The existing box is dragged around.
    Move,
    /// The box is resized from a corner; the opposite corner stays put.
    Resize(Corner),
}

/// A single drag, from pointer-down to release.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub mode: Mode,
    /// Fixed reference point, in widget-local displayed pixels.
    ///
    /// Seeded once on pointer-down and never re-derived from the box while the
    /// drag is in progress.
    pub anchor: Pos2,
}

/// Current state of the interaction state machine.
///
/// `Idle` -> `Drawing` | `Moving` | `Resizing(corner)` on pointer-down,
/// back to `Idle` on pointer-up or pointer-leave.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InteractionState {
    Idle,
    Drawing,
    Moving,
    Resizing(Corner),
}

impl From<Option<&Session>> for InteractionState {
    fn from(session: Option<&Session>) -> Self {
        match session.map(|s| s.mode) {
            None => InteractionState::Idle,
            Some(Mode::Draw) => InteractionState::Drawing,
            Some(Mode::Move) => InteractionState::Moving,
            Some(Mode::Resize(corner)) => InteractionState::Resizing(corner),
        }
    }
}

/// Resize cursor the host should show while a corner is being dragged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CursorHint {
    #[default]
    None,
    /// Top-left to bottom-right diagonal.
    Nwse,
    /// Top-right to bottom-left diagonal.
    Nesw,
}

impl CursorHint {
    pub fn for_corner(corner: Corner) -> Self {
        if corner.is_nwse() {
            CursorHint::Nwse
        } else {
            CursorHint::Nesw
        }
    }

    /// CSS `cursor` value matching the hint.
    pub fn css_cursor(self) -> Option<&'static str> {
        match self {
            CursorHint::None => None,
            CursorHint::Nwse => Some("nwse-resize"),
            CursorHint::Nesw => Some("nesw-resize"),
        }
    }
}

impl From<Option<&Session>> for CursorHint {
    fn from(session: Option<&Session>) -> Self {
        match session.map(|s| s.mode) {
            Some(Mode::Resize(corner)) => CursorHint::for_corner(corner),
            _ => CursorHint::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_hint_follows_diagonal() {
        assert_eq!(CursorHint::for_corner(Corner::NorthWest), CursorHint::Nwse);
        assert_eq!(CursorHint::for_corner(Corner::SouthEast), CursorHint::Nwse);
        assert_eq!(CursorHint::for_corner(Corner::NorthEast), CursorHint::Nesw);
        assert_eq!(CursorHint::for_corner(Corner::SouthWest), CursorHint::Nesw);
        assert_eq!(CursorHint::Nesw.css_cursor(), Some("nesw-resize"));
        assert_eq!(CursorHint::None.css_cursor(), None);
    }

    #[test]
    fn only_resize_sessions_carry_a_cursor() {
        let anchor = Pos2::ZERO;
        let moving = Session {
            mode: Mode::Move,
            anchor,
        };
        let resizing = Session {
            mode: Mode::Resize(Corner::SouthWest),
            anchor,
        };
        assert_eq!(CursorHint::from(None::<&Session>), CursorHint::None);
        assert_eq!(CursorHint::from(Some(&moving)), CursorHint::None);
        assert_eq!(CursorHint::from(Some(&resizing)), CursorHint::Nesw);
        assert_eq!(
            InteractionState::from(Some(&resizing)),
            InteractionState::Resizing(Corner::SouthWest)
        );
    }
}

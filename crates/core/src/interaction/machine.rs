//! Pure transition function of the interaction state machine.
//!
//! [`step`] takes the current session and box plus one pointer input and
//! returns the next session and box. It owns no state and emits nothing, so it
//! can be driven without a real pointer device; [`crate::CropEngine`] wraps it
//! and turns applied boxes into notifications.

use super::pointer::PointerSample;
use super::state::{Mode, Session, TargetRole};
use crate::config::CropConfig;
use crate::geometry::{self, CropRect, DisplayedImage};
use emath::{Pos2, Vec2};

/// A pointer event delivered by the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Input {
    PointerDown {
        target: TargetRole,
        pointer: PointerSample,
    },
    /// Pointer moved with a button held.
    ///
    /// `pointer` feeds the draw/resize path, `movement` (the delta since the
    /// previous move event) feeds the move path.
    PointerMove {
        pointer: PointerSample,
        movement: Vec2,
    },
    PointerUp,
    PointerLeave,
}

/// Result of processing one [`Input`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Step {
    pub session: Option<Session>,
    pub rect: CropRect,
    /// Whether `rect` was recomputed and has to be reported.
    pub applied: bool,
}

impl Step {
    fn unchanged(session: Option<Session>, rect: CropRect) -> Self {
        Self {
            session,
            rect,
            applied: false,
        }
    }

    fn apply(session: Option<Session>, rect: CropRect) -> Self {
        Self {
            session,
            rect,
            applied: true,
        }
    }
}

/// Advances the state machine by one input.
pub fn step(
    session: Option<Session>,
    rect: CropRect,
    image: &DisplayedImage,
    config: &CropConfig,
    input: Input,
) -> Step {
    match input {
        Input::PointerDown { target, pointer } => {
            if session.is_some() {
                log::warn!("Ignoring pointer-down on {target:?}: a drag is already in progress");
                return Step::unchanged(session, rect);
            }
            press(target, pointer, rect, image, config)
        }
        Input::PointerMove { pointer, movement } => match session {
            None => Step::unchanged(None, rect),
            Some(active) => {
                let next = match active.mode {
                    Mode::Move => geometry::translate(rect, movement, image),
                    Mode::Draw | Mode::Resize(_) => geometry::resize_from_anchor(
                        active.anchor,
                        pointer.local() - active.anchor,
                        image,
                        config.min_side,
                    ),
                };
                Step::apply(session, next)
            }
        },
        Input::PointerUp | Input::PointerLeave => Step::unchanged(None, rect),
    }
}

fn press(
    target: TargetRole,
    pointer: PointerSample,
    rect: CropRect,
    image: &DisplayedImage,
    config: &CropConfig,
) -> Step {
    match target {
        TargetRole::CropBox => Step::unchanged(
            Some(Session {
                mode: Mode::Move,
                anchor: pointer.local(),
            }),
            rect,
        ),
        TargetRole::Handle(corner) => {
            let anchor = rect.corner(corner.opposite());
            let session = Session {
                mode: Mode::Resize(corner),
                anchor,
            };
            // The grabbed corner jumps to the pointer straight away.
            let delta = pointer.local() - anchor;
            let next = geometry::resize_from_anchor(anchor, delta, image, config.min_side);
            Step::apply(Some(session), next)
        }
        TargetRole::Background | TargetRole::Unknown => {
            // Presses outside the image start the draw from its nearest edge.
            let anchor = pointer.local().clamp(Pos2::ZERO, image.size().to_pos2());
            Step::unchanged(
                Some(Session {
                    mode: Mode::Draw,
                    anchor,
                }),
                rect,
            )
        }
    }
}

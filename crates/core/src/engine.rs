//! The crop engine: one instance per crop widget.
//!
//! The host forwards its image and pointer events to a [`CropEngine`]. Each
//! call is handled to completion before returning; the engine keeps no queue
//! and does no work between calls.

use std::ops::ControlFlow;

use crate::config::CropConfig;
use crate::error::Result;
use crate::events::{CropEvent, CropListener, Propagation};
use crate::geometry::{self, CropRect, DisplayedImage};
use crate::interaction::{
    self, CursorHint, Input, InteractionState, PointerSample, Session, TargetRole,
};
use crate::transform::{CoordinateTransform, ReportedRect};
use emath::Vec2;

/// Owns the crop box and the in-progress drag, and reports every change.
///
/// # Example
///
/// ```
/// use std::ops::ControlFlow;
/// use image_crop_core::{CropConfig, CropEngine, CropEvent, DisplayedImage};
///
/// let mut engine = CropEngine::new(CropConfig::default()).unwrap();
/// engine.listen(|event: &CropEvent| {
///     if let Some(rect) = event.detail() {
///         println!("crop: {rect:?}");
///     }
///     ControlFlow::Continue(())
/// });
/// engine.image_ready(DisplayedImage::new(300, 200, 1200, 800).unwrap());
/// assert_eq!(engine.reported().unwrap().width, 800);
/// ```
pub struct CropEngine {
    config: CropConfig,
    image: Option<DisplayedImage>,
    rect: CropRect,
    session: Option<Session>,
    propagation: Propagation,
}

impl CropEngine {
    /// Creates an engine waiting for its image.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CropError::Config`] if `config` is invalid.
    pub fn new(config: CropConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            image: None,
            rect: CropRect::default(),
            session: None,
            propagation: Propagation::default(),
        })
    }

    /// Creates an engine configured from the environment (see [`CropConfig::load`]).
    pub fn from_env() -> Result<Self> {
        Self::new(CropConfig::load()?)
    }

    /// Registers a listener on the widget itself.
    pub fn listen(&mut self, listener: impl CropListener + 'static) {
        self.propagation.listen(listener);
    }

    /// Registers a listener on a containing context, `depth` levels up.
    pub fn listen_ancestor(&mut self, depth: usize, listener: impl CropListener + 'static) {
        self.propagation.listen_at(depth, listener);
    }

    /// Handles the image finishing loading.
    ///
    /// The first call frames the largest centered square, then fires
    /// `crop:init` followed by `crop:change`. Later calls are ignored.
    pub fn image_ready(&mut self, image: DisplayedImage) {
        if self.image.is_some() {
            log::debug!("Image already initialized, ignoring {image:?}");
            return;
        }

        log::debug!(
            "Image ready: displayed {}x{}, natural {}x{}",
            image.width(),
            image.height(),
            image.natural_width(),
            image.natural_height()
        );
        self.image = Some(image);
        self.rect = geometry::initial_square(&image, self.config.min_side);

        self.propagation.dispatch(&CropEvent::Init);
        self.report(&image);
    }

    pub fn pointer_down(&mut self, target: TargetRole, pointer: PointerSample) {
        self.handle(Input::PointerDown { target, pointer });
    }

    /// Handles pointer movement while a button is held.
    ///
    /// `movement` is the delta since the previous move event.
    pub fn pointer_move(&mut self, pointer: PointerSample, movement: Vec2) {
        self.handle(Input::PointerMove { pointer, movement });
    }

    pub fn pointer_up(&mut self) {
        self.handle(Input::PointerUp);
    }

    pub fn pointer_leave(&mut self) {
        self.handle(Input::PointerLeave);
    }

    /// Feeds one pointer input through the state machine.
    pub fn handle(&mut self, input: Input) {
        let Some(image) = self.image else {
            if matches!(input, Input::PointerDown { .. }) {
                log::warn!("Ignoring pointer-down before the image is ready");
            }
            return;
        };

        let before = self.state();
        let step = interaction::step(self.session, self.rect, &image, &self.config, input);
        self.session = step.session;

        let after = self.state();
        if before != after {
            log::debug!("Crop interaction: {before:?} -> {after:?}");
        }

        if step.applied {
            self.rect = step.rect;
            self.report(&image);
        }
    }

    fn report(&mut self, image: &DisplayedImage) {
        let reported = CoordinateTransform::to_native(&self.rect, image);
        log::trace!("Crop box {:?} -> {reported:?}", self.rect);
        self.propagation.dispatch(&CropEvent::Change(reported));
    }

    /// Crop box in displayed pixels. Meaningless before the image is ready.
    pub fn rect(&self) -> CropRect {
        self.rect
    }

    /// Crop box in native pixels, once the image is ready.
    pub fn reported(&self) -> Option<ReportedRect> {
        self.image
            .map(|image| CoordinateTransform::to_native(&self.rect, &image))
    }

    pub fn image(&self) -> Option<&DisplayedImage> {
        self.image.as_ref()
    }

    pub fn config(&self) -> &CropConfig {
        &self.config
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn state(&self) -> InteractionState {
        self.session.as_ref().into()
    }

    /// Resize cursor the host should show; cleared when the drag ends.
    pub fn cursor_hint(&self) -> CursorHint {
        self.session.as_ref().into()
    }
}

impl Default for CropEngine {
    fn default() -> Self {
        Self {
            config: CropConfig::default(),
            image: None,
            rect: CropRect::default(),
            session: None,
            propagation: Propagation::default(),
        }
    }
}

/// Listener that forwards change payloads to a closure and lets events bubble on.
pub fn on_change(mut f: impl FnMut(ReportedRect)) -> impl CropListener {
    move |event: &CropEvent| {
        if let CropEvent::Change(rect) = event {
            f(*rect);
        }
        ControlFlow::Continue(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Corner;
    use emath::{pos2, vec2};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn ready(width: u32, height: u32) -> CropEngine {
        let mut engine = CropEngine::default();
        engine.image_ready(DisplayedImage::unscaled(width, height).unwrap());
        engine
    }

    #[test]
    fn pointer_input_before_image_is_ignored() {
        let mut engine = CropEngine::default();
        engine.pointer_down(TargetRole::Background, PointerSample::at(pos2(5.0, 5.0)));
        assert_eq!(engine.state(), InteractionState::Idle);
        assert_eq!(engine.reported(), None);
    }

    #[test]
    fn second_image_ready_does_not_reframe() {
        let mut engine = ready(300, 200);
        engine.pointer_down(TargetRole::CropBox, PointerSample::at(pos2(100.0, 100.0)));
        engine.pointer_move(PointerSample::default(), vec2(-30.0, 0.0));
        engine.pointer_up();

        engine.image_ready(DisplayedImage::unscaled(500, 500).unwrap());
        assert_eq!(engine.rect(), CropRect::square(20.0, 0.0, 200.0));
        assert_eq!(engine.image().map(|i| i.width()), Some(300));
    }

    #[test]
    fn cursor_hint_cleared_on_leave() {
        let mut engine = ready(200, 200);
        let corner = engine.rect().corner(Corner::SouthWest);
        engine.pointer_down(TargetRole::Handle(Corner::SouthWest), PointerSample::at(corner));
        assert_eq!(engine.cursor_hint(), CursorHint::Nesw);
        assert_eq!(engine.state(), InteractionState::Resizing(Corner::SouthWest));

        engine.pointer_leave();
        assert_eq!(engine.cursor_hint(), CursorHint::None);
        assert_eq!(engine.session(), None);
    }

    #[test]
    fn on_change_sees_only_changes() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut engine = CropEngine::default();
        let sink = Rc::clone(&seen);
        engine.listen(on_change(move |rect| sink.borrow_mut().push(rect)));

        engine.image_ready(DisplayedImage::new(100, 50, 200, 100).unwrap());

        assert_eq!(
            *seen.borrow(),
            vec![ReportedRect {
                x: 50,
                y: 0,
                width: 100,
                height: 100
            }]
        );
    }
}

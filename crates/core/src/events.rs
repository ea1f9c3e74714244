//! Notifications emitted by the crop engine.
//!
//! Events bubble: listeners are grouped by level, from the widget itself
//! (level 0) outward through its containing contexts. Every level sees an
//! event unless a listener on an inner level stops propagation.

use std::ops::ControlFlow;

use crate::transform::ReportedRect;

/// A notification delivered to listeners.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CropEvent {
    /// The image is ready and the initial box is about to be reported.
    /// Fired once per engine.
    Init,
    /// A new crop rectangle was applied, in native image pixels.
    Change(ReportedRect),
}

impl CropEvent {
    pub const INIT: &'static str = "crop:init";
    pub const CHANGE: &'static str = "crop:change";

    /// DOM-style event name.
    pub fn name(&self) -> &'static str {
        match self {
            CropEvent::Init => Self::INIT,
            CropEvent::Change(_) => Self::CHANGE,
        }
    }

    /// Payload carried by the event, if any.
    pub fn detail(&self) -> Option<&ReportedRect> {
        match self {
            CropEvent::Init => None,
            CropEvent::Change(rect) => Some(rect),
        }
    }
}

/// Receives crop notifications.
///
/// Returning [`ControlFlow::Break`] keeps the event from reaching outer
/// levels. Other listeners on the same level still run.
pub trait CropListener {
    fn on_event(&mut self, event: &CropEvent) -> ControlFlow<()>;
}

impl<F> CropListener for F
where
    F: FnMut(&CropEvent) -> ControlFlow<()>,
{
    fn on_event(&mut self, event: &CropEvent) -> ControlFlow<()> {
        self(event)
    }
}

/// Listeners of one widget and its ancestors, innermost first.
#[derive(Default)]
pub struct Propagation {
    levels: Vec<Vec<Box<dyn CropListener>>>,
}

impl Propagation {
    /// Registers a listener on the widget itself.
    pub fn listen(&mut self, listener: impl CropListener + 'static) {
        self.listen_at(0, listener);
    }

    /// Registers a listener `depth` levels above the widget (0 is the widget).
    pub fn listen_at(&mut self, depth: usize, listener: impl CropListener + 'static) {
        if self.levels.len() <= depth {
            self.levels.resize_with(depth + 1, Vec::new);
        }
        self.levels[depth].push(Box::new(listener));
    }

    pub fn listener_count(&self) -> usize {
        self.levels.iter().map(Vec::len).sum()
    }

    /// Delivers `event` to every level until a listener stops propagation.
    pub fn dispatch(&mut self, event: &CropEvent) {
        for (depth, level) in self.levels.iter_mut().enumerate() {
            let mut stopped = false;
            for listener in level.iter_mut() {
                stopped |= listener.on_event(event).is_break();
            }

            if stopped {
                log::trace!("{} stopped at level {depth}", event.name());
                break;
            }
        }
    }
}

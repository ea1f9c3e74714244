//! Interaction state machine for the crop box.
//!
//! This module turns raw pointer input into crop box updates.
//!
//! # Architecture
//!
//! - [`state`]: session, mode and target types
//! - [`pointer`]: page-to-local pointer mapping
//! - [`machine`]: the pure `(session, box, input) -> (session, box)` transition

mod machine;
mod pointer;
mod state;

pub use machine::{Input, Step, step};
pub use pointer::PointerSample;
pub use state::{CursorHint, InteractionState, Mode, Session, TargetRole};

//! Modal overlay lifecycle, independent of any engine.
//!
//! ## States
//!
//! | State     | Attached | Simulation          | Input            |
//! |-----------|----------|---------------------|------------------|
//! | `Closed`  | no       | untouched           | gameplay         |
//! | `Opening` | pending  | paused (if configured) | exclusive UI (if configured) |
//! | `Open`    | yes      | paused (if configured) | exclusive UI (if configured) |
//! | `Closing` | yes, until the close transition ends | resumed | gameplay |
//!
//! [`OverlayController`] owns the state; an [`OverlayHost`] supplied per call
//! performs the side effects.  See [`crate::menu`] for the Bevy host.

pub mod controller;
pub mod host;
pub mod state;
pub mod wiring;

pub use controller::OverlayController;
pub use host::OverlayHost;
pub use state::{
    ActionSlot, InputReply, LifecycleState, OverlayInput, OverlaySettings, OverlaySounds,
    ScheduledTask, Transition, TransitionKind, TriggerEvent,
};
pub use wiring::{ActionSlots, ActionWiring};

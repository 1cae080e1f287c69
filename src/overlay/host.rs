//! Collaborator contract the controller drives.
//!
//! The host is passed into every controller operation instead of being stored,
//! so one host value (e.g. a Bevy system parameter) can serve many controllers
//! and no controller reaches for global state.  Optional collaborators have
//! no-op default methods: a host that cannot play sounds or move focus simply
//! does not override them.

use super::state::{ScheduledTask, Transition};
use super::wiring::ActionSlots;

pub trait OverlayHost {
    /// Handle identifying a clickable action control.
    type Trigger: Clone + PartialEq + std::fmt::Debug;
    /// Handle identifying a playable audio cue.
    type Sound;

    // ── Simulation pause ─────────────────────────────────────────────────────

    /// Pause or resume the simulation.  Idempotent; last write wins.
    fn set_paused(&mut self, paused: bool);

    // ── Input mode ───────────────────────────────────────────────────────────

    /// Route input exclusively to the overlay (`true`) or back to gameplay.
    fn set_exclusive_ui_mode(&mut self, exclusive: bool);

    fn set_pointer_visible(&mut self, visible: bool);

    // ── Attachment ───────────────────────────────────────────────────────────

    /// Present the overlay at `z_order` and return the action triggers it exposes.
    fn attach(&mut self, z_order: i32) -> ActionSlots<Self::Trigger>;

    fn detach(&mut self);

    fn is_attached(&self) -> bool;

    // ── Scheduler ────────────────────────────────────────────────────────────

    /// Arrange for the controller's `on_scheduled` to be called once after
    /// `delay_secs` of wall-clock time.
    fn schedule_once(&mut self, delay_secs: f32) -> ScheduledTask;

    /// Cancel a task; cancelling a task that already fired is a no-op.
    fn cancel(&mut self, task: ScheduledTask);

    // ── Optional collaborators ───────────────────────────────────────────────

    fn play_transition(&mut self, _transition: &Transition) {}

    fn play_sound(&mut self, _cue: &Self::Sound) {}

    fn set_focus(&mut self, _trigger: &Self::Trigger) {}

    fn open_settings(&mut self) {}

    fn travel_to_main_menu(&mut self) {}

    fn quit(&mut self) {}
}

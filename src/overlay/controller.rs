//! The overlay lifecycle state machine.
//!
//! ```text
//!            request_open                 request_close
//!  Closed ─────────────────▶ Opening/Open ─────────────────▶ Closing
//!    ▲                                                          │
//!    └──────────── teardown (timer fired, or no transition) ────┘
//! ```
//!
//! Every request that the current state forbids is ignored.  Side effects go
//! through the [`OverlayHost`] passed to each call.

use bevy::log::debug;

use super::host::OverlayHost;
use super::state::{
    ActionSlot, InputReply, LifecycleState, OverlayInput, OverlaySettings, OverlaySounds,
    ScheduledTask, Transition, TriggerEvent,
};
use super::wiring::ActionWiring;

/// Lifecycle controller for one modal overlay.
///
/// `T` is the host's trigger handle type, `S` its sound handle type.
#[derive(Debug)]
pub struct OverlayController<T, S> {
    settings: OverlaySettings,
    state: LifecycleState,
    open_transition: Option<Transition>,
    close_transition: Option<Transition>,
    sounds: OverlaySounds<S>,
    wiring: Option<ActionWiring<T>>,
    focused: Option<ActionSlot>,
    pending_teardown: Option<ScheduledTask>,
    /// Set when this controller paused the simulation and still owes a resume.
    holds_pause: bool,
}

impl<T, S> OverlayController<T, S>
where
    T: Clone + PartialEq + std::fmt::Debug,
{
    pub fn new(settings: OverlaySettings) -> Self {
        Self {
            settings,
            state: LifecycleState::Closed,
            open_transition: None,
            close_transition: None,
            sounds: OverlaySounds::default(),
            wiring: None,
            focused: None,
            pending_teardown: None,
            holds_pause: false,
        }
    }

    /// Zero-length transitions are dropped.
    pub fn with_open_transition(mut self, transition: Option<Transition>) -> Self {
        self.open_transition = transition.and_then(Transition::non_zero);
        self
    }

    /// Zero-length transitions are dropped, making close synchronous.
    pub fn with_close_transition(mut self, transition: Option<Transition>) -> Self {
        self.close_transition = transition.and_then(Transition::non_zero);
        self
    }

    pub fn with_sounds(mut self, sounds: OverlaySounds<S>) -> Self {
        self.sounds = sounds;
        self
    }

    // ── Queries ──────────────────────────────────────────────────────────────

    #[inline]
    pub fn state(&self) -> LifecycleState {
        self.state
    }

    /// `true` while `Opening` or `Open`.
    #[inline]
    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    #[inline]
    pub fn settings(&self) -> &OverlaySettings {
        &self.settings
    }

    pub fn focused(&self) -> Option<ActionSlot> {
        self.focused
    }

    pub fn pending_teardown(&self) -> Option<ScheduledTask> {
        self.pending_teardown
    }

    pub fn holds_pause(&self) -> bool {
        self.holds_pause
    }

    /// Action bound to `trigger` in the live wiring.
    pub fn slot_for(&self, trigger: &T) -> Option<ActionSlot> {
        self.wiring.as_ref().and_then(|w| w.slot_for(trigger))
    }

    // ── Requests ─────────────────────────────────────────────────────────────

    pub fn request_toggle<H>(&mut self, host: &mut H)
    where
        H: OverlayHost<Trigger = T, Sound = S>,
    {
        if self.state == LifecycleState::Closed {
            self.request_open(host);
        } else {
            self.request_close(host);
        }
    }

    /// `Closed → Opening → Open`.  Ignored in any other state.
    pub fn request_open<H>(&mut self, host: &mut H)
    where
        H: OverlayHost<Trigger = T, Sound = S>,
    {
        if self.state != LifecycleState::Closed {
            debug!("[overlay] open ignored while {}", self.state);
            return;
        }

        if self.settings.pause_on_open {
            host.set_paused(true);
            self.holds_pause = true;
        }
        if self.settings.show_cursor_on_open {
            host.set_exclusive_ui_mode(true);
            host.set_pointer_visible(true);
        }

        self.state = LifecycleState::Opening;
        let slots = host.attach(self.settings.z_order);
        self.wiring = Some(ActionWiring::wire(slots));

        if let Some(cue) = self.sounds.open.as_ref() {
            host.play_sound(cue);
        }
        if let Some(transition) = self.open_transition.as_ref() {
            host.play_transition(transition);
        }
        self.focus_primary(host);

        self.sync_attachment(host);
        debug!("[overlay] opened ({})", self.state);
    }

    /// `Opening | Open → Closing`, then teardown now or after the close
    /// transition.  Ignored while `Closed` or already `Closing`.
    pub fn request_close<H>(&mut self, host: &mut H)
    where
        H: OverlayHost<Trigger = T, Sound = S>,
    {
        if !self.state.is_open() {
            debug!("[overlay] close ignored while {}", self.state);
            return;
        }

        self.state = LifecycleState::Closing;

        if let Some(cue) = self.sounds.close.as_ref() {
            host.play_sound(cue);
        }
        self.release_pause(host);
        host.set_exclusive_ui_mode(false);
        host.set_pointer_visible(false);

        match self.close_transition {
            Some(transition) => {
                host.play_transition(&transition);
                self.pending_teardown = Some(host.schedule_once(transition.duration_secs));
                debug!(
                    "[overlay] closing; teardown in {:.2}s",
                    transition.duration_secs
                );
            }
            None => self.teardown(host),
        }
    }

    /// Promote `Opening` to `Open` once the host reports the overlay attached.
    pub fn sync_attachment<H>(&mut self, host: &H)
    where
        H: OverlayHost<Trigger = T, Sound = S>,
    {
        if self.state == LifecycleState::Opening && host.is_attached() {
            self.state = LifecycleState::Open;
        }
    }

    /// Called by the host when a task from `schedule_once` fires.
    ///
    /// Stale tasks (cancelled, or from an earlier close) are ignored.
    pub fn on_scheduled<H>(&mut self, task: ScheduledTask, host: &mut H)
    where
        H: OverlayHost<Trigger = T, Sound = S>,
    {
        if self.state == LifecycleState::Closing && self.pending_teardown == Some(task) {
            self.teardown(host);
        } else {
            debug!("[overlay] stale task {:?} ignored while {}", task, self.state);
        }
    }

    /// Destroy-time cleanup: cancel any pending teardown, release pause and
    /// input holds, and tear down synchronously.  Safe in every state.
    pub fn shutdown<H>(&mut self, host: &mut H)
    where
        H: OverlayHost<Trigger = T, Sound = S>,
    {
        match self.state {
            LifecycleState::Closed => {
                self.wiring = None;
            }
            LifecycleState::Opening | LifecycleState::Open => {
                self.release_pause(host);
                host.set_exclusive_ui_mode(false);
                host.set_pointer_visible(false);
                self.teardown(host);
            }
            LifecycleState::Closing => {
                if let Some(task) = self.pending_teardown.take() {
                    host.cancel(task);
                }
                self.teardown(host);
            }
        }
    }

    // ── Actions ──────────────────────────────────────────────────────────────

    /// Route a trigger event through the live wiring.  Events from unwired
    /// triggers, or arriving while the overlay is not open, are dropped.
    pub fn handle_trigger<H>(&mut self, trigger: &T, event: TriggerEvent, host: &mut H)
    where
        H: OverlayHost<Trigger = T, Sound = S>,
    {
        if !self.state.is_open() {
            return;
        }
        let Some(slot) = self.slot_for(trigger) else {
            return;
        };
        match event {
            TriggerEvent::Hovered => {
                if let Some(cue) = self.sounds.hover.as_ref() {
                    host.play_sound(cue);
                }
            }
            TriggerEvent::Clicked => self.activate(slot, host),
        }
    }

    /// Run the action bound to `slot`.  Only acts while open.
    pub fn activate<H>(&mut self, slot: ActionSlot, host: &mut H)
    where
        H: OverlayHost<Trigger = T, Sound = S>,
    {
        if !self.state.is_open() {
            debug!("[overlay] {:?} ignored while {}", slot, self.state);
            return;
        }
        if let Some(cue) = self.sounds.click.as_ref() {
            host.play_sound(cue);
        }
        match slot {
            ActionSlot::Resume => self.request_close(host),
            ActionSlot::Settings => {
                debug!("[overlay] settings requested");
                host.open_settings();
            }
            ActionSlot::MainMenu => {
                host.set_paused(false);
                self.holds_pause = false;
                host.travel_to_main_menu();
            }
            ActionSlot::Quit => host.quit(),
        }
    }

    /// Offer an input to the overlay before the rest of the input stack.
    pub fn handle_input<H>(&mut self, input: OverlayInput, host: &mut H) -> InputReply
    where
        H: OverlayHost<Trigger = T, Sound = S>,
    {
        if !host.is_attached() {
            return InputReply::Unhandled;
        }
        match input {
            OverlayInput::Cancel => {
                if self.state == LifecycleState::Closing {
                    return InputReply::Unhandled;
                }
                self.request_close(host);
                InputReply::Handled
            }
            OverlayInput::FocusNext | OverlayInput::FocusPrevious => {
                if !self.state.is_open() {
                    return InputReply::Unhandled;
                }
                let backwards = input == OverlayInput::FocusPrevious;
                let next = match (self.wiring.as_ref(), self.focused) {
                    (Some(wiring), Some(from)) => wiring.step(from, backwards),
                    (Some(wiring), None) => wiring.step(ActionSlot::Quit, false),
                    (None, _) => None,
                };
                if let Some(slot) = next {
                    self.focus(slot, host);
                }
                InputReply::Handled
            }
            OverlayInput::Confirm => {
                if !self.state.is_open() {
                    return InputReply::Unhandled;
                }
                match self.focused {
                    Some(slot) => {
                        self.activate(slot, host);
                        InputReply::Handled
                    }
                    None => InputReply::Unhandled,
                }
            }
        }
    }

    // ── Internals ────────────────────────────────────────────────────────────

    fn focus_primary<H>(&mut self, host: &mut H)
    where
        H: OverlayHost<Trigger = T, Sound = S>,
    {
        let primary = match self.wiring.as_ref() {
            Some(wiring) if wiring.is_wired(ActionSlot::Resume) => Some(ActionSlot::Resume),
            Some(wiring) => wiring.step(ActionSlot::Resume, false),
            None => None,
        };
        self.focused = None;
        if let Some(slot) = primary {
            self.focus(slot, host);
        }
    }

    fn focus<H>(&mut self, slot: ActionSlot, host: &mut H)
    where
        H: OverlayHost<Trigger = T, Sound = S>,
    {
        if let Some(trigger) = self.wiring.as_ref().and_then(|w| w.trigger_for(slot)) {
            host.set_focus(trigger);
            self.focused = Some(slot);
        }
    }

    fn release_pause<H>(&mut self, host: &mut H)
    where
        H: OverlayHost<Trigger = T, Sound = S>,
    {
        if self.holds_pause {
            host.set_paused(false);
            self.holds_pause = false;
        }
    }

    /// The only path back to `Closed`.
    fn teardown<H>(&mut self, host: &mut H)
    where
        H: OverlayHost<Trigger = T, Sound = S>,
    {
        self.pending_teardown = None;
        self.wiring = None;
        self.focused = None;
        host.detach();
        self.state = LifecycleState::Closed;
        debug!("[overlay] torn down");
    }
}

// ── Unit tests ────────────────────────────────────────────────────────────────

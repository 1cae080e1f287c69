//! Plain value types shared by the controller and its host.

use std::fmt;

/// Lifecycle phase of one overlay.
///
/// Exactly one variant holds at a time; the only way back to `Closed` is
/// teardown from `Closing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LifecycleState {
    /// Detached; simulation and input belong to gameplay.
    #[default]
    Closed,
    /// Open was requested but the host has not reported the overlay attached.
    Opening,
    /// Attached and accepting input.
    Open,
    /// Close side effects ran; waiting for the close transition before teardown.
    Closing,
}

impl LifecycleState {
    /// `true` while the overlay counts as shown (`Opening` or `Open`).
    #[inline]
    pub fn is_open(self) -> bool {
        matches!(self, LifecycleState::Opening | LifecycleState::Open)
    }
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LifecycleState::Closed => "closed",
            LifecycleState::Opening => "opening",
            LifecycleState::Open => "open",
            LifecycleState::Closing => "closing",
        };
        f.write_str(label)
    }
}

/// The four fixed actions the overlay presents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionSlot {
    Resume,
    Settings,
    MainMenu,
    Quit,
}

impl ActionSlot {
    /// Focus / display order, top to bottom.
    pub const ALL: [ActionSlot; 4] = [
        ActionSlot::Resume,
        ActionSlot::Settings,
        ActionSlot::MainMenu,
        ActionSlot::Quit,
    ];

    #[inline]
    pub fn label(self) -> &'static str {
        match self {
            ActionSlot::Resume => "RESUME",
            ActionSlot::Settings => "SETTINGS",
            ActionSlot::MainMenu => "MAIN MENU",
            ActionSlot::Quit => "QUIT",
        }
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        match self {
            ActionSlot::Resume => 0,
            ActionSlot::Settings => 1,
            ActionSlot::MainMenu => 2,
            ActionSlot::Quit => 3,
        }
    }
}

/// What happened to a trigger (button) the overlay wired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerEvent {
    Clicked,
    Hovered,
}

/// Device-independent inputs the overlay may intercept.
///
/// The host maps concrete keys / buttons onto these before offering them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayInput {
    /// Escape or the secondary gamepad face button.
    Cancel,
    /// Move focus one action up.
    FocusPrevious,
    /// Move focus one action down.
    FocusNext,
    /// Activate the focused action.
    Confirm,
}

/// Whether an offered input was consumed by the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputReply {
    Handled,
    Unhandled,
}

impl InputReply {
    #[inline]
    pub fn is_handled(self) -> bool {
        self == InputReply::Handled
    }
}

/// Which way a [`Transition`] fades.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    FadeIn,
    FadeOut,
}

/// An animated transition with a known duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub kind: TransitionKind,
    pub duration_secs: f32,
}

impl Transition {
    pub fn fade_in(duration_secs: f32) -> Self {
        Self {
            kind: TransitionKind::FadeIn,
            duration_secs,
        }
    }

    pub fn fade_out(duration_secs: f32) -> Self {
        Self {
            kind: TransitionKind::FadeOut,
            duration_secs,
        }
    }

    /// Returns `None` for a non-positive or non-finite duration, which is the
    /// same as having no transition at all.
    pub fn non_zero(self) -> Option<Self> {
        (self.duration_secs.is_finite() && self.duration_secs > 0.0).then_some(self)
    }
}

/// Handle to a one-shot task returned by the host scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScheduledTask(pub u64);

/// Optional audio cues; a `None` cue is silent.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlaySounds<S> {
    pub open: Option<S>,
    pub close: Option<S>,
    pub hover: Option<S>,
    pub click: Option<S>,
}

impl<S> Default for OverlaySounds<S> {
    fn default() -> Self {
        Self {
            open: None,
            close: None,
            hover: None,
            click: None,
        }
    }
}

/// Immutable behaviour flags supplied at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlaySettings {
    pub pause_on_open: bool,
    pub show_cursor_on_open: bool,
    pub z_order: i32,
}

impl Default for OverlaySettings {
    fn default() -> Self {
        Self {
            pause_on_open: true,
            show_cursor_on_open: true,
            z_order: crate::constants::OVERLAY_Z_ORDER,
        }
    }
}

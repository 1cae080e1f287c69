use std::collections::HashSet;

use bevy::prelude::*;

use crate::config::OverlayConfig;
use crate::overlay::{
    ActionSlot, OverlayController, OverlaySounds, ScheduledTask, Transition, TransitionKind,
};

/// Top-level application state machine.
#[derive(States, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum GameState {
    /// Main-menu splash screen; shown on startup.
    #[default]
    MainMenu,
    /// Active simulation.  The pause overlay lives inside this state.
    Playing,
}

// ── Main menu ─────────────────────────────────────────────────────────────────

/// Root node of the main-menu UI; entire tree is despawned on `OnExit(MainMenu)`.
#[derive(Component)]
pub struct MainMenuRoot;

/// Tags the "Start Game" button.
#[derive(Component)]
pub struct MenuStartButton;

/// Tags the "Quit" button.
#[derive(Component)]
pub struct MenuQuitButton;

// ── Pause overlay ─────────────────────────────────────────────────────────────

/// Controller type used by the Bevy host: triggers are button entities,
/// sounds are audio asset handles.
pub type PauseController = OverlayController<Entity, Handle<AudioSource>>;

/// Pause overlay owned by one player (or other owning context).
///
/// The controller holds the lifecycle; the surface holds what the Bevy host
/// has put on screen for it.
#[derive(Component, Debug)]
pub struct PauseOverlay {
    pub controller: PauseController,
    pub surface: OverlaySurface,
}

impl PauseOverlay {
    pub fn new(controller: PauseController) -> Self {
        Self {
            controller,
            surface: OverlaySurface::default(),
        }
    }

    /// Build from config, loading sound cues when an asset server is available.
    pub fn from_config(config: &OverlayConfig, assets: Option<&AssetServer>) -> Self {
        let load = |path: &Option<String>| -> Option<Handle<AudioSource>> {
            let server = assets?;
            path.as_ref().map(|p| server.load(p.clone()))
        };
        let sounds = OverlaySounds {
            open: load(&config.open_sound),
            close: load(&config.close_sound),
            hover: load(&config.hover_sound),
            click: load(&config.click_sound),
        };
        Self::new(
            PauseController::new(config.settings())
                .with_open_transition(config.open_transition())
                .with_close_transition(config.close_transition())
                .with_sounds(sounds),
        )
    }
}

/// Host-side state of one overlay: the attached UI root, its focused button,
/// and the pending teardown timer.
#[derive(Debug, Default)]
pub struct OverlaySurface {
    pub root: Option<Entity>,
    pub focused: Option<Entity>,
    pub pending: Option<PendingTeardown>,
}

/// One-shot teardown timer, measured in real time.
#[derive(Debug)]
pub struct PendingTeardown {
    pub task: ScheduledTask,
    pub timer: Timer,
}

/// Root node of a pause-overlay UI tree.
#[derive(Component)]
pub struct PauseMenuRoot {
    pub owner: Entity,
}

/// Tags an action button in the pause overlay.
#[derive(Component, Debug, Clone, Copy)]
pub struct PauseActionButton {
    pub owner: Entity,
    pub slot: ActionSlot,
}

/// Interaction seen on the previous change, so a released click
/// (`Pressed` → `Hovered`) is not mistaken for a fresh hover.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct PreviousInteraction(pub Interaction);

/// Running fade on an overlay root's dim layer.
#[derive(Component, Debug)]
pub struct OverlayFade {
    pub kind: TransitionKind,
    pub timer: Timer,
}

impl OverlayFade {
    pub fn new(transition: Transition) -> Self {
        Self {
            kind: transition.kind,
            timer: Timer::from_seconds(transition.duration_secs, TimerMode::Once),
        }
    }

    /// Opacity factor in `[0, 1]` for the current progress.
    pub fn opacity(&self) -> f32 {
        let t = self.timer.fraction();
        match self.kind {
            TransitionKind::FadeIn => t,
            TransitionKind::FadeOut => 1.0 - t,
        }
    }
}

/// Source of unique [`ScheduledTask`] ids.
#[derive(Resource, Debug, Default)]
pub struct OverlayTaskIds(u64);

impl OverlayTaskIds {
    pub fn next(&mut self) -> ScheduledTask {
        self.0 += 1;
        ScheduledTask(self.0)
    }
}

// ── Input routing ─────────────────────────────────────────────────────────────

/// Which owners currently hold exclusive UI input and pointer visibility.
///
/// Gameplay input systems run only while no owner holds exclusive UI input
/// (see [`super::gameplay_input_enabled`]).
#[derive(Resource, Debug, Default, Clone, PartialEq, Eq)]
pub struct InputRouting {
    exclusive_ui: HashSet<Entity>,
    pointer: HashSet<Entity>,
}

impl InputRouting {
    pub fn set_exclusive_ui(&mut self, owner: Entity, exclusive: bool) {
        if exclusive {
            self.exclusive_ui.insert(owner);
        } else {
            self.exclusive_ui.remove(&owner);
        }
    }

    pub fn set_pointer_visible(&mut self, owner: Entity, visible: bool) {
        if visible {
            self.pointer.insert(owner);
        } else {
            self.pointer.remove(&owner);
        }
    }

    #[inline]
    pub fn is_exclusive_ui(&self) -> bool {
        !self.exclusive_ui.is_empty()
    }

    #[inline]
    pub fn pointer_visible(&self) -> bool {
        !self.pointer.is_empty()
    }

    pub fn clear(&mut self) {
        self.exclusive_ui.clear();
        self.pointer.clear();
    }
}

// ── Programmatic requests ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayRequestKind {
    Toggle,
    Open,
    Close,
}

/// Ask an overlay to open, close or toggle from code (e.g. a script or a
/// focus-lost handler).  `owner: None` addresses every overlay.
#[derive(Message, Debug, Clone, Copy)]
pub struct PauseOverlayRequest {
    pub owner: Option<Entity>,
    pub kind: OverlayRequestKind,
}

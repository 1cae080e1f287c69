//! Headless tests for the pause overlay running inside Bevy.
//!
//! Real time is advanced by a fixed 50 ms per `app.update()` through
//! [`TimeUpdateStrategy::ManualDuration`], so teardown timers fire
//! deterministically.  Keyboard input is driven by pressing keys on the
//! `ButtonInput<KeyCode>` resource directly (no `InputPlugin`).
//!
//! Covered scenarios:
//! 1. ESC opens the overlay, pauses the simulation and captures input.
//! 2. ESC while open closes it; teardown waits for the close fade.
//! 3. ESC while closing neither reopens nor double-closes.
//! 4. A zero-length close fade tears down in the same frame.
//! 5. Resume / Main Menu / Quit buttons.
//! 6. Keyboard and gamepad navigation and confirm.
//! 7. Leaving `Playing` mid-close destroys the overlay without a late teardown.
//! 8. Two owners hold independent pauses.
//! 9. A frame longer than the close fade still shows one `Closing` frame.
//! 10. Releasing a click does not replay the hover cue.

use std::time::Duration;

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;
use pause_overlay::config::OverlayConfig;
use pause_overlay::menu::{
    GameState, InputRouting, MenuPlugin, OverlayRequestKind, PauseActionButton, PauseController,
    PauseMenuRoot, PauseOverlay, PauseOverlayRequest,
};
use pause_overlay::overlay::{ActionSlot, LifecycleState, OverlaySettings, OverlaySounds};
use pause_overlay::simulation::SimulationPause;

// ── Helpers ───────────────────────────────────────────────────────────────────

const FRAME: Duration = Duration::from_millis(50);

/// Headless app already in `Playing`, with `config` in place of the defaults.
fn playing_app(config: OverlayConfig) -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin));
    app.insert_resource(TimeUpdateStrategy::ManualDuration(FRAME));
    app.init_resource::<ButtonInput<KeyCode>>();
    app.add_plugins(MenuPlugin);
    app.insert_resource(config);
    app.update(); // settle into MainMenu

    app.world_mut()
        .resource_mut::<NextState<GameState>>()
        .set(GameState::Playing);
    app.update();
    app
}

/// Press `key` for exactly one frame.
fn tap(app: &mut App, key: KeyCode) {
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(key);
    app.update();
    let mut keys = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
    keys.release(key);
    keys.clear();
}

fn frames(app: &mut App, n: usize) {
    for _ in 0..n {
        app.update();
    }
}

fn player_overlay(app: &mut App) -> Entity {
    let mut q = app
        .world_mut()
        .query_filtered::<Entity, With<PauseOverlay>>();
    q.iter(app.world())
        .next()
        .expect("an overlay owner exists while playing")
}

fn state_of(app: &App, owner: Entity) -> LifecycleState {
    app.world()
        .get::<PauseOverlay>(owner)
        .expect("owner has a PauseOverlay")
        .controller
        .state()
}

fn root_count(app: &mut App) -> usize {
    let mut q = app.world_mut().query::<&PauseMenuRoot>();
    q.iter(app.world()).count()
}

fn button(app: &mut App, owner: Entity, slot: ActionSlot) -> Entity {
    let mut q = app
        .world_mut()
        .query::<(Entity, &PauseActionButton)>();
    q.iter(app.world())
        .find(|(_, b)| b.owner == owner && b.slot == slot)
        .map(|(e, _)| e)
        .expect("button is spawned while attached")
}

fn press(app: &mut App, button: Entity) {
    app.world_mut().entity_mut(button).insert(Interaction::Pressed);
    app.update();
}

/// Press `button` on `pad` for exactly one frame.
fn tap_pad(app: &mut App, pad: Entity, button: GamepadButton) {
    app.world_mut()
        .get_mut::<Gamepad>(pad)
        .expect("gamepad entity")
        .digital_mut()
        .press(button);
    app.update();
    let mut gamepad = app.world_mut().get_mut::<Gamepad>(pad).expect("gamepad entity");
    let digital = gamepad.digital_mut();
    digital.release(button);
    digital.clear();
}

fn focused(app: &App, owner: Entity) -> Option<Entity> {
    app.world()
        .get::<PauseOverlay>(owner)
        .and_then(|o| o.surface.focused)
}

fn paused(app: &App) -> bool {
    app.world().resource::<SimulationPause>().is_paused()
}

fn instant_close() -> OverlayConfig {
    OverlayConfig {
        close_fade_secs: 0.0,
        ..OverlayConfig::default()
    }
}

// ── Open / close ──────────────────────────────────────────────────────────────

#[test]
fn escape_opens_pauses_and_captures_input() {
    let mut app = playing_app(OverlayConfig::default());
    let owner = player_overlay(&mut app);
    assert!(!paused(&app));

    tap(&mut app, KeyCode::Escape);

    assert_eq!(state_of(&app, owner), LifecycleState::Open);
    assert!(paused(&app), "opening must pause the simulation");
    let routing = app.world().resource::<InputRouting>();
    assert!(routing.is_exclusive_ui());
    assert!(routing.pointer_visible());
    assert_eq!(root_count(&mut app), 1);
}

#[test]
fn open_without_pause_leaves_simulation_running() {
    let mut app = playing_app(OverlayConfig {
        pause_on_open: false,
        ..OverlayConfig::default()
    });
    let owner = player_overlay(&mut app);

    tap(&mut app, KeyCode::Escape);

    assert_eq!(state_of(&app, owner), LifecycleState::Open);
    assert!(!paused(&app));
}

#[test]
fn escape_while_open_waits_for_close_fade() {
    let mut app = playing_app(OverlayConfig::default()); // 0.2 s close fade
    let owner = player_overlay(&mut app);
    tap(&mut app, KeyCode::Escape);

    tap(&mut app, KeyCode::Escape);

    assert_eq!(state_of(&app, owner), LifecycleState::Closing);
    assert!(!paused(&app), "close resumes immediately, before the fade");
    assert!(!app.world().resource::<InputRouting>().is_exclusive_ui());

    frames(&mut app, 1); // 50 ms into a 200 ms fade
    assert_eq!(state_of(&app, owner), LifecycleState::Closing);
    assert_eq!(root_count(&mut app), 1, "still attached during the fade");

    frames(&mut app, 4); // 250 ms
    assert_eq!(state_of(&app, owner), LifecycleState::Closed);
    assert_eq!(root_count(&mut app), 0);
}

#[test]
fn long_frame_does_not_skip_the_close_fade() {
    let mut app = playing_app(OverlayConfig::default()); // 0.2 s close fade
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(250)));
    let owner = player_overlay(&mut app);
    tap(&mut app, KeyCode::Escape);

    tap(&mut app, KeyCode::Escape);

    // Time spent before the close request must not count toward the fade.
    assert_eq!(state_of(&app, owner), LifecycleState::Closing);
    assert_eq!(root_count(&mut app), 1);

    frames(&mut app, 1);
    assert_eq!(state_of(&app, owner), LifecycleState::Closed);
    assert_eq!(root_count(&mut app), 0);
}

#[test]
fn escape_while_closing_does_not_reopen() {
    let mut app = playing_app(OverlayConfig::default());
    let owner = player_overlay(&mut app);
    tap(&mut app, KeyCode::Escape);
    tap(&mut app, KeyCode::Escape);

    tap(&mut app, KeyCode::Escape);

    assert_eq!(state_of(&app, owner), LifecycleState::Closing);
    frames(&mut app, 6);
    assert_eq!(state_of(&app, owner), LifecycleState::Closed);
    assert_eq!(root_count(&mut app), 0);
    assert!(!paused(&app));
}

#[test]
fn zero_close_fade_tears_down_in_same_frame() {
    let mut app = playing_app(instant_close());
    let owner = player_overlay(&mut app);
    tap(&mut app, KeyCode::Escape);

    tap(&mut app, KeyCode::Escape);

    assert_eq!(state_of(&app, owner), LifecycleState::Closed);
    assert_eq!(root_count(&mut app), 0);
}

#[test]
fn reopen_after_close_repeats_the_first_cycle() {
    let mut app = playing_app(instant_close());
    let owner = player_overlay(&mut app);

    for cycle in 0..2 {
        tap(&mut app, KeyCode::Escape);
        assert_eq!(state_of(&app, owner), LifecycleState::Open, "cycle {cycle}");
        assert!(paused(&app), "cycle {cycle}");
        assert_eq!(root_count(&mut app), 1, "cycle {cycle}");

        tap(&mut app, KeyCode::Escape);
        assert_eq!(state_of(&app, owner), LifecycleState::Closed, "cycle {cycle}");
        assert!(!paused(&app), "cycle {cycle}");
        assert_eq!(root_count(&mut app), 0, "cycle {cycle}");
    }
}

#[test]
fn programmatic_toggle_request() {
    let mut app = playing_app(instant_close());
    let owner = player_overlay(&mut app);

    app.world_mut()
        .resource_mut::<Messages<PauseOverlayRequest>>()
        .write(PauseOverlayRequest {
            owner: None,
            kind: OverlayRequestKind::Toggle,
        });
    app.update();
    assert_eq!(state_of(&app, owner), LifecycleState::Open);

    app.world_mut()
        .resource_mut::<Messages<PauseOverlayRequest>>()
        .write(PauseOverlayRequest {
            owner: Some(owner),
            kind: OverlayRequestKind::Close,
        });
    app.update();
    assert_eq!(state_of(&app, owner), LifecycleState::Closed);
}

// ── Buttons ───────────────────────────────────────────────────────────────────

#[test]
fn resume_button_closes() {
    let mut app = playing_app(OverlayConfig::default());
    let owner = player_overlay(&mut app);
    tap(&mut app, KeyCode::Escape);

    let resume = button(&mut app, owner, ActionSlot::Resume);
    press(&mut app, resume);

    assert_eq!(state_of(&app, owner), LifecycleState::Closing);
}

#[test]
fn main_menu_button_leaves_playing_and_releases_everything() {
    let mut app = playing_app(OverlayConfig::default());
    let owner = player_overlay(&mut app);
    tap(&mut app, KeyCode::Escape);

    let main_menu = button(&mut app, owner, ActionSlot::MainMenu);
    press(&mut app, main_menu);
    assert!(!paused(&app), "main menu resumes before travelling");

    app.update(); // StateTransition: Playing → MainMenu

    assert_eq!(
        *app.world().resource::<State<GameState>>().get(),
        GameState::MainMenu
    );
    assert!(app.world().get_entity(owner).is_err(), "overlay owner despawned");
    assert_eq!(root_count(&mut app), 0);
    assert!(!app.world().resource::<InputRouting>().is_exclusive_ui());
}

#[test]
fn quit_button_requests_app_exit() {
    let mut app = playing_app(OverlayConfig::default());
    let owner = player_overlay(&mut app);
    tap(&mut app, KeyCode::Escape);

    let quit = button(&mut app, owner, ActionSlot::Quit);
    press(&mut app, quit);

    assert_eq!(app.should_exit(), Some(AppExit::Success));
}

#[test]
fn releasing_a_click_does_not_replay_the_hover_cue() {
    let mut app = playing_app(OverlayConfig::default());
    let owner = app
        .world_mut()
        .spawn(PauseOverlay::new(
            PauseController::new(OverlaySettings::default()).with_sounds(OverlaySounds {
                hover: Some(Handle::default()),
                ..OverlaySounds::default()
            }),
        ))
        .id();
    app.world_mut()
        .resource_mut::<Messages<PauseOverlayRequest>>()
        .write(PauseOverlayRequest {
            owner: Some(owner),
            kind: OverlayRequestKind::Open,
        });
    app.update();
    let settings = button(&mut app, owner, ActionSlot::Settings);

    for interaction in [Interaction::Hovered, Interaction::Pressed, Interaction::Hovered] {
        app.world_mut().entity_mut(settings).insert(interaction);
        app.update();
    }

    assert_eq!(state_of(&app, owner), LifecycleState::Open);
    let mut cues = app.world_mut().query::<&AudioPlayer>();
    assert_eq!(cues.iter(app.world()).count(), 1, "one hover, no replay on release");
}

#[test]
fn settings_button_keeps_overlay_open() {
    let mut app = playing_app(OverlayConfig::default());
    let owner = player_overlay(&mut app);
    tap(&mut app, KeyCode::Escape);

    let settings = button(&mut app, owner, ActionSlot::Settings);
    press(&mut app, settings);

    assert_eq!(state_of(&app, owner), LifecycleState::Open);
    assert!(paused(&app));
}

// ── Navigation ────────────────────────────────────────────────────────────────

#[test]
fn arrow_keys_move_focus_and_enter_confirms() {
    let mut app = playing_app(OverlayConfig::default());
    let owner = player_overlay(&mut app);
    tap(&mut app, KeyCode::Escape);

    let resume = button(&mut app, owner, ActionSlot::Resume);
    assert_eq!(focused(&app, owner), Some(resume), "resume is focused on open");

    tap(&mut app, KeyCode::ArrowUp);
    let quit = button(&mut app, owner, ActionSlot::Quit);
    assert_eq!(focused(&app, owner), Some(quit), "focus wraps to the last action");

    tap(&mut app, KeyCode::ArrowDown);
    tap(&mut app, KeyCode::Enter);

    assert_eq!(state_of(&app, owner), LifecycleState::Closing);
}

#[test]
fn space_confirms_the_focused_action() {
    let mut app = playing_app(OverlayConfig::default());
    let owner = player_overlay(&mut app);
    tap(&mut app, KeyCode::Escape);

    tap(&mut app, KeyCode::ArrowDown);
    let settings = button(&mut app, owner, ActionSlot::Settings);
    assert_eq!(focused(&app, owner), Some(settings));

    tap(&mut app, KeyCode::Space);
    assert_eq!(state_of(&app, owner), LifecycleState::Open, "settings keeps it open");

    tap(&mut app, KeyCode::ArrowUp);
    tap(&mut app, KeyCode::Space);
    assert_eq!(state_of(&app, owner), LifecycleState::Closing);
}

#[test]
fn gamepad_toggles_navigates_and_cancels() {
    let mut app = playing_app(OverlayConfig::default());
    let owner = player_overlay(&mut app);
    let pad = app.world_mut().spawn(Gamepad::default()).id();

    tap_pad(&mut app, pad, GamepadButton::Start);
    assert_eq!(state_of(&app, owner), LifecycleState::Open);
    assert!(paused(&app));

    tap_pad(&mut app, pad, GamepadButton::DPadDown);
    let settings = button(&mut app, owner, ActionSlot::Settings);
    assert_eq!(focused(&app, owner), Some(settings));

    tap_pad(&mut app, pad, GamepadButton::South);
    assert_eq!(state_of(&app, owner), LifecycleState::Open, "settings keeps it open");

    tap_pad(&mut app, pad, GamepadButton::DPadUp);
    let resume = button(&mut app, owner, ActionSlot::Resume);
    assert_eq!(focused(&app, owner), Some(resume));

    // East is the cancel key: it closes, and it is not a toggle.
    tap_pad(&mut app, pad, GamepadButton::East);
    assert_eq!(state_of(&app, owner), LifecycleState::Closing);
    assert!(!paused(&app));

    frames(&mut app, 6);
    tap_pad(&mut app, pad, GamepadButton::East);
    assert_eq!(
        state_of(&app, owner),
        LifecycleState::Closed,
        "east on a closed overlay is not intercepted and does not open it"
    );

    tap_pad(&mut app, pad, GamepadButton::South);
    assert_eq!(state_of(&app, owner), LifecycleState::Closed);
}

// ── Destruction ───────────────────────────────────────────────────────────────

#[test]
fn leaving_playing_mid_close_destroys_overlay_once() {
    let mut app = playing_app(OverlayConfig {
        close_fade_secs: 2.0,
        ..OverlayConfig::default()
    });
    let owner = player_overlay(&mut app);
    tap(&mut app, KeyCode::Escape);
    tap(&mut app, KeyCode::Escape);
    assert_eq!(state_of(&app, owner), LifecycleState::Closing);

    app.world_mut()
        .resource_mut::<NextState<GameState>>()
        .set(GameState::MainMenu);
    app.update();

    assert!(app.world().get_entity(owner).is_err());
    assert_eq!(root_count(&mut app), 0);

    // Run well past the old fade; nothing may fire or respawn.
    frames(&mut app, 60);
    assert_eq!(root_count(&mut app), 0);
    assert!(!paused(&app));
}

// ── Multiple owners ───────────────────────────────────────────────────────────

#[test]
fn two_owners_hold_independent_pauses() {
    let mut app = playing_app(instant_close());
    let first = player_overlay(&mut app);
    let second = app
        .world_mut()
        .spawn(PauseOverlay::new(PauseController::new(
            OverlaySettings::default(),
        )))
        .id();

    for owner in [first, second] {
        app.world_mut()
            .resource_mut::<Messages<PauseOverlayRequest>>()
            .write(PauseOverlayRequest {
                owner: Some(owner),
                kind: OverlayRequestKind::Open,
            });
    }
    app.update();
    assert_eq!(state_of(&app, first), LifecycleState::Open);
    assert_eq!(state_of(&app, second), LifecycleState::Open);

    app.world_mut()
        .resource_mut::<Messages<PauseOverlayRequest>>()
        .write(PauseOverlayRequest {
            owner: Some(first),
            kind: OverlayRequestKind::Close,
        });
    app.update();
    assert_eq!(state_of(&app, first), LifecycleState::Closed);
    assert!(paused(&app), "second owner still holds the pause");

    app.world_mut()
        .resource_mut::<Messages<PauseOverlayRequest>>()
        .write(PauseOverlayRequest {
            owner: Some(second),
            kind: OverlayRequestKind::Close,
        });
    app.update();
    assert!(!paused(&app));
}

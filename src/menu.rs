//! Bevy front end: `GameState`, the main menu, and the pause overlay host.
//!
//! ## States
//!
//! | State      | Description                                            |
//! |------------|--------------------------------------------------------|
//! | `MainMenu` | Initial state; splash screen shown                     |
//! | `Playing`  | Demo world running; pause overlay available (ESC/Start) |
//!
//! The pause overlay is *not* a `GameState`: its lifecycle is owned by a
//! [`PauseOverlay`] component per owner, so opening and closing never run
//! `OnEnter`/`OnExit` schedules and a close fade can outlive the pause.
//!
//! ## Systems (registered by `MenuPlugin`)
//!
//! | System                      | Schedule                  | Purpose                                  |
//! |-----------------------------|---------------------------|------------------------------------------|
//! | `setup_main_menu`           | `OnEnter(MainMenu)`       | Spawn full-screen menu UI                |
//! | `cleanup_main_menu`         | `OnExit(MainMenu)`        | Despawn menu UI entities                 |
//! | `menu_button_system`        | `Update / in MainMenu`    | Handle Start / Quit clicks               |
//! | `spawn_pause_overlay`       | `OnEnter(Playing)`        | Create the player's overlay controller   |
//! | `tick_overlay_timers`       | `Update / in Playing`     | Fire deferred teardown                   |
//! | `tick_overlay_fades`        | `Update / in Playing`     | Animate fade in / out                    |
//! | `pause_input_system`        | `Update / in Playing`     | ESC / gamepad → intercept, toggle, navigate |
//! | `pause_request_system`      | `Update / in Playing`     | Programmatic open / close / toggle       |
//! | `pause_button_system`       | `Update / in Playing`     | Button click / hover → controller        |
//! | `pause_button_style_system` | `Update / in Playing`     | Highlight hovered / focused button       |
//! | `shutdown_pause_overlays`   | `OnExit(Playing)`         | Destroy controllers mid-transition safely |
//! | `apply_input_routing`       | `PostUpdate`              | Sync OS cursor visibility                |

use bevy::prelude::*;

use crate::config::OverlayConfig;
use crate::constants::OVERLAY_DIM_ALPHA;
use crate::overlay::{ActionSlot, ActionSlots, OverlayInput, TriggerEvent};
use crate::simulation::SimulationPause;

mod common;
mod host;
mod main_menu;
mod pause;
mod types;

use common::*;
pub use host::{BevyOverlayHost, OverlayParams};
pub use main_menu::*;
pub use pause::*;
pub use types::*;

/// Registers `GameState`, the main menu, and the pause overlay systems.
///
/// Must be added before any plugin that uses `.run_if(in_state(..))` on
/// [`GameState`].
pub struct MenuPlugin;

impl Plugin for MenuPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<OverlayConfig>()
            .init_resource::<SimulationPause>()
            .init_resource::<InputRouting>()
            .init_resource::<OverlayTaskIds>()
            .add_message::<PauseOverlayRequest>()
            .add_systems(OnEnter(GameState::MainMenu), setup_main_menu)
            .add_systems(OnExit(GameState::MainMenu), cleanup_main_menu)
            .add_systems(
                Update,
                menu_button_system.run_if(in_state(GameState::MainMenu)),
            )
            .add_systems(OnEnter(GameState::Playing), spawn_pause_overlay)
            .add_systems(OnExit(GameState::Playing), shutdown_pause_overlays)
            .add_systems(
                Update,
                (
                    tick_overlay_timers,
                    tick_overlay_fades,
                    pause_input_system,
                    pause_request_system,
                    pause_button_system,
                    pause_button_style_system,
                )
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(
                PostUpdate,
                apply_input_routing.run_if(resource_changed::<InputRouting>),
            );
    }
}

/// Run condition: gameplay input is live while no overlay holds exclusive UI input.
pub fn gameplay_input_enabled(routing: Res<InputRouting>) -> bool {
    !routing.is_exclusive_ui()
}

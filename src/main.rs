use bevy::prelude::*;
use bevy::window::WindowResolution;
use bevy_rapier2d::prelude::*;

use pause_overlay::config::{self, OverlayConfig};
use pause_overlay::graphics;
use pause_overlay::menu::MenuPlugin;
use pause_overlay::simulation::{self, SimulationPlugin};

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Drift Field".into(),
                resolution: WindowResolution::new(1200, 680),
                ..Default::default()
            }),
            ..Default::default()
        }))
        .insert_resource(ClearColor(Color::BLACK))
        // Compiled defaults; load_overlay_config overwrites them from
        // assets/pause_overlay.toml (if present) in the Startup schedule.
        .insert_resource(OverlayConfig::default())
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::pixels_per_meter(1.0))
        // MenuPlugin registers GameState; it must come before SimulationPlugin.
        .add_plugins(MenuPlugin)
        .add_plugins(SimulationPlugin)
        .add_systems(
            Startup,
            (
                config::load_overlay_config,
                graphics::setup_camera.after(config::load_overlay_config),
                simulation::setup_physics_config,
            ),
        )
        .run();
}

//! Simulation pause collaborator and the demo world it freezes.
//!
//! ## Pause model
//!
//! [`SimulationPause`] records *who* asked for the pause.  The simulation is
//! paused while at least one owner holds it, so two overlay controllers
//! (split-screen) cannot resume each other's pause.  [`apply_simulation_pause`]
//! pushes the combined flag into `Time<Virtual>` and the Rapier pipeline
//! whenever the holds change.
//!
//! ## Demo world
//!
//! A field of drifting bodies spawned on `OnEnter(Playing)`; Space nudges them
//! while gameplay owns the input.

use std::collections::HashSet;

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;
use rand::Rng;

use crate::config::OverlayConfig;
use crate::constants::{
    DEMO_BODY_RADIUS, DEMO_INITIAL_SPEED, DEMO_NUDGE_IMPULSE, DEMO_SPAWN_HALF_EXTENT,
};
use crate::menu::{gameplay_input_enabled, GameState};

pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimulationPause>()
            .add_systems(OnEnter(GameState::Playing), spawn_demo_world)
            .add_systems(OnExit(GameState::Playing), despawn_demo_world)
            .add_systems(
                Update,
                nudge_bodies_system
                    .run_if(in_state(GameState::Playing))
                    .run_if(gameplay_input_enabled),
            )
            .add_systems(
                PostUpdate,
                apply_simulation_pause.run_if(resource_changed::<SimulationPause>),
            );
    }
}

// ── Pause holds ───────────────────────────────────────────────────────────────

/// Set of owners currently holding the simulation paused.
#[derive(Resource, Debug, Default, Clone, PartialEq, Eq)]
pub struct SimulationPause {
    holders: HashSet<Entity>,
}

impl SimulationPause {
    /// Add or drop `owner`'s hold.  Repeating the same call is a no-op.
    pub fn set(&mut self, owner: Entity, paused: bool) {
        if paused {
            self.holders.insert(owner);
        } else {
            self.holders.remove(&owner);
        }
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        !self.holders.is_empty()
    }

    pub fn is_held_by(&self, owner: Entity) -> bool {
        self.holders.contains(&owner)
    }

    /// Drop every hold.  Used when the play session ends.
    pub fn clear(&mut self) {
        self.holders.clear();
    }
}

/// Push the combined pause flag into virtual time and the physics pipeline.
pub fn apply_simulation_pause(
    pause: Res<SimulationPause>,
    mut time: ResMut<Time<Virtual>>,
    mut rapier: Query<&mut RapierConfiguration>,
) {
    let paused = pause.is_paused();
    if paused {
        time.pause();
    } else {
        time.unpause();
    }
    for mut cfg in rapier.iter_mut() {
        cfg.physics_pipeline_active = !paused;
    }
}

/// Configure Rapier for the demo: no gravity.
pub fn setup_physics_config(mut config: Query<&mut RapierConfiguration>) {
    for mut cfg in config.iter_mut() {
        cfg.gravity = Vec2::ZERO;
    }
}

// ── Demo world ────────────────────────────────────────────────────────────────

/// Marker for every demo body so the world can be cleared on exit.
#[derive(Component)]
pub struct DemoBody;

fn body_color(rng: &mut impl Rng) -> Color {
    Color::srgb(
        rng.gen_range(0.45..0.95),
        rng.gen_range(0.45..0.95),
        rng.gen_range(0.55..1.0),
    )
}

pub fn spawn_demo_world(mut commands: Commands, config: Res<OverlayConfig>) {
    let mut rng = rand::thread_rng();
    for _ in 0..config.demo_body_count {
        let pos = Vec2::new(
            rng.gen_range(-DEMO_SPAWN_HALF_EXTENT..DEMO_SPAWN_HALF_EXTENT),
            rng.gen_range(-DEMO_SPAWN_HALF_EXTENT..DEMO_SPAWN_HALF_EXTENT) * 0.6,
        );
        let angle = rng.gen_range(0.0..std::f32::consts::TAU);
        let speed = rng.gen_range(0.2..1.0) * DEMO_INITIAL_SPEED;
        commands.spawn((
            DemoBody,
            Sprite::from_color(body_color(&mut rng), Vec2::splat(DEMO_BODY_RADIUS * 2.0)),
            Transform::from_translation(pos.extend(0.0)),
            RigidBody::Dynamic,
            Collider::ball(DEMO_BODY_RADIUS),
            Restitution::coefficient(0.9),
            Velocity::linear(Vec2::from_angle(angle) * speed),
            ExternalImpulse::default(),
        ));
    }
    info!("Spawned {} demo bodies", config.demo_body_count);
}

pub fn despawn_demo_world(
    mut commands: Commands,
    bodies: Query<Entity, With<DemoBody>>,
    mut pause: ResMut<SimulationPause>,
) {
    for entity in bodies.iter() {
        commands.entity(entity).despawn();
    }
    pause.clear();
}

/// Space → random impulse on every body.  Gameplay input only.
pub fn nudge_bodies_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut bodies: Query<&mut ExternalImpulse, With<DemoBody>>,
) {
    if !keys.just_pressed(KeyCode::Space) {
        return;
    }
    let mut rng = rand::thread_rng();
    for mut impulse in bodies.iter_mut() {
        let angle = rng.gen_range(0.0..std::f32::consts::TAU);
        impulse.impulse = Vec2::from_angle(angle) * DEMO_NUDGE_IMPULSE;
    }
}

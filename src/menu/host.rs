//! Bevy implementation of [`OverlayHost`].
//!
//! [`OverlayParams`] gathers every resource the host touches into one system
//! parameter; [`BevyOverlayHost`] borrows it together with one overlay's
//! [`OverlaySurface`] for the duration of a controller call.

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use super::pause::spawn_pause_menu;
use super::types::{
    GameState, InputRouting, OverlayFade, OverlaySurface, OverlayTaskIds, PendingTeardown,
};
use crate::overlay::{ActionSlots, OverlayHost, ScheduledTask, Transition};
use crate::simulation::SimulationPause;

#[derive(SystemParam)]
pub struct OverlayParams<'w, 's> {
    pub commands: Commands<'w, 's>,
    pub pause: ResMut<'w, SimulationPause>,
    pub routing: ResMut<'w, InputRouting>,
    pub task_ids: ResMut<'w, OverlayTaskIds>,
    pub next_state: ResMut<'w, NextState<GameState>>,
    pub exit: MessageWriter<'w, AppExit>,
}

pub struct BevyOverlayHost<'a, 'w, 's> {
    owner: Entity,
    surface: &'a mut OverlaySurface,
    params: &'a mut OverlayParams<'w, 's>,
}

impl<'a, 'w, 's> BevyOverlayHost<'a, 'w, 's> {
    pub fn new(
        owner: Entity,
        surface: &'a mut OverlaySurface,
        params: &'a mut OverlayParams<'w, 's>,
    ) -> Self {
        Self {
            owner,
            surface,
            params,
        }
    }
}

impl OverlayHost for BevyOverlayHost<'_, '_, '_> {
    type Trigger = Entity;
    type Sound = Handle<AudioSource>;

    fn set_paused(&mut self, paused: bool) {
        self.params.pause.set(self.owner, paused);
    }

    fn set_exclusive_ui_mode(&mut self, exclusive: bool) {
        self.params.routing.set_exclusive_ui(self.owner, exclusive);
    }

    fn set_pointer_visible(&mut self, visible: bool) {
        self.params.routing.set_pointer_visible(self.owner, visible);
    }

    fn attach(&mut self, z_order: i32) -> ActionSlots<Entity> {
        if let Some(stale) = self.surface.root.take() {
            self.params.commands.entity(stale).despawn();
        }
        let (root, slots) = spawn_pause_menu(&mut self.params.commands, self.owner, z_order);
        self.surface.root = Some(root);
        slots
    }

    fn detach(&mut self) {
        if let Some(root) = self.surface.root.take() {
            self.params.commands.entity(root).despawn();
        }
        self.surface.focused = None;
        self.surface.pending = None;
    }

    fn is_attached(&self) -> bool {
        self.surface.root.is_some()
    }

    fn schedule_once(&mut self, delay_secs: f32) -> ScheduledTask {
        let task = self.params.task_ids.next();
        self.surface.pending = Some(PendingTeardown {
            task,
            timer: Timer::from_seconds(delay_secs, TimerMode::Once),
        });
        task
    }

    fn cancel(&mut self, task: ScheduledTask) {
        if self.surface.pending.as_ref().is_some_and(|p| p.task == task) {
            self.surface.pending = None;
        }
    }

    fn play_transition(&mut self, transition: &Transition) {
        if let Some(root) = self.surface.root {
            self.params
                .commands
                .entity(root)
                .insert(OverlayFade::new(*transition));
        }
    }

    fn play_sound(&mut self, cue: &Handle<AudioSource>) {
        self.params
            .commands
            .spawn((AudioPlayer::new(cue.clone()), PlaybackSettings::DESPAWN));
    }

    fn set_focus(&mut self, trigger: &Entity) {
        self.surface.focused = Some(*trigger);
    }

    fn open_settings(&mut self) {
        info!("[pause] settings dialog is not available in this build");
    }

    fn travel_to_main_menu(&mut self) {
        self.params.next_state.set(GameState::MainMenu);
    }

    fn quit(&mut self) {
        self.params.exit.write(AppExit::Success);
    }
}

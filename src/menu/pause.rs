use super::*;

use bevy::input::gamepad::GamepadButton;
use bevy::window::{CursorOptions, PrimaryWindow};

/// Spawn the pause-overlay owner for the local player.
pub fn spawn_pause_overlay(
    mut commands: Commands,
    config: Res<OverlayConfig>,
    assets: Option<Res<AssetServer>>,
) {
    commands.spawn((
        Name::new("Pause overlay (player 1)"),
        PauseOverlay::from_config(&config, assets.as_deref()),
    ));
}

/// Spawn the in-game pause overlay UI tree and return its root and buttons.
///
/// Layout (appears centred over the frozen world):
/// ```text
/// ┌─────────────────────────────────────────────┐
/// │ ░░░░░░░░░ semi-transparent overlay ░░░░░░░░ │
/// │ ░░░░░   ┌───────────────────────┐   ░░░░░░ │
/// │ ░░░░░   │        PAUSED         │   ░░░░░░ │
/// │ ░░░░░   │    [ RESUME     ]     │   ░░░░░░ │
/// │ ░░░░░   │    [ SETTINGS   ]     │   ░░░░░░ │
/// │ ░░░░░   │    [ MAIN MENU  ]     │   ░░░░░░ │
/// │ ░░░░░   │    [ QUIT       ]     │   ░░░░░░ │
/// │ ░░░░░   │   ESC to resume       │   ░░░░░░ │
/// │ ░░░░░   └───────────────────────┘   ░░░░░░ │
/// └─────────────────────────────────────────────┘
/// ```
pub fn spawn_pause_menu(
    commands: &mut Commands,
    owner: Entity,
    z_order: i32,
) -> (Entity, ActionSlots<Entity>) {
    let mut slots = ActionSlots::new();

    let root = commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                top: Val::Px(0.0),
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, OVERLAY_DIM_ALPHA)),
            GlobalZIndex(z_order),
            PauseMenuRoot { owner },
        ))
        .with_children(|overlay| {
            overlay
                .spawn((
                    Node {
                        flex_direction: FlexDirection::Column,
                        align_items: AlignItems::Center,
                        padding: UiRect::all(Val::Px(36.0)),
                        row_gap: Val::Px(14.0),
                        border: UiRect::all(Val::Px(2.0)),
                        min_width: Val::Px(280.0),
                        ..default()
                    },
                    BackgroundColor(card_bg()),
                    BorderColor::all(card_border()),
                ))
                .with_children(|card| {
                    card.spawn((
                        Text::new("PAUSED"),
                        TextFont {
                            font_size: 38.0,
                            ..default()
                        },
                        TextColor(title_color()),
                    ));

                    spacer(card, 4.0);

                    for slot in ActionSlot::ALL {
                        let (bg, border, text) = slot_palette(slot);
                        let button = card
                            .spawn((
                                Button,
                                Node {
                                    width: Val::Px(220.0),
                                    height: Val::Px(48.0),
                                    justify_content: JustifyContent::Center,
                                    align_items: AlignItems::Center,
                                    border: UiRect::all(Val::Px(2.0)),
                                    ..default()
                                },
                                BackgroundColor(bg),
                                BorderColor::all(border),
                                PauseActionButton { owner, slot },
                                PreviousInteraction::default(),
                            ))
                            .with_children(|btn| {
                                btn.spawn((
                                    Text::new(slot.label()),
                                    TextFont {
                                        font_size: 18.0,
                                        ..default()
                                    },
                                    TextColor(text),
                                ));
                            })
                            .id();
                        slots.set(slot, button);
                    }

                    spacer(card, 4.0);

                    card.spawn((
                        Text::new("ESC → resume  ·  ↑/↓ select  ·  Enter/Space confirm"),
                        TextFont {
                            font_size: 12.0,
                            ..default()
                        },
                        TextColor(hint_color()),
                    ));
                });
        })
        .id();

    (root, slots)
}

// ── Input ─────────────────────────────────────────────────────────────────────

/// Per-frame snapshot of the keys and buttons the overlay cares about.
#[derive(Debug, Default, Clone, Copy)]
struct PauseKeys {
    /// Escape or gamepad East: offered to the overlay as `Cancel`.
    cancel: bool,
    /// Escape or gamepad Start: toggles when the overlay does not consume it.
    toggle: bool,
    up: bool,
    down: bool,
    confirm: bool,
}

impl PauseKeys {
    fn read(keys: &ButtonInput<KeyCode>, gamepads: &Query<&Gamepad>) -> Self {
        let pad = |button: GamepadButton| gamepads.iter().any(|g| g.just_pressed(button));
        let escape = keys.just_pressed(KeyCode::Escape);
        Self {
            cancel: escape || pad(GamepadButton::East),
            toggle: escape || pad(GamepadButton::Start),
            up: keys.any_just_pressed([KeyCode::ArrowUp, KeyCode::KeyW])
                || pad(GamepadButton::DPadUp),
            down: keys.any_just_pressed([KeyCode::ArrowDown, KeyCode::KeyS])
                || pad(GamepadButton::DPadDown),
            confirm: keys.any_just_pressed([KeyCode::Enter, KeyCode::Space])
                || pad(GamepadButton::South),
        }
    }
}

/// Route pause keys to every overlay.
///
/// Cancel is intercepted first; only if the overlay leaves it unconsumed does
/// the toggle key reach `request_toggle`.  This keeps ESC on a closing overlay
/// from reopening it in the same frame.
pub fn pause_input_system(
    keys: Res<ButtonInput<KeyCode>>,
    gamepads: Query<&Gamepad>,
    mut overlays: Query<(Entity, &mut PauseOverlay)>,
    mut params: OverlayParams,
) {
    let pressed = PauseKeys::read(&keys, &gamepads);

    for (owner, mut overlay) in overlays.iter_mut() {
        let PauseOverlay {
            controller,
            surface,
        } = &mut *overlay;
        let mut host = BevyOverlayHost::new(owner, surface, &mut params);

        let consumed =
            pressed.cancel && controller.handle_input(OverlayInput::Cancel, &mut host).is_handled();
        if pressed.toggle && !consumed {
            controller.request_toggle(&mut host);
        }
        if pressed.up {
            controller.handle_input(OverlayInput::FocusPrevious, &mut host);
        }
        if pressed.down {
            controller.handle_input(OverlayInput::FocusNext, &mut host);
        }
        if pressed.confirm {
            controller.handle_input(OverlayInput::Confirm, &mut host);
        }
    }
}

/// Apply [`PauseOverlayRequest`] messages.
pub fn pause_request_system(
    mut requests: MessageReader<PauseOverlayRequest>,
    mut overlays: Query<(Entity, &mut PauseOverlay)>,
    mut params: OverlayParams,
) {
    for request in requests.read() {
        for (owner, mut overlay) in overlays.iter_mut() {
            if request.owner.is_some_and(|target| target != owner) {
                continue;
            }
            let PauseOverlay {
                controller,
                surface,
            } = &mut *overlay;
            let mut host = BevyOverlayHost::new(owner, surface, &mut params);
            match request.kind {
                OverlayRequestKind::Toggle => controller.request_toggle(&mut host),
                OverlayRequestKind::Open => controller.request_open(&mut host),
                OverlayRequestKind::Close => controller.request_close(&mut host),
            }
        }
    }
}

/// Map an interaction change to the trigger it represents, if any.
///
/// Only entering `Hovered` from `None` is a hover; `Pressed` → `Hovered` is the
/// release of a click that was already reported.
pub fn trigger_for_change(previous: Interaction, current: Interaction) -> Option<TriggerEvent> {
    match (previous, current) {
        (_, Interaction::Pressed) => Some(TriggerEvent::Clicked),
        (Interaction::None, Interaction::Hovered) => Some(TriggerEvent::Hovered),
        _ => None,
    }
}

/// Forward button clicks and hovers to the owning controller.
#[allow(clippy::type_complexity)]
pub fn pause_button_system(
    mut buttons: Query<
        (
            Entity,
            &Interaction,
            &PauseActionButton,
            &mut PreviousInteraction,
        ),
        Changed<Interaction>,
    >,
    mut overlays: Query<&mut PauseOverlay>,
    mut params: OverlayParams,
) {
    for (button, interaction, action, mut previous) in buttons.iter_mut() {
        let change = trigger_for_change(previous.0, *interaction);
        previous.0 = *interaction;
        let Some(event) = change else {
            continue;
        };
        let Ok(mut overlay) = overlays.get_mut(action.owner) else {
            continue;
        };
        let PauseOverlay {
            controller,
            surface,
        } = &mut *overlay;
        let mut host = BevyOverlayHost::new(action.owner, surface, &mut params);
        controller.handle_trigger(&button, event, &mut host);
    }
}

/// Brighten the label of the hovered or focused button.
pub fn pause_button_style_system(
    buttons: Query<(Entity, &Interaction, &PauseActionButton, &Children)>,
    overlays: Query<&PauseOverlay>,
    mut btn_text: Query<&mut TextColor>,
) {
    for (button, interaction, action, children) in buttons.iter() {
        let focused = overlays
            .get(action.owner)
            .is_ok_and(|o| o.surface.focused == Some(button));
        let highlighted = focused || *interaction != Interaction::None;
        let color = if highlighted {
            Color::WHITE
        } else {
            slot_palette(action.slot).2
        };
        for child in children.iter() {
            if let Ok(mut text) = btn_text.get_mut(child) {
                if text.0 != color {
                    *text = TextColor(color);
                }
            }
        }
    }
}

// ── Timers and transitions ────────────────────────────────────────────────────

/// Advance pending teardown timers in real time and fire the due ones.
///
/// Real time keeps the close fade running even though the simulation clock
/// may still be paused by another owner.  Runs ahead of the input systems, so
/// a timer scheduled this frame is first ticked by the next frame's delta.
pub fn tick_overlay_timers(
    time: Res<Time<Real>>,
    mut overlays: Query<(Entity, &mut PauseOverlay)>,
    mut params: OverlayParams,
) {
    for (owner, mut overlay) in overlays.iter_mut() {
        let PauseOverlay {
            controller,
            surface,
        } = &mut *overlay;

        let fired = surface.pending.as_mut().and_then(|pending| {
            pending.timer.tick(time.delta());
            pending.timer.just_finished().then_some(pending.task)
        });

        let mut host = BevyOverlayHost::new(owner, surface, &mut params);
        controller.sync_attachment(&host);
        if let Some(task) = fired {
            controller.on_scheduled(task, &mut host);
        }
    }
}

/// Animate the dim layer of overlay roots with a running fade.
pub fn tick_overlay_fades(
    mut commands: Commands,
    time: Res<Time<Real>>,
    mut fades: Query<(Entity, &mut OverlayFade, &mut BackgroundColor)>,
) {
    for (entity, mut fade, mut bg) in fades.iter_mut() {
        fade.timer.tick(time.delta());
        bg.0.set_alpha(fade.opacity() * OVERLAY_DIM_ALPHA);
        if fade.timer.just_finished() {
            commands.entity(entity).remove::<OverlayFade>();
        }
    }
}

/// Show or hide the OS cursor when pointer holds change.
pub fn apply_input_routing(
    routing: Res<InputRouting>,
    mut cursors: Query<&mut CursorOptions, With<PrimaryWindow>>,
) {
    for mut cursor in cursors.iter_mut() {
        cursor.visible = routing.pointer_visible();
    }
}

// ── Destruction ───────────────────────────────────────────────────────────────

/// Destroy every overlay when leaving `Playing`.
///
/// `shutdown` cancels pending teardown timers and releases pause / input
/// holds synchronously, so nothing fires into a despawned controller.
pub fn shutdown_pause_overlays(
    mut overlays: Query<(Entity, &mut PauseOverlay)>,
    mut params: OverlayParams,
) {
    for (owner, mut overlay) in overlays.iter_mut() {
        let PauseOverlay {
            controller,
            surface,
        } = &mut *overlay;
        let mut host = BevyOverlayHost::new(owner, surface, &mut params);
        controller.shutdown(&mut host);
        params.commands.entity(owner).despawn();
    }
    params.routing.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn released_click_is_not_a_hover() {
        assert_eq!(
            trigger_for_change(Interaction::Pressed, Interaction::Hovered),
            None
        );
    }

    #[test]
    fn entering_from_none_is_a_hover() {
        assert_eq!(
            trigger_for_change(Interaction::None, Interaction::Hovered),
            Some(TriggerEvent::Hovered)
        );
    }

    #[test]
    fn press_is_a_click_from_any_previous_state() {
        for previous in [Interaction::None, Interaction::Hovered] {
            assert_eq!(
                trigger_for_change(previous, Interaction::Pressed),
                Some(TriggerEvent::Clicked),
                "from {previous:?}"
            );
        }
        assert_eq!(trigger_for_change(Interaction::Hovered, Interaction::None), None);
    }
}

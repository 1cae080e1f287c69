use bevy::prelude::*;

use crate::overlay::ActionSlot;

pub(super) fn start_bg() -> Color {
    Color::srgb(0.08, 0.36, 0.14)
}
pub(super) fn start_border() -> Color {
    Color::srgb(0.18, 0.72, 0.28)
}
pub(super) fn start_text() -> Color {
    Color::srgb(0.75, 1.0, 0.80)
}
pub(super) fn quit_bg() -> Color {
    Color::srgb(0.28, 0.06, 0.06)
}
pub(super) fn quit_border() -> Color {
    Color::srgb(0.60, 0.12, 0.12)
}
pub(super) fn quit_text() -> Color {
    Color::srgb(1.0, 0.65, 0.65)
}
pub(super) fn title_color() -> Color {
    Color::srgb(0.95, 0.88, 0.45)
}
pub(super) fn subtitle_color() -> Color {
    Color::srgb(0.55, 0.55, 0.65)
}
pub(super) fn hint_color() -> Color {
    Color::srgb(0.28, 0.28, 0.35)
}
pub(super) fn card_bg() -> Color {
    Color::srgb(0.04, 0.04, 0.07)
}
pub(super) fn card_border() -> Color {
    Color::srgb(0.30, 0.30, 0.46)
}
fn settings_bg() -> Color {
    Color::srgb(0.10, 0.18, 0.36)
}
fn settings_border() -> Color {
    Color::srgb(0.22, 0.44, 0.78)
}
fn settings_text() -> Color {
    Color::srgb(0.65, 0.80, 1.0)
}
fn neutral_bg() -> Color {
    Color::srgb(0.12, 0.12, 0.18)
}
fn neutral_text() -> Color {
    Color::srgb(0.65, 0.65, 0.80)
}

/// (background, border, text) for a pause-menu action button.
pub(super) fn slot_palette(slot: ActionSlot) -> (Color, Color, Color) {
    match slot {
        ActionSlot::Resume => (start_bg(), start_border(), start_text()),
        ActionSlot::Settings => (settings_bg(), settings_border(), settings_text()),
        ActionSlot::MainMenu => (neutral_bg(), card_border(), neutral_text()),
        ActionSlot::Quit => (quit_bg(), quit_border(), quit_text()),
    }
}

pub(super) fn spacer(parent: &mut ChildSpawnerCommands<'_>, px: f32) {
    parent.spawn(Node {
        height: Val::Px(px),
        ..default()
    });
}

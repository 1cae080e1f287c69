use super::*;

/// Spawn the full-screen main menu.
///
/// Layout:
/// ```text
/// ┌─────────────────────────────────────────────┐
/// │              DRIFT FIELD                    │
/// │     Press ESC in game to pause              │
/// │                                             │
/// │         [ START GAME ]                      │
/// │            [ QUIT ]                         │
/// └─────────────────────────────────────────────┘
/// ```
pub fn setup_main_menu(mut commands: Commands) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                flex_direction: FlexDirection::Column,
                ..default()
            },
            BackgroundColor(Color::BLACK),
            MainMenuRoot,
        ))
        .with_children(|root| {
            root.spawn((
                Text::new("DRIFT FIELD"),
                TextFont {
                    font_size: 56.0,
                    ..default()
                },
                TextColor(title_color()),
            ));

            spacer(root, 10.0);

            root.spawn((
                Text::new("Press ESC (or Start) in game to pause"),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(subtitle_color()),
            ));

            spacer(root, 52.0);

            menu_button(root, "START GAME", start_bg(), start_border(), start_text())
                .insert(MenuStartButton);

            spacer(root, 14.0);

            menu_button(root, "QUIT", quit_bg(), quit_border(), quit_text())
                .insert(MenuQuitButton);
        });
}

fn menu_button<'a>(
    parent: &'a mut ChildSpawnerCommands<'_>,
    label: &str,
    bg: Color,
    border: Color,
    text: Color,
) -> EntityCommands<'a> {
    let mut button = parent.spawn((
        Button,
        Node {
            width: Val::Px(220.0),
            height: Val::Px(50.0),
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            border: UiRect::all(Val::Px(2.0)),
            ..default()
        },
        BackgroundColor(bg),
        BorderColor::all(border),
    ));
    button.with_children(|btn| {
        btn.spawn((
            Text::new(label),
            TextFont {
                font_size: 18.0,
                ..default()
            },
            TextColor(text),
        ));
    });
    button
}

/// Recursively despawn all main-menu entities.
pub fn cleanup_main_menu(mut commands: Commands, query: Query<Entity, With<MainMenuRoot>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}

/// Handle Start Game and Quit button presses.
///
/// - **Start Game** → transitions to [`GameState::Playing`].
/// - **Quit** → sends [`AppExit`] to gracefully shut down.
#[allow(clippy::type_complexity)]
pub fn menu_button_system(
    start_query: Query<(&Interaction, &Children), (Changed<Interaction>, With<MenuStartButton>)>,
    quit_query: Query<(&Interaction, &Children), (Changed<Interaction>, With<MenuQuitButton>)>,
    mut btn_text: Query<&mut TextColor>,
    mut next_state: ResMut<NextState<GameState>>,
    mut exit: MessageWriter<AppExit>,
) {
    for (interaction, children) in start_query.iter() {
        match interaction {
            Interaction::Pressed => next_state.set(GameState::Playing),
            Interaction::Hovered => tint(children, &mut btn_text, Color::WHITE),
            Interaction::None => tint(children, &mut btn_text, start_text()),
        }
    }

    for (interaction, children) in quit_query.iter() {
        match interaction {
            Interaction::Pressed => {
                exit.write(AppExit::Success);
            }
            Interaction::Hovered => tint(children, &mut btn_text, Color::WHITE),
            Interaction::None => tint(children, &mut btn_text, quit_text()),
        }
    }
}

fn tint(children: &Children, btn_text: &mut Query<&mut TextColor>, color: Color) {
    for child in children.iter() {
        if let Ok(mut text) = btn_text.get_mut(child) {
            *text = TextColor(color);
        }
    }
}

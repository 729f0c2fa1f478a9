use bevy::prelude::*;

use super::common::*;
use super::components::*;
use crate::game::{ActiveSession, Draw, PlayerWon, RestartPressed, StateUpdated};

pub fn create(mut commands: Commands, session: Res<ActiveSession>) {
    let state = session.state();
    debug!("create game screen");
    commands
        .spawn((root_node(), BackgroundColor(BACKGROUND_COLOR)))
        .with_children(|builder| {
            builder.spawn((
                Text::new(TITLE),
                text_font(TITLE_FONT_SIZE),
                TextColor(BOARD_BORDER_COLOR),
            ));
            builder.spawn((
                Text::new(state.status_text()),
                text_font(STATUS_FONT_SIZE),
                TextColor(TEXT_COLOR),
                StatusLabel,
            ));
            builder.spawn(BoardSlotBundle::default());
            builder
                .spawn(ResultBoxBundle::new(state.show_restart()))
                .with_children(|result| {
                    result.spawn((
                        Text::new(state.banner().unwrap_or_default()),
                        text_font(BANNER_FONT_SIZE),
                        TextColor(TEXT_COLOR),
                        Banner,
                    ));
                    result.spawn(RestartButtonBundle::default()).with_child((
                        Text::new(RESTART_LABEL),
                        text_font(BUTTON_FONT_SIZE),
                        TextColor(TEXT_COLOR),
                    ));
                });
        });
}

pub fn update_status(
    mut updated: EventReader<StateUpdated>,
    mut label: Query<&mut Text, With<StatusLabel>>,
) {
    let Some(event) = updated.read().last() else {
        return;
    };
    for mut text in label.iter_mut() {
        **text = event.status_text();
    }
}

fn show_result(
    text: String,
    result_box: &mut Query<&mut Visibility, With<ResultBox>>,
    banner: &mut Query<&mut Text, With<Banner>>,
) {
    for mut visibility in result_box.iter_mut() {
        *visibility = result_visibility(true);
    }
    for mut banner_text in banner.iter_mut() {
        **banner_text = text.clone();
    }
}

/// Receive [`PlayerWon`] event and show the winner with the restart button.
pub fn set_winner(
    mut player_won: EventReader<PlayerWon>,
    session: Res<ActiveSession>,
    mut result_box: Query<&mut Visibility, With<ResultBox>>,
    mut banner: Query<&mut Text, With<Banner>>,
) {
    for event in player_won.read() {
        debug!("show winner {}", **event);
        let text = session.state().banner().unwrap_or_default();
        show_result(text, &mut result_box, &mut banner);
    }
}

/// Receive [`Draw`] event and show the draw with the restart button.
pub fn set_draw(
    mut draw: EventReader<Draw>,
    session: Res<ActiveSession>,
    mut result_box: Query<&mut Visibility, With<ResultBox>>,
    mut banner: Query<&mut Text, With<Banner>>,
) {
    if draw.read().count() == 0 {
        return;
    }
    debug!("show draw");
    let text = session.state().banner().unwrap_or_default();
    show_result(text, &mut result_box, &mut banner);
}

/// Hides the result once a new game starts.
pub fn clear_result(
    mut updated: EventReader<StateUpdated>,
    mut result_box: Query<&mut Visibility, With<ResultBox>>,
    mut banner: Query<&mut Text, With<Banner>>,
) {
    let Some(event) = updated.read().last() else {
        return;
    };
    if event.show_restart() {
        return;
    }
    for mut visibility in result_box.iter_mut() {
        *visibility = result_visibility(false);
    }
    for mut text in banner.iter_mut() {
        text.clear();
    }
}

pub fn handle_restart_button(
    mut buttons: Query<
        (&Interaction, &mut BackgroundColor),
        (Changed<Interaction>, With<RestartButton>),
    >,
    mut pressed: EventWriter<RestartPressed>,
) {
    for (interaction, mut background) in buttons.iter_mut() {
        match interaction {
            Interaction::Pressed => {
                debug!("restart button pressed");
                pressed.send(RestartPressed);
            }
            Interaction::Hovered => *background = BUTTON_HOVER_COLOR.into(),
            Interaction::None => *background = BUTTON_COLOR.into(),
        }
    }
}

pub fn handle_keyboard(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut pressed: EventWriter<RestartPressed>,
) {
    if keyboard_input.just_pressed(KeyCode::KeyR) {
        debug!("restart key pressed");
        pressed.send(RestartPressed);
    }
}

use bevy::prelude::*;
use tic_tac_toe::game::tic_tac_toe::{BOARD_SIZE, CELL_COUNT};

use super::components::{board_node, TileBundle, TileLabelBundle};
use super::{tile_color, Tile, TileLabel, TilePressed};
use crate::game::{ActiveSession, PlayerWon, StateUpdated};
use crate::interface::common::{BOARD_BORDER_COLOR, WIN_HIGHLIGHT_COLOR};
use crate::interface::BoardSlot;

/// Fills a freshly spawned [`BoardSlot`] with the 3x3 grid of tiles.
pub fn create(
    mut commands: Commands,
    slot: Query<Entity, Added<BoardSlot>>,
    session: Res<ActiveSession>,
) {
    for entity in slot.iter() {
        debug!("create board in {}", entity);
        let state = session.state();
        commands.entity(entity).with_children(|builder| {
            builder.spawn(board_node()).with_children(|board| {
                for index in 0..CELL_COUNT {
                    let cell = state.cell(index).unwrap_or_default();
                    board
                        .spawn(TileBundle::new(index, cell))
                        .with_child(TileLabelBundle::new(index, cell));
                }
            });
        });
    }
}

pub fn handle_tile_press(
    tiles: Query<(&Interaction, &Tile), (Changed<Interaction>, With<Button>)>,
    mut pressed: EventWriter<TilePressed>,
) {
    for (interaction, tile) in tiles.iter() {
        if *interaction == Interaction::Pressed {
            debug!("tile {} pressed", **tile);
            pressed.send(TilePressed::new(**tile));
        }
    }
}

/// Repaints tiles from the latest state. Borders go back to the board color,
/// the winning line is painted by [`highlight_winning_line`].
pub fn update_tiles(
    mut updated: EventReader<StateUpdated>,
    mut tiles: Query<(&Tile, &mut BackgroundColor, &mut BorderColor)>,
    mut labels: Query<(&TileLabel, &mut Text)>,
) {
    let Some(event) = updated.read().last() else {
        return;
    };
    for (tile, mut background, mut border) in tiles.iter_mut() {
        let cell = event.cell(**tile).unwrap_or_default();
        *background = tile_color(cell).into();
        *border = BOARD_BORDER_COLOR.into();
    }
    for (label, mut text) in labels.iter_mut() {
        **text = event.cell(**label).unwrap_or_default().to_string();
    }
}

/// Receive [`PlayerWon`] event and highlight the tiles of the won line.
pub fn highlight_winning_line(
    mut player_won: EventReader<PlayerWon>,
    session: Res<ActiveSession>,
    mut tiles: Query<(&Tile, &mut BorderColor)>,
) {
    for event in player_won.read() {
        let Some(line) = session.state().winning_line() else {
            warn!("player {} won without a winning line", **event);
            continue;
        };
        let line = line.map(|pos| pos.linear(BOARD_SIZE));
        debug!("highlight tiles {:?}", line);
        for (tile, mut border) in tiles.iter_mut() {
            if line.contains(&**tile) {
                *border = WIN_HIGHLIGHT_COLOR.into();
            }
        }
    }
}

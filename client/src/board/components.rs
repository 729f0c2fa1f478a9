use bevy::prelude::*;
use tic_tac_toe::game::{Cell, Mark};

use super::{BOARD_WIDTH, TILE_BORDER_WIDTH, TILE_FONT_SIZE, TILE_SIZE};
use crate::interface::common::{
    BOARD_BORDER_COLOR, EMPTY_TILE_COLOR, O_COLOR, TEXT_COLOR, X_COLOR,
};

/// Board tile button, holds the row-major index of its cell.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Component, Deref)]
pub struct Tile(usize);

/// Text inside a tile.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Component, Deref)]
pub struct TileLabel(usize);

pub fn tile_color(cell: Cell) -> Color {
    match cell.mark() {
        Some(Mark::X) => X_COLOR,
        Some(Mark::O) => O_COLOR,
        None => EMPTY_TILE_COLOR,
    }
}

pub fn board_node() -> Node {
    Node {
        display: Display::Grid,
        width: Val::Px(BOARD_WIDTH),
        height: Val::Px(BOARD_WIDTH),
        grid_template_columns: RepeatedGridTrack::px(3, TILE_SIZE),
        grid_template_rows: RepeatedGridTrack::px(3, TILE_SIZE),
        ..default()
    }
}

#[derive(Bundle)]
pub struct TileBundle {
    button: Button,
    node: Node,
    background: BackgroundColor,
    border: BorderColor,
    tile: Tile,
}

impl TileBundle {
    pub fn new(index: usize, cell: Cell) -> Self {
        Self {
            button: Button,
            node: Node {
                width: Val::Px(TILE_SIZE),
                height: Val::Px(TILE_SIZE),
                border: UiRect::all(Val::Px(TILE_BORDER_WIDTH)),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            background: tile_color(cell).into(),
            border: BOARD_BORDER_COLOR.into(),
            tile: Tile(index),
        }
    }
}

#[derive(Bundle)]
pub struct TileLabelBundle {
    text: Text,
    font: TextFont,
    color: TextColor,
    label: TileLabel,
}

impl TileLabelBundle {
    pub fn new(index: usize, cell: Cell) -> Self {
        Self {
            text: Text::new(cell.to_string()),
            font: TextFont {
                font_size: TILE_FONT_SIZE,
                ..default()
            },
            color: TEXT_COLOR.into(),
            label: TileLabel(index),
        }
    }
}

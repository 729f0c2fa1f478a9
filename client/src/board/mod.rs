mod components;
mod events;
mod systems;

use bevy::prelude::*;

use crate::game::SessionUpdate;
use systems::*;

pub use components::{tile_color, Tile, TileLabel};
pub use events::TilePressed;

pub const TILE_SIZE: f32 = 100.0;
pub const BOARD_WIDTH: f32 = TILE_SIZE * 3.0;
pub const TILE_BORDER_WIDTH: f32 = 2.0;
pub const TILE_FONT_SIZE: f32 = 56.0;

pub struct BoardPlugin;

impl Plugin for BoardPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<TilePressed>().add_systems(
            Update,
            (
                create,
                handle_tile_press.before(SessionUpdate),
                (update_tiles, highlight_winning_line)
                    .chain()
                    .after(SessionUpdate),
            ),
        );
    }
}

mod events;
mod resources;
mod systems;

use bevy::prelude::*;

use crate::board::TilePressed;
use systems::*;

pub use events::{Draw, PlayerWon, RestartPressed, StateUpdated};
pub use resources::ActiveSession;

/// Systems that feed input into the [`ActiveSession`].
/// Everything that renders the session state runs after this set.
#[derive(Clone, Debug, Eq, Hash, PartialEq, SystemSet)]
pub struct SessionUpdate;

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ActiveSession>()
            .add_event::<TilePressed>()
            .add_event::<RestartPressed>()
            .add_event::<StateUpdated>()
            .add_event::<PlayerWon>()
            .add_event::<Draw>()
            .add_systems(Update, (apply_tap, restart).chain().in_set(SessionUpdate));
    }
}

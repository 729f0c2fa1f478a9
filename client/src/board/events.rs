use bevy::prelude::*;

/// Event emitted when a board tile is clicked or touched.
/// Contains the row-major index of the tile.
#[derive(Clone, Copy, Debug, Event)]
pub struct TilePressed {
    index: usize,
}

impl TilePressed {
    pub fn new(index: usize) -> Self {
        Self { index }
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

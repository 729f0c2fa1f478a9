use bevy::prelude::*;

use super::common::{
    column_node, BUTTON_COLOR, BUTTON_HEIGHT, BUTTON_WIDTH, RESULT_BOX_MIN_HEIGHT,
};
use crate::board::BOARD_WIDTH;

/// Node the board plugin fills with tiles once it is spawned.
#[derive(Debug, Component)]
pub struct BoardSlot;

/// Text with the player to move.
#[derive(Debug, Component)]
pub struct StatusLabel;

/// Container with the result banner and the restart button.
/// Visible only when the game is finished.
#[derive(Debug, Component)]
pub struct ResultBox;

#[derive(Debug, Component)]
pub struct Banner;

#[derive(Debug, Component)]
pub struct RestartButton;

#[derive(Debug, Bundle)]
pub struct BoardSlotBundle {
    node: Node,
    slot: BoardSlot,
}

impl Default for BoardSlotBundle {
    fn default() -> Self {
        Self {
            node: Node {
                width: Val::Px(BOARD_WIDTH),
                height: Val::Px(BOARD_WIDTH),
                margin: UiRect::vertical(Val::Px(20.0)),
                ..default()
            },
            slot: BoardSlot,
        }
    }
}

#[derive(Debug, Bundle)]
pub struct ResultBoxBundle {
    node: Node,
    visibility: Visibility,
    result_box: ResultBox,
}

impl ResultBoxBundle {
    pub fn new(visible: bool) -> Self {
        Self {
            node: Node {
                min_height: Val::Px(RESULT_BOX_MIN_HEIGHT),
                row_gap: Val::Px(12.0),
                ..column_node()
            },
            visibility: result_visibility(visible),
            result_box: ResultBox,
        }
    }
}

#[derive(Debug, Bundle)]
pub struct RestartButtonBundle {
    button: Button,
    node: Node,
    background: BackgroundColor,
    restart: RestartButton,
}

impl Default for RestartButtonBundle {
    fn default() -> Self {
        Self {
            button: Button,
            node: Node {
                width: Val::Px(BUTTON_WIDTH),
                height: Val::Px(BUTTON_HEIGHT),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            background: BUTTON_COLOR.into(),
            restart: RestartButton,
        }
    }
}

pub fn result_visibility(visible: bool) -> Visibility {
    if visible {
        Visibility::Inherited
    } else {
        Visibility::Hidden
    }
}

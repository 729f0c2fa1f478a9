use bevy::prelude::*;

pub const TITLE: &str = "Tic Tac Toe";
pub const RESTART_LABEL: &str = "Restart Game";

pub const TITLE_FONT_SIZE: f32 = 40.0;
pub const STATUS_FONT_SIZE: f32 = 24.0;
pub const BANNER_FONT_SIZE: f32 = 32.0;
pub const BUTTON_FONT_SIZE: f32 = 22.0;
pub const BUTTON_WIDTH: f32 = 220.0;
pub const BUTTON_HEIGHT: f32 = 50.0;
pub const RESULT_BOX_MIN_HEIGHT: f32 = 120.0;

pub const BACKGROUND_COLOR: Color = Color::BLACK;
pub const TEXT_COLOR: Color = Color::WHITE;
// green-400
pub const BOARD_BORDER_COLOR: Color = Color::srgb(0.290, 0.871, 0.502);
// blue-500
pub const X_COLOR: Color = Color::srgb(0.231, 0.510, 0.965);
// red-500
pub const O_COLOR: Color = Color::srgb(0.937, 0.267, 0.267);
// gray-800
pub const EMPTY_TILE_COLOR: Color = Color::srgb(0.122, 0.161, 0.216);
// yellow-400
pub const WIN_HIGHLIGHT_COLOR: Color = Color::srgb(0.980, 0.800, 0.082);
// green-700
pub const BUTTON_COLOR: Color = Color::srgb(0.082, 0.502, 0.239);
// green-600
pub const BUTTON_HOVER_COLOR: Color = Color::srgb(0.086, 0.639, 0.290);

pub fn root_node() -> Node {
    Node {
        flex_direction: FlexDirection::Column,
        align_items: AlignItems::Center,
        justify_content: JustifyContent::Center,
        height: Val::Percent(100.0),
        width: Val::Percent(100.0),
        ..default()
    }
}

pub fn column_node() -> Node {
    Node {
        flex_direction: FlexDirection::Column,
        align_items: AlignItems::Center,
        justify_content: JustifyContent::Center,
        ..default()
    }
}

pub fn text_font(font_size: f32) -> TextFont {
    TextFont {
        font_size,
        ..default()
    }
}

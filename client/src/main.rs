mod board;
mod confetti;
mod game;
mod interface;
mod settings;

use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::window::WindowResolution;
use clap::Parser;

use crate::board::BoardPlugin;
use crate::confetti::ConfettiPlugin;
use crate::game::GamePlugin;
use crate::interface::common::{BACKGROUND_COLOR, TITLE};
use crate::interface::InterfacePlugin;
use crate::settings::{Args, Settings, SettingsError};

fn init_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

fn main() -> Result<(), SettingsError> {
    let settings = Settings::try_from(Args::parse())?;
    let (width, height) = settings.window_size();

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: TITLE.to_string(),
                        resolution: WindowResolution::new(width, height),
                        ..default()
                    }),
                    ..default()
                })
                .set(LogPlugin {
                    filter: settings.log_filter().to_string(),
                    ..default()
                }),
        )
        .insert_resource(ClearColor(BACKGROUND_COLOR))
        .insert_resource(settings)
        .add_plugins((GamePlugin, BoardPlugin, InterfacePlugin, ConfettiPlugin))
        .add_systems(Startup, init_camera)
        .run();
    Ok(())
}

pub mod common;
mod components;
mod systems;

use bevy::prelude::*;

use crate::game::SessionUpdate;
use systems::*;

pub use components::BoardSlot;

/// Game screen around the board: title, status line, result banner and restart button.
pub struct InterfacePlugin;

impl Plugin for InterfacePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, create).add_systems(
            Update,
            (
                (handle_restart_button, handle_keyboard).before(SessionUpdate),
                (update_status, clear_result, set_winner, set_draw).after(SessionUpdate),
            ),
        );
    }
}

#[cfg(test)]
mod test {
    use bevy::ecs::query::QueryFilter;
    use tic_tac_toe::game::Mark;

    use super::components::{Banner, RestartButton, ResultBox, StatusLabel};
    use super::*;
    use crate::board::{BoardPlugin, Tile, TileLabel, TilePressed};
    use crate::game::{ActiveSession, GamePlugin};

    fn app() -> App {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, GamePlugin, BoardPlugin, InterfacePlugin))
            .init_resource::<ButtonInput<KeyCode>>();
        app.update();
        app
    }

    fn tap(app: &mut App, index: usize) {
        app.world_mut().send_event(TilePressed::new(index));
        app.update();
    }

    fn text<F: QueryFilter>(app: &mut App) -> String {
        let world = app.world_mut();
        world.query_filtered::<&Text, F>().single(world).0.clone()
    }

    fn result_visibility(app: &mut App) -> Visibility {
        let world = app.world_mut();
        *world
            .query_filtered::<&Visibility, With<ResultBox>>()
            .single(world)
    }

    #[test]
    fn test_initial_screen() {
        let mut app = app();
        assert_eq!(text::<With<StatusLabel>>(&mut app), "Current Player: X");
        assert_eq!(text::<With<Banner>>(&mut app), "");
        assert_eq!(result_visibility(&mut app), Visibility::Hidden);

        let world = app.world_mut();
        assert_eq!(world.query::<&Tile>().iter(world).count(), 9);
        assert!(world
            .query::<&Text>()
            .iter(world)
            .any(|text| text.0 == "Restart Game"));
    }

    #[test]
    fn test_win_shows_banner_and_restart() {
        let mut app = app();
        tap(&mut app, 0);
        assert_eq!(text::<With<StatusLabel>>(&mut app), "Current Player: O");

        for index in [3, 1, 4, 2] {
            tap(&mut app, index);
        }
        assert_eq!(text::<With<Banner>>(&mut app), "Winner: X");
        assert_eq!(text::<With<StatusLabel>>(&mut app), "Current Player: X");
        assert_eq!(result_visibility(&mut app), Visibility::Inherited);

        let world = app.world_mut();
        let mut labels: Vec<(usize, String)> = world
            .query::<(&TileLabel, &Text)>()
            .iter(world)
            .map(|(label, text)| (**label, text.0.clone()))
            .collect();
        labels.sort();
        itertools::assert_equal(
            labels.into_iter().map(|(_, text)| text),
            ["X", "X", "X", "O", "O", " ", " ", " ", " "].map(String::from),
        );
    }

    #[test]
    fn test_draw_banner() {
        let mut app = app();
        for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            tap(&mut app, index);
        }
        assert_eq!(text::<With<Banner>>(&mut app), "It's a Draw!");
        assert_eq!(result_visibility(&mut app), Visibility::Inherited);
    }

    #[test]
    fn test_restart_key() {
        let mut app = app();
        for index in [0, 3, 1, 4, 2] {
            tap(&mut app, index);
        }
        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::KeyR);
        app.update();

        let state = app.world().resource::<ActiveSession>().state().clone();
        assert_eq!(state.count(Mark::X), 0);
        assert_eq!(text::<With<Banner>>(&mut app), "");
        assert_eq!(result_visibility(&mut app), Visibility::Hidden);
    }

    #[test]
    fn test_restart_button() {
        let mut app = app();
        for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            tap(&mut app, index);
        }
        assert_eq!(result_visibility(&mut app), Visibility::Inherited);

        let world = app.world_mut();
        let button = world
            .query_filtered::<Entity, With<RestartButton>>()
            .single(world);
        world.entity_mut(button).insert(Interaction::Pressed);
        app.update();

        let state = app.world().resource::<ActiveSession>().state().clone();
        assert_eq!(state, tic_tac_toe::game::reset());
        assert_eq!(text::<With<StatusLabel>>(&mut app), "Current Player: X");
        assert_eq!(text::<With<Banner>>(&mut app), "");
        assert_eq!(result_visibility(&mut app), Visibility::Hidden);
    }
}

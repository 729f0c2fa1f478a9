mod components;
mod launcher;
mod systems;

use bevy::prelude::*;

use crate::game::SessionUpdate;
use crate::interface::common::{BOARD_BORDER_COLOR, O_COLOR, WIN_HIGHLIGHT_COLOR, X_COLOR};
use systems::*;

pub use components::{ConfettiBurst, ConfettiParticle};
pub use launcher::{ConfettiCommand, ConfettiLauncher};

pub const CONFETTI_COLORS: [Color; 6] = [
    X_COLOR,
    O_COLOR,
    BOARD_BORDER_COLOR,
    WIN_HIGHLIGHT_COLOR,
    // pink-500
    Color::srgb(0.925, 0.282, 0.600),
    // purple-500
    Color::srgb(0.659, 0.333, 0.969),
];

pub struct ConfettiPlugin;

impl Plugin for ConfettiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (launch.after(SessionUpdate), update_particles).chain(),
        );
    }
}

#[cfg(test)]
mod test {
    use bevy::window::PrimaryWindow;

    use super::*;
    use crate::board::TilePressed;
    use crate::game::{GamePlugin, RestartPressed};
    use crate::settings::Settings;

    fn app() -> App {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, GamePlugin, ConfettiPlugin))
            .insert_resource(Settings::default());
        app.world_mut().spawn((Window::default(), PrimaryWindow));
        app
    }

    fn count<C: Component>(app: &mut App) -> usize {
        let world = app.world_mut();
        world.query_filtered::<(), With<C>>().iter(world).count()
    }

    fn win(app: &mut App) {
        for index in [0, 3, 1, 4, 2] {
            app.world_mut().send_event(TilePressed::new(index));
            app.update();
        }
    }

    #[test]
    fn test_win_launches_confetti() {
        let mut app = app();
        win(&mut app);
        app.update();

        assert_eq!(count::<ConfettiBurst>(&mut app), 1);
        assert_eq!(
            count::<ConfettiParticle>(&mut app),
            Settings::default().confetti_particles()
        );
    }

    #[test]
    fn test_restart_clears_confetti() {
        let mut app = app();
        win(&mut app);
        app.update();

        app.world_mut().send_event(RestartPressed);
        app.update();
        app.update();
        assert_eq!(count::<ConfettiBurst>(&mut app), 0);
        assert_eq!(count::<ConfettiParticle>(&mut app), 0);
    }
}

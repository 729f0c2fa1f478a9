use std::f32::consts::TAU;

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use rand::Rng;

use super::components::{ConfettiBurstBundle, ConfettiParticleBundle};
use super::{ConfettiBurst, ConfettiCommand, ConfettiParticle, CONFETTI_COLORS};
use crate::game::ActiveSession;
use crate::settings::Settings;

/// Picks up the command queued by the session's [`super::ConfettiLauncher`].
/// Any running burst is cleared first, so a new burst always starts from the top.
pub fn launch(
    mut commands: Commands,
    mut session: ResMut<ActiveSession>,
    settings: Res<Settings>,
    window: Query<&Window, With<PrimaryWindow>>,
    bursts: Query<Entity, With<ConfettiBurst>>,
) {
    let Some(command) = session.celebration_mut().take() else {
        return;
    };
    for entity in bursts.iter() {
        commands.entity(entity).despawn_recursive();
    }
    if command == ConfettiCommand::Stop {
        debug!("confetti stopped");
        return;
    }
    let Ok(window) = window.get_single() else {
        error!("failed to get primary window");
        return;
    };
    let (width, height) = (window.width(), window.height());
    if width <= 0.0 || height <= 0.0 {
        warn!("window has no area, skip confetti");
        return;
    }
    info!("launch {} confetti particles", settings.confetti_particles());

    let mut rng = rand::thread_rng();
    commands
        .spawn(ConfettiBurstBundle::new(settings.confetti_duration()))
        .with_children(|builder| {
            for _ in 0..settings.confetti_particles() {
                let particle = ConfettiParticle::new(
                    Vec2::new(rng.gen_range(0.0..width), rng.gen_range(-0.3 * height..0.0)),
                    Vec2::new(rng.gen_range(-120.0..120.0), rng.gen_range(-200.0..60.0)),
                    rng.gen_range(-6.0..6.0),
                    rng.gen_range(0.0..TAU),
                );
                let size = Vec2::new(rng.gen_range(6.0..12.0), rng.gen_range(10.0..18.0));
                let color = CONFETTI_COLORS[rng.gen_range(0..CONFETTI_COLORS.len())];
                builder.spawn(ConfettiParticleBundle::new(particle, size, color));
            }
        });
}

pub fn update_particles(
    mut commands: Commands,
    time: Res<Time>,
    mut bursts: Query<(Entity, &mut ConfettiBurst)>,
    mut particles: Query<(&mut ConfettiParticle, &mut Node, &mut Transform)>,
) {
    for (entity, mut burst) in bursts.iter_mut() {
        if burst.tick(time.delta()).finished() {
            debug!("confetti burst {} finished", entity);
            commands.entity(entity).despawn_recursive();
        }
    }
    let dt = time.delta_secs();
    for (mut particle, mut node, mut transform) in particles.iter_mut() {
        particle.step(dt);
        node.left = Val::Px(particle.position().x);
        node.top = Val::Px(particle.position().y);
        transform.rotation = Quat::from_rotation_z(particle.angle());
    }
}

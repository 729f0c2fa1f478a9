use std::time::Duration;

use bevy::prelude::*;

pub const GRAVITY: f32 = 420.0;
pub const DRAG: f32 = 0.8;
pub const FLUTTER_FREQUENCY: f32 = 4.0;
pub const FLUTTER_AMPLITUDE: f32 = 60.0;
pub const CONFETTI_Z_INDEX: i32 = 100;

/// Root of one confetti burst, despawned with all its particles when the timer runs out.
#[derive(Debug, Component, Deref, DerefMut)]
pub struct ConfettiBurst(Timer);

/// A single piece of confetti, positioned in window coordinates (y grows downwards).
#[derive(Clone, Debug, PartialEq, Component)]
pub struct ConfettiParticle {
    position: Vec2,
    velocity: Vec2,
    angle: f32,
    spin: f32,
    phase: f32,
}

impl ConfettiParticle {
    pub fn new(position: Vec2, velocity: Vec2, spin: f32, phase: f32) -> Self {
        Self {
            position,
            velocity,
            angle: 0.0,
            spin,
            phase,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Advances the particle by `dt` seconds: gravity pulls it down, drag slows it,
    /// and a sine flutter sways it sideways.
    pub fn step(&mut self, dt: f32) {
        self.velocity.y += GRAVITY * dt;
        self.velocity *= (1.0 - DRAG * dt).max(0.0);
        self.phase += FLUTTER_FREQUENCY * dt;
        let sway = Vec2::new(self.phase.sin() * FLUTTER_AMPLITUDE, 0.0);
        self.position += (self.velocity + sway) * dt;
        self.angle += self.spin * dt;
    }
}

#[derive(Debug, Bundle)]
pub struct ConfettiBurstBundle {
    node: Node,
    z_index: GlobalZIndex,
    burst: ConfettiBurst,
}

impl ConfettiBurstBundle {
    pub fn new(duration: Duration) -> Self {
        Self {
            node: Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                top: Val::Px(0.0),
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                ..default()
            },
            z_index: GlobalZIndex(CONFETTI_Z_INDEX),
            burst: ConfettiBurst(Timer::new(duration, TimerMode::Once)),
        }
    }
}

#[derive(Debug, Bundle)]
pub struct ConfettiParticleBundle {
    node: Node,
    background: BackgroundColor,
    particle: ConfettiParticle,
}

impl ConfettiParticleBundle {
    pub fn new(particle: ConfettiParticle, size: Vec2, color: Color) -> Self {
        Self {
            node: Node {
                position_type: PositionType::Absolute,
                left: Val::Px(particle.position().x),
                top: Val::Px(particle.position().y),
                width: Val::Px(size.x),
                height: Val::Px(size.y),
                ..default()
            },
            background: color.into(),
            particle,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_particle_falls() {
        let mut particle = ConfettiParticle::new(Vec2::new(100.0, 0.0), Vec2::ZERO, 2.0, 0.0);
        let mut last_y = particle.position().y;
        for _ in 0..30 {
            particle.step(1.0 / 60.0);
            assert!(particle.position().y > last_y);
            last_y = particle.position().y;
        }
        assert!(particle.velocity.y > 0.0);
        assert!((particle.angle() - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_upward_launch_turns_around() {
        let mut particle =
            ConfettiParticle::new(Vec2::new(0.0, 500.0), Vec2::new(0.0, -300.0), 0.0, 0.0);
        particle.step(0.1);
        assert!(particle.position().y < 500.0);
        for _ in 0..20 {
            particle.step(0.1);
        }
        assert!(particle.velocity.y > 0.0);
    }

    #[test]
    fn test_huge_step_does_not_reverse_velocity() {
        let mut particle = ConfettiParticle::new(Vec2::ZERO, Vec2::new(50.0, 0.0), 0.0, 0.0);
        particle.step(10.0);
        assert_eq!(particle.velocity, Vec2::ZERO);
    }
}

use std::time::Duration;

use bevy::prelude::Resource;
use clap::Parser;

pub const DEFAULT_LOG_FILTER: &str = "info,wgpu=error,naga=warn";

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum SettingsError {
    #[error("window size must be positive (found: {width}x{height})")]
    InvalidWindowSize { width: f32, height: f32 },
    #[error("confetti needs at least one particle")]
    NoConfettiParticles,
    #[error("confetti duration must be positive")]
    ZeroConfettiDuration,
}

/// Command line arguments, every flag can also be set through the environment.
#[derive(Debug, Parser)]
#[command(version, about = "Tic-tac-toe on a single screen")]
pub struct Args {
    /// Window width in logical pixels
    #[arg(long, env = "TTT_WIDTH", default_value_t = 480.0)]
    width: f32,
    /// Window height in logical pixels
    #[arg(long, env = "TTT_HEIGHT", default_value_t = 800.0)]
    height: f32,
    /// How long confetti keeps falling after a win
    #[arg(long, env = "TTT_CONFETTI_DURATION_MS", default_value_t = 3000)]
    confetti_duration_ms: u64,
    /// Number of confetti pieces in a burst
    #[arg(long, env = "TTT_CONFETTI_PARTICLES", default_value_t = 150)]
    confetti_particles: usize,
    /// Log filter in `RUST_LOG` format
    #[arg(long, env = "TTT_LOG_FILTER", default_value = DEFAULT_LOG_FILTER)]
    log_filter: String,
}

#[derive(Clone, Debug, Resource)]
pub struct Settings {
    window_size: (f32, f32),
    confetti_duration: Duration,
    confetti_particles: usize,
    log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_size: (480.0, 800.0),
            confetti_duration: Duration::from_millis(3000),
            confetti_particles: 150,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl TryFrom<Args> for Settings {
    type Error = SettingsError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        if !(args.width > 0.0 && args.height > 0.0) {
            return Err(SettingsError::InvalidWindowSize {
                width: args.width,
                height: args.height,
            });
        }
        if args.confetti_particles == 0 {
            return Err(SettingsError::NoConfettiParticles);
        }
        if args.confetti_duration_ms == 0 {
            return Err(SettingsError::ZeroConfettiDuration);
        }
        Ok(Self {
            window_size: (args.width, args.height),
            confetti_duration: Duration::from_millis(args.confetti_duration_ms),
            confetti_particles: args.confetti_particles,
            log_filter: args.log_filter,
        })
    }
}

impl Settings {
    pub fn window_size(&self) -> (f32, f32) {
        self.window_size
    }

    pub fn confetti_duration(&self) -> Duration {
        self.confetti_duration
    }

    pub fn confetti_particles(&self) -> usize {
        self.confetti_particles
    }

    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }
}

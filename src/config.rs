/// Command line configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::compute::{PLAYER_SIZE, PLAYER_START};
use crate::entities::{GameConfig, Viewport};

/// Smallest play area that still holds the player's starting box.
pub const MIN_WIDTH: i64 = (PLAYER_START.0 + PLAYER_SIZE.0 / 2) as i64;
pub const MIN_HEIGHT: i64 = (PLAYER_START.1 + PLAYER_SIZE.1 / 2) as i64;

#[derive(Parser, Debug, Clone)]
#[command(name = "kokaton_fight")]
#[command(about = "Dodge the bouncing bombs and shoot them down")]
pub struct Args {
    /// Play area width in world units
    #[arg(long, default_value_t = 1100, value_parser = clap::value_parser!(i32).range(MIN_WIDTH..))]
    pub width: i32,

    /// Play area height in world units
    #[arg(long, default_value_t = 650, value_parser = clap::value_parser!(i32).range(MIN_HEIGHT..))]
    pub height: i32,

    /// Number of hazards spawned at session start
    #[arg(long, default_value_t = 5)]
    pub hazards: usize,

    /// Target frame rate
    #[arg(long, default_value_t = 50, value_parser = clap::value_parser!(u32).range(1..))]
    pub fps: u32,

    /// Seed for hazard placement (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// How long the game-over screen stays up, in milliseconds
    #[arg(long, default_value_t = 1000)]
    pub game_over_pause_ms: u64,

    /// Write logs to this file (the terminal is taken over by the game)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Args {
    pub fn game_config(&self) -> GameConfig {
        GameConfig {
            viewport: Viewport {
                width: self.width,
                height: self.height,
            },
            hazard_count: self.hazards,
        }
    }

    pub fn game_over_pause(&self) -> Duration {
        Duration::from_millis(self.game_over_pause_ms)
    }
}

//! Fixed geometry, palette and glow tuning.

use serde::{Deserialize, Serialize};

pub const DARK_SQUARE: &str = "#1a1a1a";
pub const LIGHT_SQUARE: &str = "#2a2a2a";
pub const PLAYER_COLOR: &str = "#4a9eff";
pub const DIVIDER_COLOR: &str = "#333";
pub const DIVIDER_WIDTH: f64 = 1.0;

pub const COMMON_COLOR: &str = "#FFFFFF";
pub const RARE_COLOR: &str = "#9B30FF";
pub const LEGENDARY_COLOR: &str = "#FFB700";

/// Border of a slot widget with nothing equipped.
pub const EMPTY_SLOT_BORDER: &str = "#30363d";

pub const GLOW_MIN: f64 = 0.3;
pub const GLOW_MAX: f64 = 1.0;
pub const GLOW_STEP: f64 = 0.05;
/// Shadow blur on canvas = base + intensity * range.
pub const GLOW_BASE_BLUR: f64 = 10.0;
pub const GLOW_BLUR_RANGE: f64 = 10.0;
/// Blur used for the slot widget's box-shadow.
pub const WIDGET_GLOW_PX: u32 = 10;
/// Halo spread of the legend swatches.
pub const SWATCH_GLOW_PX: u32 = 6;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub tile_size: f64,
    /// Edge length of the square player sprite.
    pub player_size: f64,
    /// Pixels moved per tick along each held axis.
    pub player_speed: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            canvas_width: 800.0,
            canvas_height: 600.0,
            tile_size: 50.0,
            player_size: 40.0,
            player_speed: 2.0,
        }
    }
}

impl GameConfig {
    pub fn max_x(&self) -> f64 {
        (self.canvas_width - self.player_size).max(0.0)
    }

    pub fn max_y(&self) -> f64 {
        (self.canvas_height - self.player_size).max(0.0)
    }

    /// Checkerboard dimensions as (columns, rows).
    pub fn tile_grid(&self) -> (u32, u32) {
        if self.tile_size <= 0.0 {
            return (0, 0);
        }
        (
            (self.canvas_width / self.tile_size).ceil() as u32,
            (self.canvas_height / self.tile_size).ceil() as u32,
        )
    }
}

//! Frame drawing against an abstract 2D surface.

pub mod canvas;
#[cfg(test)]
pub(crate) mod recording;

pub use canvas::CanvasSurface;

use crate::config::{self, GameConfig};
use crate::model::PlayerState;

/// Shadow halo applied to subsequent fills.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glow {
    pub color: &'static str,
    pub blur: f64,
}

/// The drawing primitives a frame needs.
pub trait DrawSurface {
    fn clear(&mut self, x: f64, y: f64, w: f64, h: f64);
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: &str);
    fn stroke_line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, color: &str, width: f64);
    /// `None` turns the glow off.
    fn set_glow(&mut self, glow: Option<Glow>);
}

pub fn draw_background<S: DrawSurface + ?Sized>(surface: &mut S, cfg: &GameConfig) {
    let (cols, rows) = cfg.tile_grid();
    let t = cfg.tile_size;
    for row in 0..rows {
        for col in 0..cols {
            let color = if (row + col) % 2 == 0 { config::DARK_SQUARE } else { config::LIGHT_SQUARE };
            surface.fill_rect(col as f64 * t, row as f64 * t, t, t, color);
        }
    }
}

/// Base sprite, gear quadrants, then the quadrant dividers.
pub fn draw_player<S: DrawSurface + ?Sized>(surface: &mut S, player: &PlayerState, cfg: &GameConfig) {
    let size = cfg.player_size;
    let half = size / 2.0;
    let pos = player.position;
    let center = player.center(cfg);

    surface.set_glow(None);
    surface.fill_rect(pos.x, pos.y, size, size, config::PLAYER_COLOR);

    for piece in player.gear.iter() {
        let glow = piece.glow().map(|g| Glow { color: piece.color(), blur: g.blur() });
        surface.set_glow(glow);
        let (col, row) = piece.slot().quadrant();
        surface.fill_rect(pos.x + col as f64 * half, pos.y + row as f64 * half, half, half, piece.color());
    }
    surface.set_glow(None);

    surface.stroke_line(center.x, pos.y, center.x, pos.y + size, config::DIVIDER_COLOR, config::DIVIDER_WIDTH);
    surface.stroke_line(pos.x, center.y, pos.x + size, center.y, config::DIVIDER_COLOR, config::DIVIDER_WIDTH);
}

/// Clear, background, player. Does not advance any state.
pub fn render_scene<S: DrawSurface + ?Sized>(surface: &mut S, player: &PlayerState, cfg: &GameConfig) {
    surface.clear(0.0, 0.0, cfg.canvas_width, cfg.canvas_height);
    // The surface may still carry a halo from a previous caller.
    surface.set_glow(None);
    draw_background(surface, cfg);
    draw_player(surface, player, cfg);
}

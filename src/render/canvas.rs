use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::{DrawSurface, Glow};
use crate::config::GameConfig;
use crate::error::GearError;

/// `DrawSurface` backed by a browser 2d context.
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Size the canvas to the configured geometry and grab its 2d context.
    pub fn attach(canvas: &HtmlCanvasElement, cfg: &GameConfig) -> Result<Self, GearError> {
        canvas.set_width(cfg.canvas_width as u32);
        canvas.set_height(cfg.canvas_height as u32);
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| GearError::Dom(format!("get_context failed: {:?}", e)))?
            .ok_or_else(|| GearError::Dom("canvas has no 2d context".into()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| GearError::Dom("context is not CanvasRenderingContext2d".into()))?;
        Ok(Self { ctx })
    }
}

impl DrawSurface for CanvasSurface {
    fn clear(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ctx.clear_rect(x, y, w, h);
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(x, y, w, h);
    }

    fn stroke_line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, color: &str, width: f64) {
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(width);
        self.ctx.begin_path();
        self.ctx.move_to(x0, y0);
        self.ctx.line_to(x1, y1);
        self.ctx.stroke();
    }

    fn set_glow(&mut self, glow: Option<Glow>) {
        match glow {
            Some(g) => {
                self.ctx.set_shadow_color(g.color);
                self.ctx.set_shadow_blur(g.blur);
            }
            None => self.ctx.set_shadow_blur(0.0),
        }
    }
}

use super::{DrawSurface, Glow};

#[derive(Clone, Debug, PartialEq)]
pub struct Fill {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    pub color: String,
    /// Glow active when the fill was issued.
    pub glow: Option<Glow>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Clear { x: f64, y: f64, w: f64, h: f64 },
    Fill(Fill),
    Line { x0: f64, y0: f64, x1: f64, y1: f64, color: String, width: f64 },
}

/// Test surface that keeps every primitive in order.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub ops: Vec<DrawOp>,
    pub glow: Option<Glow>,
}

impl RecordingSurface {
    pub fn fills(&self) -> Vec<&Fill> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Fill(f) => Some(f),
                _ => None,
            })
            .collect()
    }

    pub fn reset(&mut self) {
        self.ops.clear();
    }
}

impl DrawSurface for RecordingSurface {
    fn clear(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ops.push(DrawOp::Clear { x, y, w, h });
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: &str) {
        self.ops.push(DrawOp::Fill(Fill { x, y, w, h, color: color.to_string(), glow: self.glow }));
    }

    fn stroke_line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, color: &str, width: f64) {
        self.ops.push(DrawOp::Line { x0, y0, x1, y1, color: color.to_string(), width });
    }

    fn set_glow(&mut self, glow: Option<Glow>) {
        self.glow = glow;
    }
}

//! Canvas 2D backend
//!
//! Replays a frame's draw commands onto a `CanvasRenderingContext2d`.

use std::f64::consts::TAU;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::frame::DrawCommand;

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    /// Grab the 2D context of a canvas
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { ctx })
    }

    /// Execute draw commands in order
    pub fn render(&self, commands: &[DrawCommand]) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        for command in commands {
            match command {
                DrawCommand::Clear { paint, size } => {
                    ctx.set_fill_style_str(&paint.to_css());
                    ctx.fill_rect(0.0, 0.0, size.x as f64, size.y as f64);
                }
                DrawCommand::Line {
                    from,
                    to,
                    width,
                    paint,
                } => {
                    ctx.set_stroke_style_str(&paint.to_css());
                    ctx.set_line_width(*width as f64);
                    ctx.begin_path();
                    ctx.move_to(from.x as f64, from.y as f64);
                    ctx.line_to(to.x as f64, to.y as f64);
                    ctx.stroke();
                }
                DrawCommand::Circle {
                    center,
                    radius,
                    paint,
                } => {
                    ctx.set_fill_style_str(&paint.to_css());
                    ctx.begin_path();
                    ctx.arc(center.x as f64, center.y as f64, *radius as f64, 0.0, TAU)?;
                    ctx.fill();
                }
            }
        }
        Ok(())
    }
}

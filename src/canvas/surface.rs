use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::commands::{DrawCommand, Fill};

/// Executes draw commands on a canvas 2D context
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// `None` when the canvas has no 2D context to offer
    pub fn from_canvas(canvas: &HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { ctx })
    }

    pub fn execute(&self, commands: &[DrawCommand]) -> Result<(), String> {
        for command in commands {
            self.execute_one(command)?;
        }
        Ok(())
    }

    fn execute_one(&self, command: &DrawCommand) -> Result<(), String> {
        let ctx = &self.ctx;

        match command {
            DrawCommand::Clear { width, height } => {
                ctx.clear_rect(0.0, 0.0, *width as f64, *height as f64);
            }
            DrawCommand::FillRect { x, y, width, height, fill } => {
                match fill {
                    Fill::Solid(color) => ctx.set_fill_style_str(&color.to_css()),
                    Fill::VerticalGradient { from_y, to_y, stops } => {
                        let gradient = ctx.create_linear_gradient(0.0, *from_y as f64, 0.0, *to_y as f64);
                        for (offset, color) in stops {
                            gradient
                                .add_color_stop(*offset, &color.to_css())
                                .map_err(|e| format!("Invalid gradient stop: {:?}", e))?;
                        }
                        ctx.set_fill_style_canvas_gradient(&gradient);
                    }
                }
                ctx.fill_rect(*x as f64, *y as f64, *width as f64, *height as f64);
            }
            DrawCommand::FillEllipse { x, y, radius_x, radius_y, rotation, color } => {
                ctx.set_fill_style_str(&color.to_css());
                ctx.begin_path();
                ctx.ellipse(
                    *x as f64,
                    *y as f64,
                    *radius_x as f64,
                    *radius_y as f64,
                    *rotation as f64,
                    0.0,
                    TAU,
                )
                .map_err(|e| format!("Ellipse failed: {:?}", e))?;
                ctx.fill();
            }
            DrawCommand::FillCircle { x, y, radius, color } => {
                ctx.set_fill_style_str(&color.to_css());
                ctx.begin_path();
                ctx.arc(*x as f64, *y as f64, *radius as f64, 0.0, TAU)
                    .map_err(|e| format!("Arc failed: {:?}", e))?;
                ctx.fill();
            }
            DrawCommand::StrokeLine { from, to, width, color } => {
                ctx.set_stroke_style_str(&color.to_css());
                ctx.set_line_width(*width as f64);
                ctx.begin_path();
                ctx.move_to(from.0 as f64, from.1 as f64);
                ctx.line_to(to.0 as f64, to.1 as f64);
                ctx.stroke();
            }
        }

        Ok(())
    }
}

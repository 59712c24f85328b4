//! 2D canvas rendering: draw-command generation and execution

pub mod commands;
pub mod plant;
pub mod surface;

pub use commands::{DrawCommand, Fill};
pub use plant::{CanvasParams, draw_plant};
pub use surface::CanvasSurface;

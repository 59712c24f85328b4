use crate::math::Color;

/// Fill style for rectangles
#[derive(Debug, Clone, PartialEq)]
pub enum Fill {
    Solid(Color),
    /// Linear gradient running top to bottom between two y coordinates
    VerticalGradient {
        from_y: f32,
        to_y: f32,
        stops: Vec<(f32, Color)>,
    },
}

/// A flattened 2D drawing operation in canvas pixel coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear {
        width: f32,
        height: f32,
    },
    FillRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        fill: Fill,
    },
    FillEllipse {
        x: f32,
        y: f32,
        radius_x: f32,
        radius_y: f32,
        rotation: f32,
        color: Color,
    },
    FillCircle {
        x: f32,
        y: f32,
        radius: f32,
        color: Color,
    },
    StrokeLine {
        from: (f32, f32),
        to: (f32, f32),
        width: f32,
        color: Color,
    },
}

impl DrawCommand {
    pub fn line(from: (f32, f32), to: (f32, f32), width: f32, color: Color) -> Self {
        DrawCommand::StrokeLine { from, to, width, color }
    }

    pub fn circle(x: f32, y: f32, radius: f32, color: Color) -> Self {
        DrawCommand::FillCircle { x, y, radius, color }
    }

    pub fn ellipse(x: f32, y: f32, radius_x: f32, radius_y: f32, rotation: f32, color: Color) -> Self {
        DrawCommand::FillEllipse { x, y, radius_x, radius_y, rotation, color }
    }

    /// Fill color, if the command paints with a single color
    pub fn color(&self) -> Option<Color> {
        match self {
            DrawCommand::Clear { .. } => None,
            DrawCommand::FillRect { fill: Fill::Solid(c), .. } => Some(*c),
            DrawCommand::FillRect { .. } => None,
            DrawCommand::FillEllipse { color, .. }
            | DrawCommand::FillCircle { color, .. }
            | DrawCommand::StrokeLine { color, .. } => Some(*color),
        }
    }
}

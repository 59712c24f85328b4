//! Flowering plant drawn as flat canvas commands
//!
//! Layout is relative to the canvas: the plant stands at the horizontal
//! center on a strip of ground along the bottom edge, with a sun in the top
//! right corner. Sizes are in pixels and grow linearly with progress.

use std::f32::consts::TAU;
use rand::Rng;
use serde::Deserialize;

use crate::growth::{Part, VisibilityTable, visible_parts};
use crate::math::Color;
use super::commands::{DrawCommand, Fill};

pub const SKY_TOP: Color = Color::hex(0xe0f2fe);
pub const SKY_BOTTOM: Color = Color::hex(0xf0f9ff);
pub const GROUND: Color = Color::hex(0x92400e);
pub const SOIL: Color = Color::hex(0x78350f);
pub const SEED: Color = Color::hex(0x7c2d12);
pub const ROOT: Color = Color::hex(0xf59e0b);
pub const STEM: Color = Color::hex(0x16a34a);
pub const LEAF: Color = Color::hex(0x22c55e);
pub const PETAL: Color = Color::hex(0xfbbf24);
pub const FLOWER_CENTER: Color = Color::hex(0xf59e0b);
pub const SUN: Color = Color::hex(0xfbbf24);

/// Parameters for the 2D scene
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct CanvasParams {
    /// Height of the ground strip in pixels
    pub ground_height: f32,
    /// Number of random soil specks
    pub soil_specks: usize,
    /// Deepest the main root grows
    pub max_root_depth: f32,
    /// Tallest the stem grows
    pub max_stem_height: f32,
    pub petal_count: usize,
}

impl Default for CanvasParams {
    fn default() -> Self {
        Self {
            ground_height: 50.0,
            soil_specks: 20,
            max_root_depth: 40.0,
            max_stem_height: 120.0,
            petal_count: 6,
        }
    }
}

impl CanvasParams {
    pub fn validate(&self) -> Result<(), String> {
        for (name, value) in [
            ("ground_height", self.ground_height),
            ("max_root_depth", self.max_root_depth),
            ("max_stem_height", self.max_stem_height),
        ] {
            if value.is_nan() || value < 0.0 {
                return Err(format!("canvas {} must not be negative, got {}", name, value));
            }
        }
        Ok(())
    }
}

/// Root depth in pixels for progress `p`
pub fn root_depth(p: f32, params: &CanvasParams) -> f32 {
    ((p - 20.0) * 2.0).clamp(0.0, params.max_root_depth)
}

/// Stem height in pixels for progress `p`
pub fn stem_height(p: f32, params: &CanvasParams) -> f32 {
    ((p - 40.0) * 3.0).clamp(0.0, params.max_stem_height)
}

/// Leaves unfold one per 10 progress after 60
pub fn leaf_count(p: f32) -> usize {
    ((p - 60.0) / 10.0).floor().max(0.0) as usize
}

/// Build the draw list for one frame
pub fn draw_plant<R: Rng + ?Sized>(
    progress: f32,
    width: f32,
    height: f32,
    table: VisibilityTable,
    params: &CanvasParams,
    rng: &mut R,
) -> Vec<DrawCommand> {
    let center_x = width / 2.0;
    let ground_y = height - params.ground_height;
    let mut commands = Vec::with_capacity(64);

    draw_backdrop(&mut commands, width, ground_y, params, rng);

    let stem = stem_height(progress, params);
    for part in visible_parts(table, progress) {
        match part {
            Part::Seed => {
                commands.push(DrawCommand::ellipse(center_x, ground_y - 10.0, 8.0, 6.0, 0.0, SEED));
            }
            Part::Roots => {
                let depth = root_depth(progress, params);
                commands.push(DrawCommand::line(
                    (center_x, ground_y),
                    (center_x, ground_y + depth),
                    2.0,
                    ROOT,
                ));
                for i in 0..3 {
                    commands.push(DrawCommand::line(
                        (center_x, ground_y + depth * 0.5),
                        (center_x - 15.0 + i as f32 * 15.0, ground_y + depth * 0.8),
                        2.0,
                        ROOT,
                    ));
                }
            }
            Part::Stem => {
                commands.push(DrawCommand::line(
                    (center_x, ground_y),
                    (center_x, ground_y - stem),
                    (progress / 20.0).min(5.0),
                    STEM,
                ));
            }
            Part::Foliage => {
                for i in 0..leaf_count(progress) {
                    let leaf_y = ground_y - stem * (0.3 + i as f32 * 0.15);
                    let size = 15.0 + i as f32 * 3.0;
                    let side = if i % 2 == 0 { -1.0 } else { 1.0 };
                    let leaf_x = center_x + side * 20.0;

                    commands.push(DrawCommand::ellipse(leaf_x, leaf_y, size, size / 2.0, side * 0.3, LEAF));
                    // vein
                    commands.push(DrawCommand::line((center_x, leaf_y), (leaf_x, leaf_y), 1.0, STEM));
                }
            }
            Part::Bloom => {
                let flower_y = ground_y - stem - 10.0;
                let petals = params.petal_count.max(1);
                for i in 0..petals {
                    let angle = i as f32 / petals as f32 * TAU;
                    commands.push(DrawCommand::ellipse(
                        center_x + angle.cos() * 15.0,
                        flower_y + angle.sin() * 15.0,
                        12.0,
                        6.0,
                        angle,
                        PETAL,
                    ));
                }
                commands.push(DrawCommand::circle(center_x, flower_y, 8.0, FLOWER_CENTER));
            }
            Part::Branches => {}
        }
    }

    draw_sun(&mut commands, width);
    commands
}

fn draw_backdrop<R: Rng + ?Sized>(
    commands: &mut Vec<DrawCommand>,
    width: f32,
    ground_y: f32,
    params: &CanvasParams,
    rng: &mut R,
) {
    commands.push(DrawCommand::Clear {
        width,
        height: ground_y + params.ground_height,
    });
    commands.push(DrawCommand::FillRect {
        x: 0.0,
        y: 0.0,
        width,
        height: ground_y,
        fill: Fill::VerticalGradient {
            from_y: 0.0,
            to_y: ground_y,
            stops: vec![(0.0, SKY_TOP), (1.0, SKY_BOTTOM)],
        },
    });
    commands.push(DrawCommand::FillRect {
        x: 0.0,
        y: ground_y,
        width,
        height: params.ground_height,
        fill: Fill::Solid(GROUND),
    });

    // Specks stay inside the strip, clear of its top and bottom edges
    let band = (params.ground_height - 10.0).max(0.0);
    for _ in 0..params.soil_specks {
        let x = rng.random::<f32>() * width;
        let y = ground_y + 5.0 + rng.random::<f32>() * band;
        let radius = 1.0 + rng.random::<f32>() * 3.0;
        commands.push(DrawCommand::circle(x, y, radius, SOIL));
    }
}

fn draw_sun(commands: &mut Vec<DrawCommand>, width: f32) {
    let (sun_x, sun_y) = (width - 60.0, 60.0);
    commands.push(DrawCommand::circle(sun_x, sun_y, 25.0, SUN));

    for i in 0..8 {
        let angle = i as f32 / 8.0 * TAU;
        let (sin, cos) = angle.sin_cos();
        commands.push(DrawCommand::line(
            (sun_x + cos * 30.0, sun_y + sin * 30.0),
            (sun_x + cos * 40.0, sun_y + sin * 40.0),
            2.0,
            SUN,
        ));
    }
}

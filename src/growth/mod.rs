//! Growth stages, plant variants and part visibility

pub mod stages;
pub mod visibility;

pub use stages::{GrowthStage, PLANT_STAGES, TREE_STAGES, resolve_stage, stage_index};
pub use visibility::{Gate, Part, VisibilityTable, visible_parts, is_visible};

use serde::Deserialize;

/// Which plant is grown and how it is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// Flowering plant as 2D canvas drawing commands
    #[default]
    Flower2d,
    /// Flowering plant as a 3D scene graph
    Flower3d,
    /// Apple tree as a 3D scene graph
    AppleTree,
}

impl Variant {
    pub fn stages(&self) -> &'static [GrowthStage] {
        match self {
            Variant::Flower2d | Variant::Flower3d => &PLANT_STAGES,
            Variant::AppleTree => &TREE_STAGES,
        }
    }

    pub fn visibility(&self) -> VisibilityTable {
        match self {
            Variant::Flower2d => visibility::FLOWER_2D,
            Variant::Flower3d => visibility::FLOWER_3D,
            Variant::AppleTree => visibility::APPLE_TREE,
        }
    }

    pub fn is_3d(&self) -> bool {
        !matches!(self, Variant::Flower2d)
    }
}

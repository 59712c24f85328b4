//! Named growth milestones and progress-to-stage lookup

/// A named milestone keyed by a progress threshold (0-100)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrowthStage {
    pub name: &'static str,
    pub description: &'static str,
    pub threshold: f32,
}

impl GrowthStage {
    const fn new(name: &'static str, description: &'static str, threshold: f32) -> Self {
        Self { name, description, threshold }
    }
}

/// Stages of the flowering plant, in increasing threshold order
pub const PLANT_STAGES: [GrowthStage; 6] = [
    GrowthStage::new("Seed", "The journey begins with a tiny seed", 0.0),
    GrowthStage::new("Germination", "Roots emerge and reach for water", 20.0),
    GrowthStage::new("Sprouting", "First shoots break through the soil", 40.0),
    GrowthStage::new("Seedling", "Leaves unfold to capture sunlight", 60.0),
    GrowthStage::new("Growing", "Stem strengthens and leaves multiply", 80.0),
    GrowthStage::new("Mature Plant", "Full grown and thriving", 100.0),
];

/// Stages of the apple tree, in increasing threshold order
pub const TREE_STAGES: [GrowthStage; 6] = [
    GrowthStage::new("Seed", "An apple seed rests in the soil", 0.0),
    GrowthStage::new("Sprout", "A root anchors the seed and a shoot appears", 20.0),
    GrowthStage::new("Sapling", "A thin trunk rises and the first leaves open", 40.0),
    GrowthStage::new("Young Tree", "Branches spread and the canopy fills out", 60.0),
    GrowthStage::new("Blossoming", "The canopy is full and ready to bear fruit", 80.0),
    GrowthStage::new("Fruiting Tree", "Apples ripen all through the canopy", 100.0),
];

/// Index of the first stage whose threshold is at or above `progress`.
///
/// Progress past the last threshold maps to the last stage. An empty table
/// maps to index 0.
pub fn stage_index(stages: &[GrowthStage], progress: f32) -> usize {
    stages
        .iter()
        .position(|stage| stage.threshold >= progress)
        .unwrap_or_else(|| stages.len().saturating_sub(1))
}

/// Stage for `progress`, see [`stage_index`]
pub fn resolve_stage(stages: &'static [GrowthStage], progress: f32) -> &'static GrowthStage {
    &stages[stage_index(stages, progress)]
}

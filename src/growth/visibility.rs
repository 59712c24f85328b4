//! Threshold table deciding which plant parts are drawn at a given progress

/// A renderable part of the plant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Part {
    Seed,
    Roots,
    /// Stem of the flower, trunk of the tree
    Stem,
    Branches,
    /// Leaves of the flower, canopy of the tree
    Foliage,
    /// Flower head or apples
    Bloom,
}

/// Step predicate over progress
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gate {
    Below(f32),
    AtLeast(f32),
    Above(f32),
}

impl Gate {
    pub fn admits(&self, progress: f32) -> bool {
        match *self {
            Gate::Below(t) => progress < t,
            Gate::AtLeast(t) => progress >= t,
            Gate::Above(t) => progress > t,
        }
    }
}

pub type VisibilityTable = &'static [(Part, Gate)];

pub const FLOWER_2D: VisibilityTable = &[
    (Part::Seed, Gate::Below(20.0)),
    (Part::Roots, Gate::AtLeast(20.0)),
    (Part::Stem, Gate::AtLeast(40.0)),
    (Part::Foliage, Gate::AtLeast(60.0)),
    (Part::Bloom, Gate::AtLeast(90.0)),
];

/// Zero-height stems and trunks are skipped in 3D, so 3D stems use a strict gate
pub const FLOWER_3D: VisibilityTable = &[
    (Part::Seed, Gate::Below(20.0)),
    (Part::Roots, Gate::AtLeast(20.0)),
    (Part::Stem, Gate::Above(40.0)),
    (Part::Foliage, Gate::AtLeast(60.0)),
    (Part::Bloom, Gate::AtLeast(90.0)),
];

pub const APPLE_TREE: VisibilityTable = &[
    (Part::Seed, Gate::Below(20.0)),
    (Part::Roots, Gate::AtLeast(20.0)),
    (Part::Stem, Gate::Above(40.0)),
    (Part::Foliage, Gate::Above(40.0)),
    (Part::Branches, Gate::Above(50.0)),
    (Part::Bloom, Gate::Above(80.0)),
];

/// Parts admitted at `progress`, in table order
pub fn visible_parts(table: VisibilityTable, progress: f32) -> impl Iterator<Item = Part> {
    table
        .iter()
        .filter(move |(_, gate)| gate.admits(progress))
        .map(|(part, _)| *part)
}

pub fn is_visible(table: VisibilityTable, part: Part, progress: f32) -> bool {
    visible_parts(table, progress).any(|p| p == part)
}

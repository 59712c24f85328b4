//! Apple tree as a 3D scene graph
//!
//! The trunk rises from the soil at the origin; branches fan out of its
//! upper half and a spherical canopy sits on top. Apples are placed inside
//! the canopy group so they sway with it.

use std::f32::consts::PI;
use rand::Rng;
use serde::Deserialize;

use crate::growth::{Part, VisibilityTable, visible_parts};
use crate::math::{Color, Mat4, Vec3};
use super::flower::{roots_node, seed_node, soil_nodes};
use super::fruit::{FruitLayout, sample_fruit_positions};
use super::graph::{Geometry, Material, NodeKind, SceneNode, Transform};

const BARK: Color = Color::hex(0x78350f);
const BRANCH: Color = Color::hex(0x92400e);
const CANOPY: Color = Color::hex(0x15803d);
const CANOPY_LOBE: Color = Color::hex(0x16a34a);
const UNRIPE: Color = Color::hex(0x84cc16);
const RIPE: Color = Color::hex(0xdc2626);

/// Parameters shaping the tree
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct TreeParams {
    pub max_trunk_height: f32,
    pub max_trunk_radius: f32,
    pub max_canopy_radius: f32,
    pub branch_count: usize,
    /// Apple radius when fully ripe
    pub fruit_radius: f32,
    pub fruit: FruitLayout,
}

impl Default for TreeParams {
    fn default() -> Self {
        Self {
            max_trunk_height: 2.4,
            max_trunk_radius: 0.18,
            max_canopy_radius: 1.6,
            branch_count: 6,
            fruit_radius: 0.08,
            fruit: FruitLayout::default(),
        }
    }
}

impl TreeParams {
    pub fn validate(&self) -> Result<(), String> {
        let positive = [
            ("max_trunk_height", self.max_trunk_height),
            ("max_trunk_radius", self.max_trunk_radius),
            ("max_canopy_radius", self.max_canopy_radius),
            ("fruit_radius", self.fruit_radius),
        ];
        for (name, value) in positive {
            if value.is_nan() || value <= 0.0 {
                return Err(format!("tree {} must be positive, got {}", name, value));
            }
        }
        self.fruit.validate()
    }

    pub fn root_depth(&self, p: f32) -> f32 {
        (p * 0.025).min(1.0)
    }

    pub fn trunk_height(&self, p: f32) -> f32 {
        ((p - 40.0) * 0.05).clamp(0.0, self.max_trunk_height)
    }

    pub fn trunk_radius(&self, p: f32) -> f32 {
        (0.04 + (p - 40.0).max(0.0) * 0.003).min(self.max_trunk_radius)
    }

    pub fn canopy_radius(&self, p: f32) -> f32 {
        ((p - 40.0) * 0.035).clamp(0.0, self.max_canopy_radius)
    }

    /// Branch length as a share of the trunk, 0 at p = 50 and full at p = 80
    pub fn branch_growth(&self, p: f32) -> f32 {
        ((p - 50.0) / 30.0).clamp(0.0, 1.0)
    }

    /// 0 when fruit first sets, 1 when fully ripe
    pub fn ripeness(&self, p: f32) -> f32 {
        ((p - 80.0) / 20.0).clamp(0.0, 1.0)
    }
}

/// Gentle roll of the canopy
pub fn canopy_sway(elapsed: f32) -> f32 {
    (elapsed * 0.8).sin() * 0.03
}

/// Build the scene for one frame
pub fn build_apple_tree_scene<R: Rng + ?Sized>(
    progress: f32,
    elapsed: f32,
    table: VisibilityTable,
    params: &TreeParams,
    rng: &mut R,
) -> SceneNode {
    let trunk_height = params.trunk_height(progress);
    let canopy_radius = params.canopy_radius(progress);
    let canopy_center = Vec3::new(0.0, trunk_height + canopy_radius * 0.45, 0.0);

    let mut children = soil_nodes();
    let mut canopy: Option<SceneNode> = None;

    for part in visible_parts(table, progress) {
        match part {
            Part::Seed => children.push(seed_node()),
            Part::Roots => children.push(roots_node(params.root_depth(progress), 4)),
            Part::Stem => {
                let radius = params.trunk_radius(progress);
                children.push(SceneNode::mesh(
                    "trunk",
                    Transform::at(Vec3::new(0.0, trunk_height / 2.0, 0.0)),
                    Geometry::Cylinder {
                        radius_top: radius * 0.6,
                        radius_bottom: radius,
                        height: trunk_height,
                        radial_segments: 12,
                    },
                    Material::standard(BARK, 0.9),
                ));
            }
            Part::Branches => {
                children.push(branches_node(trunk_height, params.trunk_radius(progress), params.branch_growth(progress), params.branch_count));
            }
            Part::Foliage => {
                canopy = Some(canopy_node(canopy_center, canopy_radius, elapsed));
            }
            Part::Bloom => {
                if let Some(SceneNode { kind: NodeKind::Group { children: canopy_children }, .. }) = canopy.as_mut() {
                    canopy_children.push(apples_node(canopy_radius, params.ripeness(progress), params, rng));
                }
            }
        }
    }

    children.extend(canopy);
    SceneNode::group("tree", Transform::default(), children)
}

/// Direction of branch `index`: spread around the trunk by the golden angle,
/// lower branches leaning further out
fn branch_rotation(index: usize, count: usize) -> Vec3 {
    let t = if count > 1 { index as f32 / (count - 1) as f32 } else { 0.0 };
    let yaw = index as f32 * PI * (3.0 - 5f32.sqrt());
    let tilt = 1.0 - 0.4 * t;
    Vec3::new(0.0, yaw, tilt)
}

fn branches_node(trunk_height: f32, trunk_radius: f32, growth: f32, count: usize) -> SceneNode {
    let length = trunk_height * 0.5 * growth;
    let children = (0..count)
        .map(|i| {
            let t = if count > 1 { i as f32 / (count - 1) as f32 } else { 0.0 };
            let attach = Vec3::new(0.0, trunk_height * (0.55 + 0.4 * t), 0.0);
            let rotation = branch_rotation(i, count);
            let direction = Mat4::rotation_euler(rotation).transform_direction(Vec3::UP);
            let radius = trunk_radius * 0.45 * (1.0 - 0.4 * t);

            SceneNode::mesh(
                &format!("branch_{}", i),
                Transform::at(attach + direction.scale(length / 2.0)).rotated(rotation),
                Geometry::Cylinder {
                    radius_top: radius * 0.5,
                    radius_bottom: radius,
                    height: length,
                    radial_segments: 8,
                },
                Material::standard(BRANCH, 0.85),
            )
        })
        .collect();

    SceneNode::group("branches", Transform::default(), children)
}

/// Main crown plus four smaller lobes around its lower half
fn canopy_node(center: Vec3, radius: f32, elapsed: f32) -> SceneNode {
    let mut children = vec![SceneNode::mesh(
        "canopy_crown",
        Transform::default(),
        Geometry::Sphere { radius, width_segments: 24, height_segments: 16 },
        Material::standard(CANOPY, 0.8),
    )];

    for i in 0..4 {
        let angle = i as f32 * PI / 2.0 + PI / 4.0;
        children.push(SceneNode::mesh(
            &format!("canopy_lobe_{}", i),
            Transform::at(Vec3::new(angle.cos() * radius * 0.55, -radius * 0.15, angle.sin() * radius * 0.55)),
            Geometry::Sphere { radius: radius * 0.6, width_segments: 16, height_segments: 12 },
            Material::standard(CANOPY_LOBE, 0.8),
        ));
    }

    SceneNode::group(
        "canopy",
        Transform::at(center).rotated(Vec3::new(0.0, 0.0, canopy_sway(elapsed))),
        children,
    )
}

fn apples_node<R: Rng + ?Sized>(canopy_radius: f32, ripeness: f32, params: &TreeParams, rng: &mut R) -> SceneNode {
    let color = UNRIPE.lerp(&RIPE, ripeness);
    let radius = params.fruit_radius * (0.5 + 0.5 * ripeness);

    let children = sample_fruit_positions(canopy_radius, &params.fruit, rng)
        .into_iter()
        .enumerate()
        .map(|(i, position)| {
            SceneNode::mesh(
                &format!("apple_{}", i),
                Transform::at(position),
                Geometry::Sphere { radius, width_segments: 12, height_segments: 8 },
                Material::standard(color, 0.35),
            )
        })
        .collect();

    SceneNode::group("apples", Transform::default(), children)
}

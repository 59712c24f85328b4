//! Flowering plant as a 3D scene graph
//!
//! World units: the soil surface is y = 0, the stem grows along +Y.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, TAU};

use crate::growth::{Part, VisibilityTable, visible_parts};
use crate::math::{Color, Vec3};
use super::graph::{Geometry, Material, SceneNode, Transform};

const SOIL: Color = Color::hex(0x78350f);
const SEED: Color = Color::hex(0x7c2d12);
const ROOT: Color = Color::hex(0xf59e0b);
const STEM: Color = Color::hex(0x16a34a);
const LEAF: Color = Color::hex(0x22c55e);
const PETAL: Color = Color::hex(0xfbbf24);
const FLOWER_CENTER: Color = Color::hex(0xf59e0b);

const PETAL_COUNT: usize = 6;
const MAX_LEAVES: usize = 4;

pub fn root_depth(p: f32) -> f32 {
    (p * 0.02).min(0.8)
}

pub fn stem_height(p: f32) -> f32 {
    if p >= 40.0 {
        ((p - 40.0) * 0.03).min(1.8)
    } else {
        0.0
    }
}

pub fn leaf_count(p: f32) -> usize {
    (((p - 60.0) / 10.0).floor().max(0.0) as usize).min(MAX_LEAVES)
}

/// Slow yaw of the flower head
pub fn flower_sway(elapsed: f32) -> f32 {
    (elapsed * 0.5).sin() * 0.1
}

/// Soil block and the shadow-catching ground plane
pub(crate) fn soil_nodes() -> Vec<SceneNode> {
    vec![
        SceneNode::mesh(
            "soil",
            Transform::at(Vec3::new(0.0, -0.5, 0.0)),
            Geometry::Box { width: 8.0, height: 1.0, depth: 8.0 },
            Material::standard(SOIL, 0.9),
        ),
        SceneNode::mesh(
            "ground",
            Transform::at(Vec3::new(0.0, -0.01, 0.0)).rotated(Vec3::new(-FRAC_PI_2, 0.0, 0.0)),
            Geometry::Plane { width: 10.0, height: 10.0 },
            Material::shadow(0.3),
        ),
    ]
}

pub(crate) fn seed_node() -> SceneNode {
    SceneNode::mesh(
        "seed",
        Transform::at(Vec3::new(0.0, 0.1, 0.0)),
        Geometry::Sphere { radius: 0.15, width_segments: 16, height_segments: 16 },
        Material::standard(SEED, 0.8),
    )
}

/// Main root plus three side roots fanning out below the soil line
pub(crate) fn roots_node(depth: f32, side_roots: usize) -> SceneNode {
    let material = Material::standard(ROOT, 0.7);
    let mut children = vec![SceneNode::mesh(
        "root_main",
        Transform::at(Vec3::new(0.0, -depth / 2.0, 0.0)),
        Geometry::Cylinder { radius_top: 0.02, radius_bottom: 0.04, height: depth, radial_segments: 8 },
        material,
    )];

    let half = (side_roots as f32 - 1.0) / 2.0;
    for i in 0..side_roots {
        let offset = i as f32 - half;
        children.push(SceneNode::mesh(
            &format!("root_side_{}", i),
            Transform::at(Vec3::new(offset * 0.3, -depth * 0.7, 0.0))
                .rotated(Vec3::new(0.0, 0.0, offset * 0.3)),
            Geometry::Cylinder {
                radius_top: 0.01,
                radius_bottom: 0.02,
                height: depth * 0.5,
                radial_segments: 6,
            },
            material,
        ));
    }

    SceneNode::group("roots", Transform::default(), children)
}

/// Build the scene for one frame
pub fn build_flower_scene(progress: f32, elapsed: f32, table: VisibilityTable) -> SceneNode {
    let stem = stem_height(progress);
    let mut children = soil_nodes();

    for part in visible_parts(table, progress) {
        match part {
            Part::Seed => children.push(seed_node()),
            Part::Roots => children.push(roots_node(root_depth(progress), 3)),
            Part::Stem => children.push(SceneNode::mesh(
                "stem",
                Transform::at(Vec3::new(0.0, stem / 2.0, 0.0)),
                Geometry::Cylinder { radius_top: 0.05, radius_bottom: 0.08, height: stem, radial_segments: 8 },
                Material::standard(STEM, 0.6),
            )),
            Part::Foliage => {
                let leaves: Vec<SceneNode> = (0..leaf_count(progress)).map(|i| leaf_node(i, stem)).collect();
                if !leaves.is_empty() {
                    children.push(SceneNode::group("leaves", Transform::default(), leaves));
                }
            }
            Part::Bloom => children.push(flower_node(stem, elapsed)),
            Part::Branches => {}
        }
    }

    SceneNode::group("plant", Transform::default(), children)
}

/// Leaves alternate sides up the stem and grow larger toward the top
fn leaf_node(index: usize, stem: f32) -> SceneNode {
    let side = if index % 2 == 0 { 1.0 } else { -1.0 };
    let height = stem * (0.3 + index as f32 * 0.15);
    let size = 0.3 + index as f32 * 0.1;

    SceneNode::group(
        &format!("leaf_{}", index),
        Transform::at(Vec3::new(0.0, height, 0.0)).rotated(Vec3::new(0.0, side * FRAC_PI_4, 0.0)),
        vec![SceneNode::mesh(
            "leaf_blade",
            Transform::at(Vec3::new(0.3, 0.0, 0.0)).rotated(Vec3::new(0.0, 0.0, -0.3)),
            Geometry::Sphere { radius: size, width_segments: 8, height_segments: 6 },
            Material::standard(LEAF, 0.5),
        )],
    )
}

fn flower_node(stem: f32, elapsed: f32) -> SceneNode {
    let mut children: Vec<SceneNode> = (0..PETAL_COUNT)
        .map(|i| {
            let angle = i as f32 / PETAL_COUNT as f32 * TAU;
            SceneNode::mesh(
                &format!("petal_{}", i),
                Transform::at(Vec3::new(angle.cos() * 0.3, 0.0, angle.sin() * 0.3))
                    .rotated(Vec3::new(0.0, angle, 0.0)),
                Geometry::Sphere { radius: 0.15, width_segments: 8, height_segments: 6 },
                Material::standard(PETAL, 0.4),
            )
        })
        .collect();

    children.push(SceneNode::mesh(
        "flower_center",
        Transform::default(),
        Geometry::Sphere { radius: 0.2, width_segments: 16, height_segments: 16 },
        Material::standard(FLOWER_CENTER, 0.5),
    ));

    SceneNode::group(
        "flower",
        Transform::at(Vec3::new(0.0, stem + 0.3, 0.0)).rotated(Vec3::new(0.0, flower_sway(elapsed), 0.0)),
        children,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::growth::visibility::FLOWER_3D;
    use crate::scene::graph::NodeKind;

    fn scene(p: f32) -> SceneNode {
        build_flower_scene(p, 0.0, FLOWER_3D)
    }

    #[test]
    fn test_seed_stage() {
        let s = scene(0.0);
        assert!(s.find("seed").is_some());
        assert!(s.find("roots").is_none());
        assert!(s.find("soil").is_some());
        assert!(s.find("ground").is_some());
    }

    #[test]
    fn test_roots_without_stem() {
        let s = scene(40.0);
        assert!(s.find("seed").is_none());
        assert_eq!(s.count_named("root_side_"), 3);
        // Stem height is zero at exactly 40
        assert!(s.find("stem").is_none());
    }

    #[test]
    fn test_stem_scales_linearly() {
        assert_eq!(stem_height(39.0), 0.0);
        assert!((stem_height(50.0) - 0.3).abs() < 1e-5);
        assert!((stem_height(100.0) - 1.8).abs() < 1e-5);

        let s = scene(50.0);
        match &s.find("stem").unwrap().kind {
            NodeKind::Mesh { geometry: Geometry::Cylinder { height, .. }, .. } => {
                assert!((height - 0.3).abs() < 1e-5);
            }
            other => panic!("unexpected stem node {:?}", other),
        }
    }

    #[test]
    fn test_leaves_capped_at_four() {
        assert_eq!(leaf_count(65.0), 0);
        assert_eq!(leaf_count(70.0), 1);
        assert_eq!(leaf_count(100.0), 4);
        assert!(scene(65.0).find("leaves").is_none());
        assert_eq!(scene(95.0).count_named("leaf_blade"), 3);
    }

    #[test]
    fn test_flower_at_ninety_sways() {
        assert!(scene(89.5).find("flower").is_none());

        let still = build_flower_scene(95.0, 0.0, FLOWER_3D);
        let swaying = build_flower_scene(95.0, 3.0, FLOWER_3D);
        let yaw = |s: &SceneNode| s.find("flower").unwrap().transform.rotation.y;

        assert_eq!(yaw(&still), 0.0);
        assert!((yaw(&swaying) - (1.5f32).sin() * 0.1).abs() < 1e-5);
        assert_eq!(still.find("flower").unwrap().children().len(), PETAL_COUNT + 1);
    }
}

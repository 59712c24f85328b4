//! Flatten a scene graph into a single world-space mesh

use crate::math::Mat4;
use crate::scene::{NodeKind, SceneNode};
use super::buffer::{Mesh, Vertex};
use super::primitives;

/// World-space triangles for every drawable mesh under `root`.
/// Shadow-catcher materials have no visible surface and are skipped.
pub fn tessellate(root: &SceneNode) -> Mesh {
    let mut mesh = Mesh::new();
    append_node(root, &Mat4::identity(), &mut mesh);
    mesh
}

fn append_node(node: &SceneNode, parent: &Mat4, out: &mut Mesh) {
    let world = parent.mul(&node.transform.matrix());

    match &node.kind {
        NodeKind::Group { children } => {
            for child in children {
                append_node(child, &world, out);
            }
        }
        NodeKind::Mesh { material, .. } if material.shadow_only => {}
        NodeKind::Mesh { geometry, material } => {
            let mut local = primitives::generate(geometry, material.color.to_linear_vec());
            local.map_vertices(|v| Vertex {
                position: world.transform_point(v.position),
                normal: world.transform_direction(v.normal).normalize(),
                color: v.color,
            });
            out.merge(&local);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::growth::visibility::{APPLE_TREE, FLOWER_3D};
    use crate::math::{Color, Vec3};
    use crate::scene::{
        Geometry, Material, Transform, TreeParams, build_apple_tree_scene, build_flower_scene,
    };
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn unit_box(name: &str, transform: Transform) -> SceneNode {
        SceneNode::mesh(
            name,
            transform,
            Geometry::Box { width: 1.0, height: 1.0, depth: 1.0 },
            Material::standard(Color::hex(0xff0000), 0.5),
        )
    }

    #[test]
    fn test_nested_transforms_compose() {
        let scene = SceneNode::group(
            "root",
            Transform::at(Vec3::new(10.0, 0.0, 0.0)),
            vec![unit_box("box", Transform::at(Vec3::new(0.0, 5.0, 0.0)).scaled(2.0))],
        );
        let mesh = tessellate(&scene);

        assert_eq!(mesh.vertex_count(), 24);
        assert!(mesh.vertices.iter().all(|v| (v.position.x - 10.0).abs() <= 1.0 + 1e-5));
        let min_y = mesh.vertices.iter().map(|v| v.position.y).fold(f32::MAX, f32::min);
        let max_y = mesh.vertices.iter().map(|v| v.position.y).fold(f32::MIN, f32::max);
        assert!((min_y - 4.0).abs() < 1e-5);
        assert!((max_y - 6.0).abs() < 1e-5);
        assert!(mesh.vertices.iter().all(|v| v.color == Vec3::new(1.0, 0.0, 0.0)));
    }

    #[test]
    fn test_shadow_catchers_are_skipped() {
        let scene = SceneNode::group(
            "root",
            Transform::default(),
            vec![
                unit_box("box", Transform::default()),
                SceneNode::mesh(
                    "ground",
                    Transform::default(),
                    Geometry::Plane { width: 10.0, height: 10.0 },
                    Material::shadow(0.3),
                ),
            ],
        );
        assert_eq!(tessellate(&scene).triangle_count(), 12);
    }

    #[test]
    fn test_rotated_normals_stay_unit() {
        let scene = unit_box("box", Transform::default().rotated(Vec3::new(0.3, 1.1, -0.7)));
        for v in &tessellate(&scene).vertices {
            assert!((v.normal.length() - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_plant_scenes_produce_valid_buffers() {
        let flower = tessellate(&build_flower_scene(100.0, 1.0, FLOWER_3D));
        let mut rng = StdRng::seed_from_u64(4);
        let tree = tessellate(&build_apple_tree_scene(100.0, 1.0, APPLE_TREE, &TreeParams::default(), &mut rng));

        for mesh in [&flower, &tree] {
            assert!(mesh.triangle_count() > 0);
            assert!(mesh.indices.iter().all(|&i| (i as usize) < mesh.vertex_count()));
            assert_eq!(mesh.vertex_data().len(), mesh.vertex_count() * crate::mesh::VERTEX_STRIDE);
        }
        assert!(tree.triangle_count() > flower.triangle_count());
    }

    #[test]
    fn test_seed_scene_grows() {
        let early = tessellate(&build_flower_scene(0.0, 0.0, FLOWER_3D));
        let late = tessellate(&build_flower_scene(95.0, 0.0, FLOWER_3D));
        assert!(late.vertex_count() > early.vertex_count());
    }
}

use serde::Serialize;
use crate::math::{Color, Mat4, Vec3};

/// Position, Euler XYZ rotation (radians) and scale relative to the parent
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    pub fn rotated(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn scaled(mut self, scale: f32) -> Self {
        self.scale = Vec3::splat(scale);
        self
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_trs(self.position, self.rotation, self.scale)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Geometry {
    Box {
        width: f32,
        height: f32,
        depth: f32,
    },
    Sphere {
        radius: f32,
        width_segments: u32,
        height_segments: u32,
    },
    /// Centered on the origin, axis along +Y
    Cylinder {
        radius_top: f32,
        radius_bottom: f32,
        height: f32,
        radial_segments: u32,
    },
    /// In the XY plane, facing +Z
    Plane {
        width: f32,
        height: f32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Material {
    pub color: Color,
    pub roughness: f32,
    pub opacity: f32,
    /// Only receives shadows, never drawn as a surface
    pub shadow_only: bool,
}

impl Material {
    pub fn standard(color: Color, roughness: f32) -> Self {
        Self {
            color,
            roughness,
            opacity: 1.0,
            shadow_only: false,
        }
    }

    pub fn shadow(opacity: f32) -> Self {
        Self {
            color: Color::hex(0x000000),
            roughness: 1.0,
            opacity,
            shadow_only: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NodeKind {
    Group { children: Vec<SceneNode> },
    Mesh { geometry: Geometry, material: Material },
}

/// A node of the composed 3D scene
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneNode {
    pub name: String,
    pub transform: Transform,
    #[serde(flatten)]
    pub kind: NodeKind,
}

impl SceneNode {
    pub fn group(name: &str, transform: Transform, children: Vec<SceneNode>) -> Self {
        Self {
            name: name.to_string(),
            transform,
            kind: NodeKind::Group { children },
        }
    }

    pub fn mesh(name: &str, transform: Transform, geometry: Geometry, material: Material) -> Self {
        Self {
            name: name.to_string(),
            transform,
            kind: NodeKind::Mesh { geometry, material },
        }
    }

    pub fn children(&self) -> &[SceneNode] {
        match &self.kind {
            NodeKind::Group { children } => children,
            NodeKind::Mesh { .. } => &[],
        }
    }

    /// Nodes in pre-order (self first, then children)
    pub fn iter_preorder(&self) -> impl Iterator<Item = &SceneNode> {
        PreorderNodeIter { stack: vec![self] }
    }

    /// First node with the given name
    pub fn find(&self, name: &str) -> Option<&SceneNode> {
        self.iter_preorder().find(|node| node.name == name)
    }

    /// Number of nodes whose name starts with `prefix`
    pub fn count_named(&self, prefix: &str) -> usize {
        self.iter_preorder().filter(|node| node.name.starts_with(prefix)).count()
    }

    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string(self).map_err(|e| format!("Scene serialization failed: {}", e))
    }
}

struct PreorderNodeIter<'a> {
    stack: Vec<&'a SceneNode>,
}

impl<'a> Iterator for PreorderNodeIter<'a> {
    type Item = &'a SceneNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        for child in node.children().iter().rev() {
            self.stack.push(child);
        }
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(name: &str) -> SceneNode {
        SceneNode::mesh(
            name,
            Transform::default(),
            Geometry::Sphere { radius: 1.0, width_segments: 8, height_segments: 6 },
            Material::standard(Color::hex(0x22c55e), 0.5),
        )
    }

    #[test]
    fn test_preorder_visits_parent_first() {
        let scene = SceneNode::group(
            "root",
            Transform::default(),
            vec![
                SceneNode::group("a", Transform::default(), vec![leaf("a1")]),
                leaf("b"),
            ],
        );

        let names: Vec<&str> = scene.iter_preorder().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["root", "a", "a1", "b"]);
        assert!(scene.find("a1").is_some());
        assert!(scene.find("zzz").is_none());
        assert_eq!(scene.count_named("a"), 2);
    }

    #[test]
    fn test_json_shape() {
        let json = leaf("leaf").to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["name"], "leaf");
        assert_eq!(value["kind"], "mesh");
        assert_eq!(value["geometry"]["type"], "sphere");
        assert_eq!(value["material"]["color"], "#22c55e");
        assert_eq!(value["transform"]["scale"]["x"], 1.0);
    }
}

use crate::math::Vec3;

/// A vertex with position, normal and linear RGB color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub position: Vec3,
    pub normal: Vec3,
    pub color: Vec3,
}

impl Vertex {
    pub fn new(position: Vec3, normal: Vec3) -> Self {
        Self {
            position,
            normal,
            color: Vec3::ONE,
        }
    }

    pub fn with_color(mut self, color: Vec3) -> Self {
        self.color = color;
        self
    }

    /// Layout: position(3) + normal(3) + color(3) = 9 floats
    pub fn to_array(&self) -> [f32; 9] {
        [
            self.position.x, self.position.y, self.position.z,
            self.normal.x, self.normal.y, self.normal.z,
            self.color.x, self.color.y, self.color.z,
        ]
    }
}

/// Floats per vertex in [`Mesh::vertex_data`]
pub const VERTEX_STRIDE: usize = 9;

/// Indexed triangle mesh
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add vertices and return the starting index
    pub fn add_vertices(&mut self, verts: impl IntoIterator<Item = Vertex>) -> u32 {
        let start = self.vertices.len() as u32;
        self.vertices.extend(verts);
        start
    }

    pub fn add_triangle(&mut self, a: u32, b: u32, c: u32) {
        self.indices.extend_from_slice(&[a, b, c]);
    }

    /// Two triangles, CCW
    pub fn add_quad(&mut self, a: u32, b: u32, c: u32, d: u32) {
        self.add_triangle(a, b, c);
        self.add_triangle(a, c, d);
    }

    /// Append another mesh, rebasing its indices
    pub fn merge(&mut self, other: &Mesh) {
        let offset = self.vertices.len() as u32;
        self.vertices.extend(other.vertices.iter().copied());
        self.indices.extend(other.indices.iter().map(|idx| idx + offset));
    }

    /// Map every vertex through `f`
    pub fn map_vertices(&mut self, f: impl Fn(Vertex) -> Vertex) {
        for v in self.vertices.iter_mut() {
            *v = f(*v);
        }
    }

    pub fn vertex_data(&self) -> Vec<f32> {
        self.vertices.iter().flat_map(|v| v.to_array()).collect()
    }

    pub fn index_data(&self) -> &[u32] {
        &self.indices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Ring of vertices around `direction`, normals pointing outward
pub fn create_ring(center: Vec3, direction: Vec3, radius: f32, segments: usize, color: Vec3) -> Vec<Vertex> {
    let tangent = direction.perpendicular();
    let bitangent = direction.cross(&tangent).normalize();

    (0..segments)
        .map(|i| {
            let angle = (i as f32 / segments as f32) * std::f32::consts::TAU;
            let outward = tangent.scale(angle.cos()) + bitangent.scale(angle.sin());
            Vertex::new(center + outward.scale(radius), outward).with_color(color)
        })
        .collect()
}

/// Stitch two rings of equal size with quads
pub fn connect_rings(mesh: &mut Mesh, ring1_start: u32, ring2_start: u32, segments: usize) {
    for i in 0..segments {
        let i_next = (i + 1) % segments;

        let a = ring1_start + i as u32;
        let b = ring1_start + i_next as u32;
        let c = ring2_start + i_next as u32;
        let d = ring2_start + i as u32;

        mesh.add_quad(a, d, c, b);
    }
}

/// Close a ring with a triangle fan around `tip`
pub fn cap_ring(mesh: &mut Mesh, ring_start: u32, segments: usize, tip: Vertex) {
    let tip_idx = mesh.add_vertices(std::iter::once(tip));
    for i in 0..segments {
        let next = (i + 1) % segments;
        mesh.add_triangle(ring_start + i as u32, ring_start + next as u32, tip_idx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_to_array() {
        let v = Vertex::new(Vec3::new(1.0, 2.0, 3.0), Vec3::UP).with_color(Vec3::new(0.2, 0.4, 0.6));

        let arr = v.to_array();
        assert_eq!(arr.len(), VERTEX_STRIDE);
        assert_eq!(arr[0], 1.0);
        assert_eq!(arr[4], 1.0); // normal.y
        assert_eq!(arr[8], 0.6); // blue
    }

    #[test]
    fn test_mesh_merge_rebases_indices() {
        let mut mesh1 = Mesh::new();
        mesh1.add_vertices(vec![Vertex::new(Vec3::ZERO, Vec3::UP)]);
        mesh1.add_triangle(0, 0, 0);

        let mut mesh2 = Mesh::new();
        mesh2.add_vertices(vec![Vertex::new(Vec3::UP, Vec3::UP)]);
        mesh2.add_triangle(0, 0, 0);

        mesh1.merge(&mesh2);
        assert_eq!(mesh1.vertex_count(), 2);
        assert_eq!(mesh1.indices[3], 1);
    }

    #[test]
    fn test_create_ring() {
        let ring = create_ring(Vec3::ZERO, Vec3::UP, 1.0, 8, Vec3::ONE);
        assert_eq!(ring.len(), 8);

        for v in &ring {
            let dist = (v.position.x.powi(2) + v.position.z.powi(2)).sqrt();
            assert!((dist - 1.0).abs() < 0.001);
            assert!(v.position.y.abs() < 1e-6);
        }
    }

    #[test]
    fn test_connect_and_cap() {
        let mut mesh = Mesh::new();
        let start1 = mesh.add_vertices(create_ring(Vec3::ZERO, Vec3::UP, 1.0, 4, Vec3::ONE));
        let start2 = mesh.add_vertices(create_ring(Vec3::UP, Vec3::UP, 0.8, 4, Vec3::ONE));
        connect_rings(&mut mesh, start1, start2, 4);
        assert_eq!(mesh.triangle_count(), 8);

        cap_ring(&mut mesh, start2, 4, Vertex::new(Vec3::UP, Vec3::UP));
        assert_eq!(mesh.vertex_count(), 9);
        assert_eq!(mesh.triangle_count(), 12);
    }

    #[test]
    fn test_vertex_data_is_interleaved() {
        let mut mesh = Mesh::new();
        assert!(mesh.vertex_data().is_empty());
        mesh.add_vertices(vec![
            Vertex::new(Vec3::new(-1.0, 0.0, 0.0), Vec3::UP),
            Vertex::new(Vec3::new(1.0, 0.0, 0.0), Vec3::UP),
        ]);

        let data = mesh.vertex_data();
        assert_eq!(data.len(), 2 * VERTEX_STRIDE);
        assert_eq!(&data[VERTEX_STRIDE..VERTEX_STRIDE + 3], &[1.0, 0.0, 0.0]);
        assert_eq!(&data[VERTEX_STRIDE + 3..VERTEX_STRIDE + 6], &[0.0, 1.0, 0.0]);
    }
}

//! Local-space meshes for each scene geometry

use std::f32::consts::{PI, TAU};

use crate::math::Vec3;
use crate::scene::Geometry;
use super::buffer::{Mesh, Vertex, cap_ring, connect_rings, create_ring};

pub fn generate(geometry: &Geometry, color: Vec3) -> Mesh {
    match *geometry {
        Geometry::Box { width, height, depth } => cuboid(width, height, depth, color),
        Geometry::Sphere { radius, width_segments, height_segments } => {
            sphere(radius, width_segments.max(3) as usize, height_segments.max(2) as usize, color)
        }
        Geometry::Cylinder { radius_top, radius_bottom, height, radial_segments } => {
            cylinder(radius_top, radius_bottom, height, radial_segments.max(3) as usize, color)
        }
        Geometry::Plane { width, height } => plane(width, height, color),
    }
}

fn cuboid(width: f32, height: f32, depth: f32, color: Vec3) -> Mesh {
    let half = Vec3::new(width / 2.0, height / 2.0, depth / 2.0);
    // (normal, u axis, v axis) per face; u x v == normal keeps CCW winding
    let faces = [
        (Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 0.0, -1.0), Vec3::UP),
        (Vec3::new(-1.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 1.0), Vec3::UP),
        (Vec3::UP, Vec3::RIGHT, Vec3::new(0.0, 0.0, -1.0)),
        (Vec3::new(0.0, -1.0, 0.0), Vec3::RIGHT, Vec3::new(0.0, 0.0, 1.0)),
        (Vec3::new(0.0, 0.0, 1.0), Vec3::RIGHT, Vec3::UP),
        (Vec3::new(0.0, 0.0, -1.0), Vec3::new(-1.0, 0.0, 0.0), Vec3::UP),
    ];

    let mut mesh = Mesh::new();
    for (normal, u, v) in faces {
        let center = normal * half;
        let du = u * half;
        let dv = v * half;
        let corners = [
            center - du - dv,
            center + du - dv,
            center + du + dv,
            center - du + dv,
        ];
        let start = mesh.add_vertices(corners.iter().map(|&p| Vertex::new(p, normal).with_color(color)));
        mesh.add_quad(start, start + 1, start + 2, start + 3);
    }
    mesh
}

/// Latitude/longitude sphere with a seam column of duplicated vertices
fn sphere(radius: f32, width_segments: usize, height_segments: usize, color: Vec3) -> Mesh {
    let mut mesh = Mesh::new();
    let row = width_segments + 1;

    for iy in 0..=height_segments {
        let phi = iy as f32 / height_segments as f32 * PI;
        mesh.add_vertices((0..=width_segments).map(|ix| {
            let theta = ix as f32 / width_segments as f32 * TAU;
            let normal = Vec3::new(-theta.cos() * phi.sin(), phi.cos(), theta.sin() * phi.sin());
            Vertex::new(normal.scale(radius), normal).with_color(color)
        }));
    }

    for iy in 0..height_segments {
        for ix in 0..width_segments {
            let a = (iy * row + ix + 1) as u32;
            let b = (iy * row + ix) as u32;
            let c = ((iy + 1) * row + ix) as u32;
            let d = ((iy + 1) * row + ix + 1) as u32;
            // Pole rows collapse to a single triangle
            if iy != 0 {
                mesh.add_triangle(a, b, d);
            }
            if iy != height_segments - 1 {
                mesh.add_triangle(b, c, d);
            }
        }
    }
    mesh
}

/// Capped frustum centered on the origin along +Y
fn cylinder(radius_top: f32, radius_bottom: f32, height: f32, segments: usize, color: Vec3) -> Mesh {
    let mut mesh = Mesh::new();
    let bottom = Vec3::new(0.0, -height / 2.0, 0.0);
    let top = Vec3::new(0.0, height / 2.0, 0.0);

    let bottom_ring = mesh.add_vertices(create_ring(bottom, Vec3::UP, radius_bottom, segments, color));
    let top_ring = mesh.add_vertices(create_ring(top, Vec3::UP, radius_top, segments, color));
    connect_rings(&mut mesh, bottom_ring, top_ring, segments);

    cap_ring(&mut mesh, top_ring, segments, Vertex::new(top, Vec3::UP).with_color(color));
    cap_ring(&mut mesh, bottom_ring, segments, Vertex::new(bottom, -Vec3::UP).with_color(color));
    mesh
}

/// Quad in the XY plane facing +Z
fn plane(width: f32, height: f32, color: Vec3) -> Mesh {
    let (w, h) = (width / 2.0, height / 2.0);
    let normal = Vec3::new(0.0, 0.0, 1.0);
    let mut mesh = Mesh::new();
    let start = mesh.add_vertices(
        [
            Vec3::new(-w, -h, 0.0),
            Vec3::new(w, -h, 0.0),
            Vec3::new(w, h, 0.0),
            Vec3::new(-w, h, 0.0),
        ]
        .into_iter()
        .map(|p| Vertex::new(p, normal).with_color(color)),
    );
    mesh.add_quad(start, start + 1, start + 2, start + 3);
    mesh
}

//! Orthographic projection of solids into screen-space polygons.

use std::f32::consts::TAU;

use glam::{Mat4, Vec3};
use tiny_skia::{Path, PathBuilder};

use gridweave_engine::geometry::{Solid, SolidKind};

/// A projected face, drawn back to front.
pub(super) enum Face {
    Polygon { points: Vec<(f32, f32)>, depth: f32 },
    Disc { center: (f32, f32), radius: f32, depth: f32 },
}

impl Face {
    fn depth(&self) -> f32 {
        match self {
            Face::Polygon { depth, .. } | Face::Disc { depth, .. } => *depth,
        }
    }

    pub(super) fn path(&self) -> Option<Path> {
        match self {
            Face::Polygon { points, .. } => super::polygon(points.iter().copied()),
            Face::Disc { center, radius, .. } => PathBuilder::from_circle(center.0, center.1, *radius),
        }
    }
}

// Cube corners as sign triples and their faces.
const CORNERS: [[f32; 3]; 8] = [
    [-1.0, -1.0, -1.0],
    [1.0, -1.0, -1.0],
    [1.0, 1.0, -1.0],
    [-1.0, 1.0, -1.0],
    [-1.0, -1.0, 1.0],
    [1.0, -1.0, 1.0],
    [1.0, 1.0, 1.0],
    [-1.0, 1.0, 1.0],
];

const FACES: [[usize; 4]; 6] = [
    [0, 1, 2, 3],
    [4, 5, 6, 7],
    [0, 1, 5, 4],
    [3, 2, 6, 7],
    [0, 3, 7, 4],
    [1, 2, 6, 5],
];

/// Projects `solid` under `model` (already including the screen offset).
/// Faces come back sorted far to near.
pub(super) fn project(solid: &Solid, model: Mat4) -> Vec<Face> {
    let mut faces = match solid.kind {
        SolidKind::Box => box_faces(solid.edge() / 2.0, model),
        SolidKind::Sphere => {
            let c = model.transform_point3(Vec3::ZERO);
            vec![Face::Disc { center: (c.x, c.y), radius: solid.radius(), depth: c.z }]
        }
        SolidKind::Torus => torus_samples(solid, model),
    };
    faces.sort_by(|a, b| a.depth().total_cmp(&b.depth()));
    faces
}

fn box_faces(half: f32, model: Mat4) -> Vec<Face> {
    let corners = CORNERS.map(|[x, y, z]| model.transform_point3(Vec3::new(x, y, z) * half));
    FACES
        .iter()
        .map(|face| {
            let depth = face.iter().map(|&i| corners[i].z).sum::<f32>() / 4.0;
            let points = face.iter().map(|&i| (corners[i].x, corners[i].y)).collect();
            Face::Polygon { points, depth }
        })
        .collect()
}

/// Ring of tube cross-sections around the major circle (torus lies in the
/// local XY plane).
fn torus_samples(solid: &Solid, model: Mat4) -> Vec<Face> {
    let samples = solid.detail_x.max(3);
    let major = solid.radius();
    let tube = solid.tube_radius();
    (0..samples)
        .map(|k| {
            let angle = TAU * k as f32 / samples as f32;
            let local = Vec3::new(major * angle.cos(), major * angle.sin(), 0.0);
            let p = model.transform_point3(local);
            Face::Disc { center: (p.x, p.y), radius: tube, depth: p.z }
        })
        .collect()
}

//! Shape geometry.
//!
//! Turns the committed shape settings into a backend-agnostic [`Primitive`].
//! 2D primitives are expressed in a local `size × size` box with its origin at
//! the top-left corner; the render pass translates that box onto the cell.

mod zigzag;

use serde::{Deserialize, Serialize};

pub use zigzag::{zigzag_radius_ratio, zigzag_vertices};

use crate::config::{Shape3dSettings, ShapeKind, ShapeSettings, ZigzagSettings};
use crate::coords::Vec2;

/// Solid families drawn in 3D mode.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SolidKind {
    Box,
    Sphere,
    Torus,
}

/// 3D solid descriptor, centered on the current transform origin.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Solid {
    pub kind: SolidKind,
    pub size: f32,
    pub detail_x: u32,
    pub detail_y: u32,
}

impl Solid {
    /// Edge length of a box.
    #[inline]
    pub fn edge(&self) -> f32 {
        self.size
    }

    /// Sphere radius, or the torus major radius.
    #[inline]
    pub fn radius(&self) -> f32 {
        self.size / 2.0
    }

    /// Torus tube radius.
    #[inline]
    pub fn tube_radius(&self) -> f32 {
        self.size / 4.0
    }
}

/// Geometry descriptor handed to the drawing backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Primitive {
    /// Circle inscribed in the local box, centered at `(d/2, d/2)`.
    Ellipse { diameter: f32 },
    /// Rectangle with its top-left corner at the local origin.
    Rect { width: f32, height: f32 },
    /// Closed outline in local coordinates, in drawing order.
    Polygon { vertices: Vec<Vec2> },
    Solid(Solid),
}

impl Primitive {
    #[inline]
    pub fn is_solid(&self) -> bool {
        matches!(self, Primitive::Solid(_))
    }
}

/// Builds the primitive for one cell.
///
/// `zigzag` must be present for zigzag shapes and `detail` for solids; both are
/// guaranteed by configuration validation. Missing sections fall back to the
/// control panel defaults so the generator stays total.
pub fn geometry(
    shape: &ShapeSettings,
    zigzag: Option<&ZigzagSettings>,
    detail: Option<&Shape3dSettings>,
) -> Primitive {
    let size = shape.size;
    match shape.kind {
        ShapeKind::Circle => Primitive::Ellipse { diameter: size },
        ShapeKind::Square => Primitive::Rect { width: size, height: size },
        ShapeKind::Triangle => Primitive::Polygon {
            vertices: vec![
                Vec2::new(size / 2.0, 0.0),
                Vec2::new(0.0, size),
                Vec2::new(size, size),
            ],
        },
        ShapeKind::Zigzag => {
            let (vertices, depth) = zigzag
                .map(|z| (z.vertices, z.depth_percent))
                .unwrap_or((DEFAULT_ZIGZAG_VERTICES, DEFAULT_ZIGZAG_DEPTH));
            Primitive::Polygon { vertices: zigzag_vertices(size, vertices, depth) }
        }
        ShapeKind::Box => solid(SolidKind::Box, size, detail),
        ShapeKind::Sphere => solid(SolidKind::Sphere, size, detail),
        ShapeKind::Torus => solid(SolidKind::Torus, size, detail),
    }
}

const DEFAULT_ZIGZAG_VERTICES: u32 = 20;
const DEFAULT_ZIGZAG_DEPTH: f32 = 10.0;
const DEFAULT_DETAIL: (u32, u32) = (24, 16);

fn solid(kind: SolidKind, size: f32, detail: Option<&Shape3dSettings>) -> Primitive {
    let (detail_x, detail_y) = detail.map(|d| (d.detail_x, d.detail_y)).unwrap_or(DEFAULT_DETAIL);
    Primitive::Solid(Solid { kind, size, detail_x, detail_y })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Color;

    fn shape(kind: ShapeKind, size: f32) -> ShapeSettings {
        ShapeSettings {
            kind,
            size,
            stroke_color: Color::BLACK,
            fill_color: Color::rgb(255, 0, 0),
            stroke_weight: 1.0,
        }
    }

    fn detail() -> Shape3dSettings {
        Shape3dSettings { rotation_x: 0.0, rotation_y: 0.0, rotation_z: 0.0, detail_x: 12, detail_y: 8 }
    }

    #[test]
    fn circle_is_ellipse_of_size() {
        assert_eq!(
            geometry(&shape(ShapeKind::Circle, 30.0), None, None),
            Primitive::Ellipse { diameter: 30.0 }
        );
    }

    #[test]
    fn square_is_size_by_size_rect() {
        assert_eq!(
            geometry(&shape(ShapeKind::Square, 12.0), None, None),
            Primitive::Rect { width: 12.0, height: 12.0 }
        );
    }

    #[test]
    fn triangle_is_inscribed_in_box() {
        let Primitive::Polygon { vertices } = geometry(&shape(ShapeKind::Triangle, 40.0), None, None)
        else {
            panic!("triangle should be a polygon");
        };
        assert_eq!(
            vertices,
            [Vec2::new(20.0, 0.0), Vec2::new(0.0, 40.0), Vec2::new(40.0, 40.0)]
        );
    }

    #[test]
    fn zigzag_uses_its_section() {
        let z = ZigzagSettings { vertices: 4, depth_percent: 50.0 };
        let Primitive::Polygon { vertices } = geometry(&shape(ShapeKind::Zigzag, 40.0), Some(&z), None)
        else {
            panic!("zigzag should be a polygon");
        };
        assert_eq!(vertices.len(), 5);
    }

    #[test]
    fn solids_carry_detail() {
        let prim = geometry(&shape(ShapeKind::Box, 50.0), None, Some(&detail()));
        assert_eq!(
            prim,
            Primitive::Solid(Solid { kind: SolidKind::Box, size: 50.0, detail_x: 12, detail_y: 8 })
        );
        assert!(prim.is_solid());
    }

    #[test]
    fn torus_radii_are_half_and_quarter_size() {
        let Primitive::Solid(torus) = geometry(&shape(ShapeKind::Torus, 80.0), None, Some(&detail()))
        else {
            panic!("torus should be a solid");
        };
        assert_eq!(torus.kind, SolidKind::Torus);
        assert_eq!(torus.radius(), 40.0);
        assert_eq!(torus.tube_radius(), 20.0);
    }

    #[test]
    fn sphere_radius_is_half_size() {
        let Primitive::Solid(sphere) = geometry(&shape(ShapeKind::Sphere, 30.0), None, None) else {
            panic!("sphere should be a solid");
        };
        assert_eq!(sphere.radius(), 15.0);
        assert_eq!((sphere.detail_x, sphere.detail_y), (24, 16));
    }
}

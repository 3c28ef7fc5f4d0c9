use serde::{Deserialize, Serialize};

/// 2D point in logical pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Point on a circle of `radius` around `center`, angle in degrees.
    #[inline]
    pub fn polar_deg(center: Vec2, radius: f32, degrees: f32) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Vec2::new(center.x + radius * cos, center.y + radius * sin)
    }
}

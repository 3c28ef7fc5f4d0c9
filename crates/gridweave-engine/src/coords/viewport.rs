use serde::{Deserialize, Serialize};

/// Canvas size in logical pixels.
///
/// 2D layout divides this area into cells; 3D layout ignores it and centers
/// the grid on the canvas midpoint instead.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Largest accepted side, in logical pixels.
    pub const MAX_SIDE: f32 = 16_384.0;

    /// Both sides finite and in `[1, MAX_SIDE]`.
    #[inline]
    pub fn is_valid(self) -> bool {
        let side = |v: f32| (1.0..=Self::MAX_SIDE).contains(&v);
        side(self.width) && side(self.height)
    }

    /// Pixel dimensions for surface allocation (rounded, at least 1).
    #[inline]
    pub fn pixel_size(self) -> (u32, u32) {
        (self.width.round().max(1.0) as u32, self.height.round().max(1.0) as u32)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(600.0, 600.0)
    }
}

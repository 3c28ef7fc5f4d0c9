//! Coordinate types shared by the layout, geometry and render passes.
//!
//! Canonical spaces:
//! - 2D canvas: logical pixels, origin top-left, +X right, +Y down
//! - 3D scene: origin at the canvas center, same axis directions, +Z toward the viewer
//!
//! Primitive vertices live in a local `size × size` box; the render pass
//! translates that box onto each cell anchor.

mod vec2;
mod vec3;
mod viewport;

pub use vec2::Vec2;
pub use vec3::Vec3;
pub use viewport::Viewport;

//! Render pass.
//!
//! A frame is computed in full from the committed configuration
//! ([`build_frame`]) before anything reaches the drawing backend, then issued
//! instruction by instruction in cell order ([`Renderer`]).
//!
//! Convention:
//! - 2D coordinates are canvas pixels (top-left origin, +Y down).
//! - 3D coordinates are relative to the canvas center; backends project them.
//! - Angles crossing the backend boundary are radians.

mod backend;
mod frame;
mod renderer;

pub mod recording;

pub use backend::{DrawingBackend, PatternBackend, SurfaceHandle, SurfaceSpec};
pub use frame::{Frame, build_frame};
pub use renderer::{FrameReport, Renderer};

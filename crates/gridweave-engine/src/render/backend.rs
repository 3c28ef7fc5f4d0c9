use serde::{Deserialize, Serialize};

use crate::config::Mode;
use crate::coords::{Vec3, Viewport};
use crate::error::BackendError;
use crate::geometry::Primitive;
use crate::paint::{Color, Stroke};
use crate::pattern::PatternFillRequest;

/// Opaque id of a surface created by a [`DrawingBackend`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SurfaceHandle(u64);

impl SurfaceHandle {
    #[inline]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[inline]
    pub const fn id(self) -> u64 {
        self.0
    }
}

/// What a surface was created for. A frame with a different spec needs a new
/// surface.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceSpec {
    pub width: u32,
    pub height: u32,
    pub mode: Mode,
}

impl SurfaceSpec {
    #[inline]
    pub fn new(canvas: Viewport, mode: Mode) -> Self {
        let (width, height) = canvas.pixel_size();
        Self { width, height, mode }
    }
}

/// Drawing capability supplied by the host.
///
/// Drawing calls target the most recently created surface. `clear` also
/// resets the transform stack, so every frame starts from identity.
pub trait DrawingBackend {
    /// Fails with [`BackendError::Unavailable`] until the host has finished
    /// loading the backend.
    fn create_surface(&mut self, spec: SurfaceSpec) -> Result<SurfaceHandle, BackendError>;

    fn dispose(&mut self, surface: SurfaceHandle);

    fn clear(&mut self, color: Color) -> Result<(), BackendError>;

    fn push(&mut self);
    fn pop(&mut self);
    fn translate(&mut self, offset: Vec3);
    fn rotate_x(&mut self, radians: f32);
    fn rotate_y(&mut self, radians: f32);
    fn rotate_z(&mut self, radians: f32);

    fn set_stroke(&mut self, stroke: Stroke);

    /// `None` draws outlines only.
    fn set_fill(&mut self, color: Option<Color>);

    fn draw(&mut self, primitive: &Primitive) -> Result<(), BackendError>;
}

/// Optional procedural fill capability.
///
/// Fills `outline` (in the current local transform) on `surface`. The drawing
/// backend strokes the outline afterwards.
pub trait PatternBackend {
    fn fill_pattern(&mut self, surface: SurfaceHandle, request: &PatternFillRequest, outline: &Primitive);
}

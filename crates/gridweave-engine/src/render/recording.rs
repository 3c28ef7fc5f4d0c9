//! Recording backends.
//!
//! Keep every call instead of drawing. Used by tests and by hosts that want
//! to inspect a frame without rasterizing it.

use std::cell::RefCell;
use std::rc::Rc;

use serde::Serialize;

use super::{DrawingBackend, PatternBackend, SurfaceHandle, SurfaceSpec};
use crate::coords::Vec3;
use crate::error::BackendError;
use crate::geometry::Primitive;
use crate::paint::{Color, Stroke};
use crate::pattern::PatternFillRequest;

/// One recorded [`DrawingBackend`] call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "call", rename_all = "camelCase")]
pub enum BackendCall {
    CreateSurface { handle: SurfaceHandle, spec: SurfaceSpec },
    Dispose { handle: SurfaceHandle },
    Clear { color: Color },
    Push,
    Pop,
    Translate { offset: Vec3 },
    RotateX { radians: f32 },
    RotateY { radians: f32 },
    RotateZ { radians: f32 },
    SetStroke { stroke: Stroke },
    SetFill { color: Option<Color> },
    Draw { primitive: Primitive },
}

impl BackendCall {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCall::CreateSurface { .. } => "createSurface",
            BackendCall::Dispose { .. } => "dispose",
            BackendCall::Clear { .. } => "clear",
            BackendCall::Push => "push",
            BackendCall::Pop => "pop",
            BackendCall::Translate { .. } => "translate",
            BackendCall::RotateX { .. } => "rotateX",
            BackendCall::RotateY { .. } => "rotateY",
            BackendCall::RotateZ { .. } => "rotateZ",
            BackendCall::SetStroke { .. } => "setStroke",
            BackendCall::SetFill { .. } => "setFill",
            BackendCall::Draw { .. } => "draw",
        }
    }
}

/// [`DrawingBackend`] that records calls in order.
#[derive(Debug)]
pub struct RecordingBackend {
    calls: Vec<BackendCall>,
    available: bool,
    creation_failure: Option<String>,
    next_handle: u64,
    live: Vec<SurfaceHandle>,
    depth: usize,
}

impl Default for RecordingBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            available: true,
            creation_failure: None,
            next_handle: 1,
            live: Vec::new(),
            depth: 0,
        }
    }

    /// A backend that is still loading: surface creation fails with
    /// [`BackendError::Unavailable`] until [`set_available`](Self::set_available).
    pub fn unavailable() -> Self {
        Self { available: false, ..Self::new() }
    }

    pub fn set_available(&mut self, available: bool) {
        self.available = available;
    }

    /// Makes the next surface creation fail with `reason`.
    pub fn fail_surface_creation(&mut self, reason: &str) {
        self.creation_failure = Some(reason.to_string());
    }

    #[inline]
    pub fn calls(&self) -> &[BackendCall] {
        &self.calls
    }

    #[inline]
    pub fn live_surfaces(&self) -> usize {
        self.live.len()
    }

    /// Number of `draw` calls recorded so far.
    pub fn draw_count(&self) -> usize {
        self.calls.iter().filter(|c| matches!(c, BackendCall::Draw { .. })).count()
    }

    fn current(&self) -> Result<SurfaceHandle, BackendError> {
        self.live.last().copied().ok_or(BackendError::InvalidSurface)
    }
}

impl DrawingBackend for RecordingBackend {
    fn create_surface(&mut self, spec: SurfaceSpec) -> Result<SurfaceHandle, BackendError> {
        if !self.available {
            return Err(BackendError::Unavailable);
        }
        if let Some(reason) = self.creation_failure.take() {
            return Err(BackendError::SurfaceCreation(reason));
        }
        let handle = SurfaceHandle::new(self.next_handle);
        self.next_handle += 1;
        self.live.push(handle);
        self.calls.push(BackendCall::CreateSurface { handle, spec });
        Ok(handle)
    }

    fn dispose(&mut self, surface: SurfaceHandle) {
        self.live.retain(|h| *h != surface);
        self.calls.push(BackendCall::Dispose { handle: surface });
    }

    fn clear(&mut self, color: Color) -> Result<(), BackendError> {
        self.current()?;
        self.depth = 0;
        self.calls.push(BackendCall::Clear { color });
        Ok(())
    }

    fn push(&mut self) {
        self.depth += 1;
        self.calls.push(BackendCall::Push);
    }

    fn pop(&mut self) {
        debug_assert!(self.depth > 0, "pop without matching push");
        self.depth = self.depth.saturating_sub(1);
        self.calls.push(BackendCall::Pop);
    }

    fn translate(&mut self, offset: Vec3) {
        self.calls.push(BackendCall::Translate { offset });
    }

    fn rotate_x(&mut self, radians: f32) {
        self.calls.push(BackendCall::RotateX { radians });
    }

    fn rotate_y(&mut self, radians: f32) {
        self.calls.push(BackendCall::RotateY { radians });
    }

    fn rotate_z(&mut self, radians: f32) {
        self.calls.push(BackendCall::RotateZ { radians });
    }

    fn set_stroke(&mut self, stroke: Stroke) {
        self.calls.push(BackendCall::SetStroke { stroke });
    }

    fn set_fill(&mut self, color: Option<Color>) {
        self.calls.push(BackendCall::SetFill { color });
    }

    fn draw(&mut self, primitive: &Primitive) -> Result<(), BackendError> {
        self.current()?;
        self.calls.push(BackendCall::Draw { primitive: primitive.clone() });
        Ok(())
    }
}

/// One recorded pattern fill.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatternFill {
    pub surface: SurfaceHandle,
    pub request: PatternFillRequest,
    pub outline: Primitive,
}

/// [`PatternBackend`] that records fills.
///
/// Clones share one log, so a test can keep a handle after boxing the backend
/// into a renderer.
#[derive(Debug, Clone, Default)]
pub struct RecordingPatternBackend {
    fills: Rc<RefCell<Vec<PatternFill>>>,
}

impl RecordingPatternBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fills(&self) -> Vec<PatternFill> {
        self.fills.borrow().clone()
    }
}

impl PatternBackend for RecordingPatternBackend {
    fn fill_pattern(&mut self, surface: SurfaceHandle, request: &PatternFillRequest, outline: &Primitive) {
        self.fills.borrow_mut().push(PatternFill {
            surface,
            request: request.clone(),
            outline: outline.clone(),
        });
    }
}

use serde::Serialize;

use super::{DrawingBackend, Frame, PatternBackend, SurfaceHandle, SurfaceSpec, build_frame};
use crate::config::Configuration;
use crate::core::SketchOptions;
use crate::error::RenderError;

/// Summary of an issued frame.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct FrameReport {
    pub surface: SurfaceHandle,
    pub cells: usize,
    /// Cells filled by the pattern backend.
    pub patterned: usize,
    /// Cells that asked for a pattern but got their flat fallback.
    pub fallbacks: usize,
}

/// Issues frames to a drawing backend.
///
/// Owns the backend and the single active surface. The surface is created on
/// the first frame and replaced only when the canvas size or mode changes;
/// the old surface is always disposed before the new one is created.
pub struct Renderer<B: DrawingBackend> {
    backend: B,
    patterns: Option<Box<dyn PatternBackend>>,
    surface: Option<(SurfaceHandle, SurfaceSpec)>,
    frames: u64,
}

impl<B: DrawingBackend + std::fmt::Debug> std::fmt::Debug for Renderer<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer")
            .field("backend", &self.backend)
            .field("patterns", &self.patterns.is_some())
            .field("surface", &self.surface)
            .field("frames", &self.frames)
            .finish()
    }
}

impl<B: DrawingBackend> Renderer<B> {
    pub fn new(backend: B) -> Self {
        Self { backend, patterns: None, surface: None, frames: 0 }
    }

    /// Injects the optional pattern capability.
    pub fn with_pattern_backend(mut self, patterns: Box<dyn PatternBackend>) -> Self {
        self.patterns = Some(patterns);
        self
    }

    #[inline]
    pub fn has_pattern_backend(&self) -> bool {
        self.patterns.is_some()
    }

    #[inline]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    #[inline]
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    #[inline]
    pub fn surface(&self) -> Option<SurfaceHandle> {
        self.surface.map(|(handle, _)| handle)
    }

    #[inline]
    pub fn frames_rendered(&self) -> u64 {
        self.frames
    }

    /// Builds and issues one frame for `config`.
    ///
    /// Resolution errors abandon the frame before the surface is touched.
    pub fn render_frame(
        &mut self,
        config: &Configuration,
        options: &SketchOptions,
    ) -> Result<FrameReport, RenderError> {
        let frame = build_frame(config, options.canvas, options.background)?;
        self.issue(&frame)
    }

    /// Issues a prebuilt frame in cell order.
    pub fn issue(&mut self, frame: &Frame) -> Result<FrameReport, RenderError> {
        let surface = self.ensure_surface(frame.surface)?;
        let backend = &mut self.backend;

        backend.clear(frame.background)?;

        if let Some(rotation) = frame.rotation {
            backend.rotate_x(rotation.x);
            backend.rotate_y(rotation.y);
            backend.rotate_z(rotation.z);
        }

        let mut report = FrameReport {
            surface,
            cells: frame.instructions.len(),
            patterned: 0,
            fallbacks: 0,
        };

        for instruction in &frame.instructions {
            backend.push();
            backend.translate(instruction.origin);
            backend.set_stroke(instruction.stroke);

            let request = instruction
                .fill
                .pattern_request()
                .filter(|_| !instruction.geometry.is_solid());
            match (request, self.patterns.as_deref_mut()) {
                (Some(request), Some(patterns)) => {
                    patterns.fill_pattern(surface, request, &instruction.geometry);
                    backend.set_fill(None);
                    report.patterned += 1;
                }
                (Some(_), None) => {
                    backend.set_fill(Some(instruction.fill.flat_color()));
                    report.fallbacks += 1;
                }
                (None, _) => backend.set_fill(Some(instruction.fill.flat_color())),
            }

            let drawn = backend.draw(&instruction.geometry);
            backend.pop();
            drawn?;
        }

        if report.fallbacks > 0 {
            log::warn!(
                "no pattern backend available; {} cells drawn with flat fill",
                report.fallbacks
            );
        }

        self.frames += 1;
        log::debug!("frame {} issued: {} cells", self.frames, report.cells);
        Ok(report)
    }

    /// Disposes the active surface, if any.
    pub fn release_surface(&mut self) {
        if let Some((handle, spec)) = self.surface.take() {
            log::info!("disposing surface {} ({}x{} {})", handle.id(), spec.width, spec.height, spec.mode);
            self.backend.dispose(handle);
        }
    }

    fn ensure_surface(&mut self, spec: SurfaceSpec) -> Result<SurfaceHandle, RenderError> {
        if let Some((handle, current)) = self.surface {
            if current == spec {
                return Ok(handle);
            }
        }

        self.release_surface();

        let handle = self.backend.create_surface(spec)?;
        log::info!("created surface {} ({}x{} {})", handle.id(), spec.width, spec.height, spec.mode);
        self.surface = Some((handle, spec));
        Ok(handle)
    }
}

impl<B: DrawingBackend> Drop for Renderer<B> {
    fn drop(&mut self) {
        self.release_surface();
    }
}

use crate::config::{Configuration, DraftField, DraftSettings, FieldValue};
use crate::error::{EngineError, RenderError, ValidationError};
use crate::render::{DrawingBackend, FrameReport, PatternBackend, Renderer};
use crate::staging::StagingController;

use super::SketchOptions;

/// Whether the drawing backend can accept a surface yet.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Readiness {
    Waiting,
    Ready,
}

/// Result of a successful commit.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    /// The new configuration was drawn.
    Rendered(FrameReport),
    /// The backend is not ready; the frame runs on the readiness signal.
    Deferred,
}

/// Staging plus rendering, driven by commits.
///
/// Frames are requested only by [`commit`](Self::commit) and by the initial
/// configuration. At most one frame is pending at a time: a commit while
/// waiting for the backend replaces the pending request instead of queuing
/// another.
#[derive(Debug)]
pub struct Sketch<B: DrawingBackend> {
    staging: StagingController,
    renderer: Renderer<B>,
    options: SketchOptions,
    readiness: Readiness,
    pending: bool,
    last_frame: Option<FrameReport>,
}

impl<B: DrawingBackend> Sketch<B> {
    /// Creates a sketch with the default draft committed. The first frame is
    /// pending until [`notify_backend_ready`](Self::notify_backend_ready).
    pub fn new(backend: B, options: SketchOptions) -> Self {
        Self::with_staging(backend, options, StagingController::default())
    }

    /// Like [`new`](Self::new), with `draft` as the initial configuration.
    pub fn with_draft(
        backend: B,
        options: SketchOptions,
        draft: DraftSettings,
    ) -> Result<Self, ValidationError> {
        Ok(Self::with_staging(backend, options, StagingController::new(draft)?))
    }

    fn with_staging(backend: B, options: SketchOptions, staging: StagingController) -> Self {
        Self {
            staging,
            renderer: Renderer::new(backend),
            options,
            readiness: Readiness::Waiting,
            pending: true,
            last_frame: None,
        }
    }

    /// Injects the optional pattern capability.
    pub fn with_pattern_backend(mut self, patterns: Box<dyn PatternBackend>) -> Self {
        self.renderer = self.renderer.with_pattern_backend(patterns);
        self
    }

    #[inline]
    pub fn draft(&self) -> &DraftSettings {
        self.staging.draft()
    }

    #[inline]
    pub fn committed(&self) -> &Configuration {
        self.staging.committed()
    }

    #[inline]
    pub fn options(&self) -> &SketchOptions {
        &self.options
    }

    #[inline]
    pub fn renderer(&self) -> &Renderer<B> {
        &self.renderer
    }

    #[inline]
    pub fn renderer_mut(&mut self) -> &mut Renderer<B> {
        &mut self.renderer
    }

    #[inline]
    pub fn readiness(&self) -> Readiness {
        self.readiness
    }

    #[inline]
    pub fn has_pending_frame(&self) -> bool {
        self.pending
    }

    /// Report of the last frame that was fully issued.
    #[inline]
    pub fn last_frame(&self) -> Option<FrameReport> {
        self.last_frame
    }

    /// Edits one draft field. Never renders.
    pub fn apply_draft_edit(
        &mut self,
        field: DraftField,
        value: impl Into<FieldValue>,
    ) -> Result<(), ValidationError> {
        self.staging.apply_draft_edit(field, value.into())
    }

    /// Edits a draft field by its control name (`"columns"`, `"is3D"`, ...).
    pub fn apply_named_edit(
        &mut self,
        name: &str,
        value: impl Into<FieldValue>,
    ) -> Result<(), ValidationError> {
        let field: DraftField = name.parse()?;
        self.apply_draft_edit(field, value)
    }

    /// Commits the draft and renders one frame for it.
    ///
    /// A validation error leaves the committed configuration and any pending
    /// frame untouched. A render error abandons the frame; whatever the last
    /// successful frame drew stays on the surface.
    pub fn commit(&mut self) -> Result<CommitOutcome, EngineError> {
        self.staging.commit()?;
        self.pending = true;
        match self.flush()? {
            Some(report) => Ok(CommitOutcome::Rendered(report)),
            None => Ok(CommitOutcome::Deferred),
        }
    }

    /// One-shot signal from the host that the drawing backend is loaded.
    /// Runs the pending frame, if any.
    pub fn notify_backend_ready(&mut self) -> Result<Option<FrameReport>, EngineError> {
        if self.readiness == Readiness::Waiting {
            log::info!("drawing backend ready");
        }
        self.readiness = Readiness::Ready;
        self.flush()
    }

    fn flush(&mut self) -> Result<Option<FrameReport>, EngineError> {
        if !self.pending {
            return Ok(None);
        }
        if self.readiness == Readiness::Waiting {
            log::debug!("backend not ready; frame pending");
            return Ok(None);
        }

        match self.renderer.render_frame(self.staging.committed(), &self.options) {
            Ok(report) => {
                self.pending = false;
                self.last_frame = Some(report);
                Ok(Some(report))
            }
            Err(RenderError::BackendUnavailable) => {
                log::info!("drawing backend unavailable; waiting for readiness signal");
                self.readiness = Readiness::Waiting;
                Ok(None)
            }
            Err(e) => {
                self.pending = false;
                log::warn!("frame abandoned: {e}");
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Mode, ShapeKind};
    use crate::coords::{Vec3, Viewport};
    use crate::render::recording::{BackendCall, RecordingBackend, RecordingPatternBackend};

    fn ready_sketch() -> Sketch<RecordingBackend> {
        let mut sketch = Sketch::new(RecordingBackend::new(), SketchOptions::default());
        sketch.notify_backend_ready().unwrap();
        sketch
    }

    fn draws(sketch: &Sketch<RecordingBackend>) -> usize {
        sketch.renderer().backend().draw_count()
    }

    // ── readiness ─────────────────────────────────────────────────────────

    #[test]
    fn initial_frame_waits_for_readiness() {
        let mut sketch = Sketch::new(RecordingBackend::new(), SketchOptions::default());
        assert!(sketch.has_pending_frame());
        assert_eq!(draws(&sketch), 0);

        let report = sketch.notify_backend_ready().unwrap().unwrap();
        assert_eq!(report.cells, 25);
        assert!(!sketch.has_pending_frame());
        assert_eq!(sketch.readiness(), Readiness::Ready);
    }

    #[test]
    fn commits_before_readiness_collapse_into_one_frame() {
        let mut sketch = Sketch::new(RecordingBackend::new(), SketchOptions::default());
        sketch.apply_draft_edit(DraftField::Columns, 2u32).unwrap();
        assert_eq!(sketch.commit().unwrap(), CommitOutcome::Deferred);
        sketch.apply_draft_edit(DraftField::Columns, 3u32).unwrap();
        assert_eq!(sketch.commit().unwrap(), CommitOutcome::Deferred);

        let report = sketch.notify_backend_ready().unwrap().unwrap();
        assert_eq!(report.cells, 15);
        assert_eq!(sketch.renderer().frames_rendered(), 1);

        // A repeated signal with nothing pending draws nothing.
        assert!(sketch.notify_backend_ready().unwrap().is_none());
        assert_eq!(sketch.renderer().frames_rendered(), 1);
    }

    #[test]
    fn unavailable_backend_defers_instead_of_failing() {
        let mut sketch = Sketch::new(RecordingBackend::unavailable(), SketchOptions::default());
        assert!(sketch.notify_backend_ready().unwrap().is_none());
        assert_eq!(sketch.readiness(), Readiness::Waiting);
        assert!(sketch.has_pending_frame());

        sketch.renderer_mut().backend_mut().set_available(true);
        assert!(sketch.notify_backend_ready().unwrap().is_some());
    }

    // ── staging ───────────────────────────────────────────────────────────

    #[test]
    fn draft_edits_never_render() {
        let mut sketch = ready_sketch();
        let before = sketch.renderer().frames_rendered();
        for columns in 1..=10u32 {
            sketch.apply_draft_edit(DraftField::Columns, columns).unwrap();
        }
        sketch.apply_named_edit("shapeSize", 50.0).unwrap();
        assert_eq!(sketch.renderer().frames_rendered(), before);
        assert_eq!(sketch.committed().grid.columns, 5);
    }

    #[test]
    fn each_commit_renders_exactly_one_frame() {
        let mut sketch = ready_sketch();
        sketch.apply_draft_edit(DraftField::Rows, 2u32).unwrap();
        let CommitOutcome::Rendered(report) = sketch.commit().unwrap() else {
            panic!("ready sketch should render on commit");
        };
        assert_eq!(report.cells, 10);
        assert_eq!(sketch.renderer().frames_rendered(), 2);
    }

    #[test]
    fn invalid_commit_keeps_committed_configuration() {
        let mut sketch = ready_sketch();
        sketch.apply_draft_edit(DraftField::Is3d, true).unwrap();
        let err = sketch.commit().unwrap_err();
        assert!(matches!(err, EngineError::Validation(ValidationError::ShapeModeMismatch { .. })));
        assert_eq!(sketch.committed().mode, Mode::TwoD);
        assert_eq!(sketch.renderer().frames_rendered(), 1);
    }

    #[test]
    fn huge_grid_is_rejected_without_rendering() {
        let mut sketch = ready_sketch();
        assert!(matches!(
            sketch.apply_draft_edit(DraftField::Columns, u32::MAX),
            Err(ValidationError::OutOfRange { .. })
        ));

        sketch.apply_draft_edit(DraftField::Columns, 1000u32).unwrap();
        sketch.apply_draft_edit(DraftField::Rows, 1000u32).unwrap();
        let err = sketch.commit().unwrap_err();
        assert!(matches!(err, EngineError::Validation(ValidationError::OutOfRange { .. })));
        assert_eq!(sketch.committed().grid.columns, 5);
        assert_eq!(sketch.committed().grid.rows, 5);
        assert_eq!(sketch.renderer().frames_rendered(), 1);
    }

    #[test]
    fn degenerate_canvas_fails_the_frame() {
        let options = SketchOptions { canvas: Viewport::new(-100.0, 600.0), ..SketchOptions::default() };
        let mut sketch = Sketch::new(RecordingBackend::new(), options);
        assert!(matches!(
            sketch.notify_backend_ready(),
            Err(EngineError::Render(RenderError::InvalidConfiguration(_)))
        ));
        assert_eq!(draws(&sketch), 0);
    }

    #[test]
    fn unknown_named_field_is_rejected() {
        let mut sketch = ready_sketch();
        assert_eq!(
            sketch.apply_named_edit("opacity", 0.5).unwrap_err(),
            ValidationError::UnknownField("opacity".into())
        );
    }

    #[test]
    fn switch_to_3d_grid_of_spheres() {
        let mut sketch = ready_sketch();
        sketch.apply_draft_edit(DraftField::Is3d, true).unwrap();
        sketch.apply_draft_edit(DraftField::ShapeType, "sphere").unwrap();
        sketch.apply_draft_edit(DraftField::Columns, 2u32).unwrap();
        sketch.apply_draft_edit(DraftField::Rows, 2u32).unwrap();
        sketch.commit().unwrap();

        assert_eq!(sketch.committed().shape.kind, ShapeKind::Sphere);
        let origins: Vec<Vec3> = sketch
            .renderer()
            .backend()
            .calls()
            .iter()
            .rev()
            .filter_map(|c| match c {
                BackendCall::Translate { offset } => Some(*offset),
                _ => None,
            })
            .take(4)
            .collect();
        assert_eq!(
            origins,
            [
                Vec3::new(50.0, 50.0, 0.0),
                Vec3::new(50.0, -50.0, 0.0),
                Vec3::new(-50.0, 50.0, 0.0),
                Vec3::new(-50.0, -50.0, 0.0),
            ]
        );
        // Mode change recreates the surface.
        assert_eq!(sketch.renderer().backend().live_surfaces(), 1);
        assert!(
            sketch
                .renderer()
                .backend()
                .calls()
                .iter()
                .any(|c| matches!(c, BackendCall::Dispose { .. }))
        );
    }

    // ── abandoned frames ──────────────────────────────────────────────────

    #[test]
    fn unknown_pattern_keeps_last_frame() {
        let mut sketch = ready_sketch();
        let good = sketch.last_frame().unwrap();
        let calls_before = sketch.renderer().backend().calls().len();

        sketch.apply_draft_edit(DraftField::UsePattern, true).unwrap();
        sketch.apply_draft_edit(DraftField::PatternType, "unknownXYZ").unwrap();
        let err = sketch.commit().unwrap_err();

        assert_eq!(
            err,
            EngineError::Render(RenderError::UnsupportedPatternKind("unknownXYZ".into()))
        );
        assert_eq!(sketch.last_frame(), Some(good));
        assert_eq!(sketch.renderer().backend().calls().len(), calls_before);
        assert!(!sketch.has_pending_frame());
    }

    #[test]
    fn pattern_backend_receives_every_cell() {
        let patterns = RecordingPatternBackend::new();
        let mut sketch = Sketch::new(RecordingBackend::new(), SketchOptions::default())
            .with_pattern_backend(Box::new(patterns.clone()));
        sketch.notify_backend_ready().unwrap();

        sketch.apply_draft_edit(DraftField::UsePattern, true).unwrap();
        sketch.apply_draft_edit(DraftField::PatternType, "wave").unwrap();
        sketch.commit().unwrap();

        let fills = patterns.fills();
        assert_eq!(fills.len(), 25);
        assert!(fills.iter().all(|f| Some(f.surface) == sketch.renderer().surface()));
    }
}

//! Error types for the grid-pattern engine.
//!
//! Validation failures are caught while staging edits and committing the
//! draft; render failures abandon a single frame and leave the previously
//! presented frame untouched.

use thiserror::Error;

/// A draft edit or commit was rejected. The draft (or committed configuration)
/// is left exactly as it was.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// The input surface named a field the draft does not have.
    #[error("unknown draft field: {0}")]
    UnknownField(String),

    /// The value kind does not fit the field.
    #[error("field '{field}' expects {expected}")]
    TypeMismatch { field: String, expected: &'static str },

    /// The value is outside the field's domain.
    #[error("field '{field}' out of range: {value} (expected {constraint})")]
    OutOfRange {
        field: String,
        value: f64,
        constraint: String,
    },

    #[error("unknown shape kind: {0}")]
    UnknownShapeKind(String),

    #[error("invalid color: {0:?}")]
    InvalidColor(String),

    /// A 2D shape was committed in 3D mode or the other way round.
    #[error("shape '{shape}' is not available in {mode} mode")]
    ShapeModeMismatch { shape: String, mode: String },
}

/// Failures reported by a drawing backend.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BackendError {
    /// The host has not delivered (or has revoked) its readiness signal.
    #[error("drawing backend is not available")]
    Unavailable,

    #[error("failed to create surface: {0}")]
    SurfaceCreation(String),

    #[error("surface handle is not owned by this backend")]
    InvalidSurface,
}

/// A frame was abandoned. Resolution errors are raised before any draw
/// operation is issued.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    /// The committed configuration names a pattern kind the resolver does not know.
    #[error("unsupported pattern kind: {0:?}")]
    UnsupportedPatternKind(String),

    /// A configuration built without going through the draft broke an
    /// invariant (for example an oversized grid).
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(ValidationError),

    /// The backend reported itself unavailable; the frame stays pending.
    #[error("drawing backend unavailable")]
    BackendUnavailable,

    #[error(transparent)]
    Backend(BackendError),
}

impl From<BackendError> for RenderError {
    fn from(err: BackendError) -> Self {
        match err {
            BackendError::Unavailable => RenderError::BackendUnavailable,
            other => RenderError::Backend(other),
        }
    }
}

/// Errors surfaced to the configuration layer.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

//! Configuration model.
//!
//! Two representations:
//! - [`DraftSettings`]: flat, field-editable form fed by the input surface.
//!   It keeps values for every control, including ones the current mode hides.
//! - [`Configuration`]: validated, immutable snapshot the render pass reads.
//!   Optional sections exist only when they apply (`shape3d` iff 3D, `zigzag`
//!   iff the shape is a zigzag, `pattern` iff patterns are enabled).

mod draft;
mod field;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use draft::DraftSettings;
pub use field::{Constraint, DraftField, FieldRange, FieldValue, ValueKind};

use crate::error::ValidationError;
use crate::paint::Color;
use crate::pattern::PatternParams;

// ── Mode ──────────────────────────────────────────────────────────────────

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mode {
    #[default]
    TwoD,
    ThreeD,
}

impl Mode {
    #[inline]
    pub fn from_is_3d(is_3d: bool) -> Self {
        if is_3d { Mode::ThreeD } else { Mode::TwoD }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mode::TwoD => "2D",
            Mode::ThreeD => "3D",
        })
    }
}

// ── Shapes ────────────────────────────────────────────────────────────────

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ShapeKind {
    Circle,
    Square,
    Triangle,
    Zigzag,
    Box,
    Sphere,
    Torus,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::Circle,
        ShapeKind::Square,
        ShapeKind::Triangle,
        ShapeKind::Zigzag,
        ShapeKind::Box,
        ShapeKind::Sphere,
        ShapeKind::Torus,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Square => "square",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Zigzag => "zigzag",
            ShapeKind::Box => "box",
            ShapeKind::Sphere => "sphere",
            ShapeKind::Torus => "torus",
        }
    }

    /// The mode this shape can be drawn in.
    pub const fn mode(self) -> Mode {
        match self {
            ShapeKind::Circle | ShapeKind::Square | ShapeKind::Triangle | ShapeKind::Zigzag => {
                Mode::TwoD
            }
            ShapeKind::Box | ShapeKind::Sphere | ShapeKind::Torus => Mode::ThreeD,
        }
    }

    /// Shapes offered by the selector in `mode`.
    pub fn available_in(mode: Mode) -> impl Iterator<Item = ShapeKind> {
        ShapeKind::ALL.into_iter().filter(move |k| k.mode() == mode)
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShapeKind::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ValidationError::UnknownShapeKind(s.to_string()))
    }
}

/// Largest column or row count a draft accepts.
pub const MAX_GRID_AXIS: u32 = 1000;

/// Largest number of cells in one frame.
pub const MAX_CELLS: u64 = 100_000;

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridSettings {
    pub columns: u32,
    pub rows: u32,
}

impl GridSettings {
    #[inline]
    pub fn cell_count(&self) -> u64 {
        u64::from(self.columns) * u64::from(self.rows)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeSettings {
    pub kind: ShapeKind,
    pub size: f32,
    pub stroke_color: Color,
    pub fill_color: Color,
    pub stroke_weight: f32,
}

/// Solid tessellation and frame-wide rotation (degrees, `[0, 360]`).
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shape3dSettings {
    pub rotation_x: f32,
    pub rotation_y: f32,
    pub rotation_z: f32,
    pub detail_x: u32,
    pub detail_y: u32,
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZigzagSettings {
    pub vertices: u32,
    /// Indent of the odd vertices as a percentage of the outer radius, `(0, 100)`.
    pub depth_percent: f32,
}

// ── Patterns ──────────────────────────────────────────────────────────────

/// Pattern selection as committed.
///
/// The input surface delivers pattern names as free text; names the engine
/// does not know are kept verbatim so the render pass can report them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PatternChoice {
    Known(PatternParams),
    Unrecognized(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternSettings {
    pub kind: PatternChoice,
    pub palette: [Color; 2],
    pub angle_degrees: f32,
    pub scale: f32,
}

// ── Configuration ─────────────────────────────────────────────────────────

/// Immutable configuration snapshot consumed by the render pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    pub mode: Mode,
    pub grid: GridSettings,
    pub shape: ShapeSettings,
    pub shape3d: Option<Shape3dSettings>,
    pub zigzag: Option<ZigzagSettings>,
    pub pattern: Option<PatternSettings>,
}

impl Configuration {
    /// Checks the structural invariants between mode, shape and the optional
    /// sections. Field ranges are enforced when the draft is edited.
    pub fn check_invariants(&self) -> Result<(), ValidationError> {
        let cells = self.grid.cell_count();
        if cells == 0 || cells > MAX_CELLS {
            return Err(ValidationError::OutOfRange {
                field: "columns × rows".to_string(),
                value: cells as f64,
                constraint: format!("[1, {MAX_CELLS}] cells"),
            });
        }
        if self.shape.kind.mode() != self.mode {
            return Err(ValidationError::ShapeModeMismatch {
                shape: self.shape.kind.to_string(),
                mode: self.mode.to_string(),
            });
        }
        if self.shape3d.is_some() != (self.mode == Mode::ThreeD) {
            return Err(ValidationError::TypeMismatch {
                field: "shape3d".to_string(),
                expected: "3D settings exactly when mode is 3D",
            });
        }
        if self.zigzag.is_some() != (self.shape.kind == ShapeKind::Zigzag) {
            return Err(ValidationError::TypeMismatch {
                field: "zigzag".to_string(),
                expected: "zigzag settings exactly when the shape is a zigzag",
            });
        }
        Ok(())
    }
}

impl Default for Configuration {
    /// The committed state before the first commit: a 5×5 grid of red circles.
    fn default() -> Self {
        Self {
            mode: Mode::TwoD,
            grid: GridSettings { columns: 5, rows: 5 },
            shape: ShapeSettings {
                kind: ShapeKind::Circle,
                size: 30.0,
                stroke_color: Color::BLACK,
                fill_color: Color::rgb(255, 0, 0),
                stroke_weight: 1.0,
            },
            shape3d: None,
            zigzag: None,
            pattern: None,
        }
    }
}

use std::f32::consts::PI as PI_F32;
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::MAX_GRID_AXIS;
use crate::error::ValidationError;
use crate::paint::Color;

// ── FieldValue ────────────────────────────────────────────────────────────

/// Raw value delivered by the input surface for one draft edit.
///
/// Deserialized untagged, so TOML/JSON scalars map directly. Integers widen to
/// reals and text is parsed for color and shape fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Int(i64),
    Real(f64),
    Text(String),
}

impl FieldValue {
    /// Numeric view of the value, if it has one.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Int(v) => Some(*v as f64),
            FieldValue::Real(v) => Some(*v),
            FieldValue::Bool(_) | FieldValue::Text(_) => None,
        }
    }
}

impl From<bool> for FieldValue {
    fn from(v: bool) -> Self {
        FieldValue::Bool(v)
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        FieldValue::Int(v)
    }
}

impl From<u32> for FieldValue {
    fn from(v: u32) -> Self {
        FieldValue::Int(v as i64)
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        FieldValue::Real(v)
    }
}

impl From<f32> for FieldValue {
    fn from(v: f32) -> Self {
        FieldValue::Real(v as f64)
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::Text(v.to_string())
    }
}

impl From<Color> for FieldValue {
    fn from(v: Color) -> Self {
        FieldValue::Text(v.to_string())
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Bool(v) => write!(f, "{v}"),
            FieldValue::Int(v) => write!(f, "{v}"),
            FieldValue::Real(v) => write!(f, "{v}"),
            FieldValue::Text(v) => f.write_str(v),
        }
    }
}

impl FromStr for FieldValue {
    type Err = std::convert::Infallible;

    /// Command-line style parsing: `true`/`false`, integers, reals, else text.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(v) = s.parse::<bool>() {
            return Ok(FieldValue::Bool(v));
        }
        if let Ok(v) = s.parse::<i64>() {
            return Ok(FieldValue::Int(v));
        }
        if let Ok(v) = s.parse::<f64>() {
            return Ok(FieldValue::Real(v));
        }
        Ok(FieldValue::Text(s.to_string()))
    }
}

// ── Constraint ────────────────────────────────────────────────────────────

/// Domain of a numeric field. Non-finite values never satisfy a constraint.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Constraint {
    /// `value >= min`
    AtLeast(f64),
    /// `value > 0`
    Positive,
    /// `min <= value <= max`
    Closed(f64, f64),
    /// `min < value < max`
    Open(f64, f64),
}

impl Constraint {
    pub fn admits(self, value: f64) -> bool {
        if !value.is_finite() {
            return false;
        }
        match self {
            Constraint::AtLeast(min) => value >= min,
            Constraint::Positive => value > 0.0,
            Constraint::Closed(min, max) => (min..=max).contains(&value),
            Constraint::Open(min, max) => value > min && value < max,
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::AtLeast(min) => write!(f, ">= {min}"),
            Constraint::Positive => f.write_str("> 0"),
            Constraint::Closed(min, max) => write!(f, "[{min}, {max}]"),
            Constraint::Open(min, max) => write!(f, "({min}, {max})"),
        }
    }
}

/// Slider metadata for the input surface.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FieldRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl FieldRange {
    const fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }
}

/// What kind of value a field stores.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ValueKind {
    Bool,
    Int,
    Real,
    Color,
    Shape,
    Text,
}

impl ValueKind {
    pub const fn describe(self) -> &'static str {
        match self {
            ValueKind::Bool => "a boolean",
            ValueKind::Int => "an integer",
            ValueKind::Real => "a number",
            ValueKind::Color => "a hex color",
            ValueKind::Shape => "a shape name",
            ValueKind::Text => "text",
        }
    }
}

// ── DraftField ────────────────────────────────────────────────────────────

/// Every control the input surface can edit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum DraftField {
    Is3d,
    Columns,
    Rows,
    ShapeType,
    ShapeSize,
    ShapeColor,
    StrokeColor,
    StrokeWeight,
    RotationX,
    RotationY,
    RotationZ,
    DetailX,
    DetailY,
    UsePattern,
    PatternType,
    PatternColorA,
    PatternColorB,
    PatternAngle,
    PatternScale,
    StripeSize,
    StripeCircleSize,
    PolygonSides,
    PolygonRadius,
    RadialAngle,
    WaveAmplitude,
    WaveFrequency,
    WavePhase,
    DotSize,
    DotSpacing,
    CheckedSize,
    CheckedSpacing,
    CrossSize,
    CrossWeight,
    TriangleSize,
    TriangleSpacing,
    NoiseScale,
    ZigzagVertices,
    ZigzagDepth,
}

impl DraftField {
    pub const ALL: [DraftField; 38] = [
        DraftField::Is3d,
        DraftField::Columns,
        DraftField::Rows,
        DraftField::ShapeType,
        DraftField::ShapeSize,
        DraftField::ShapeColor,
        DraftField::StrokeColor,
        DraftField::StrokeWeight,
        DraftField::RotationX,
        DraftField::RotationY,
        DraftField::RotationZ,
        DraftField::DetailX,
        DraftField::DetailY,
        DraftField::UsePattern,
        DraftField::PatternType,
        DraftField::PatternColorA,
        DraftField::PatternColorB,
        DraftField::PatternAngle,
        DraftField::PatternScale,
        DraftField::StripeSize,
        DraftField::StripeCircleSize,
        DraftField::PolygonSides,
        DraftField::PolygonRadius,
        DraftField::RadialAngle,
        DraftField::WaveAmplitude,
        DraftField::WaveFrequency,
        DraftField::WavePhase,
        DraftField::DotSize,
        DraftField::DotSpacing,
        DraftField::CheckedSize,
        DraftField::CheckedSpacing,
        DraftField::CrossSize,
        DraftField::CrossWeight,
        DraftField::TriangleSize,
        DraftField::TriangleSpacing,
        DraftField::NoiseScale,
        DraftField::ZigzagVertices,
        DraftField::ZigzagDepth,
    ];

    /// Name used by the input surface.
    pub const fn name(self) -> &'static str {
        match self {
            DraftField::Is3d => "is3D",
            DraftField::Columns => "columns",
            DraftField::Rows => "rows",
            DraftField::ShapeType => "shapeType",
            DraftField::ShapeSize => "shapeSize",
            DraftField::ShapeColor => "shapeColor",
            DraftField::StrokeColor => "strokeColor",
            DraftField::StrokeWeight => "strokeWeight",
            DraftField::RotationX => "rotationX",
            DraftField::RotationY => "rotationY",
            DraftField::RotationZ => "rotationZ",
            DraftField::DetailX => "detailX",
            DraftField::DetailY => "detailY",
            DraftField::UsePattern => "usePattern",
            DraftField::PatternType => "patternType",
            DraftField::PatternColorA => "patternColorA",
            DraftField::PatternColorB => "patternColorB",
            DraftField::PatternAngle => "patternAngle",
            DraftField::PatternScale => "patternScale",
            DraftField::StripeSize => "stripeSize",
            DraftField::StripeCircleSize => "stripeCircleSize",
            DraftField::PolygonSides => "polygonSides",
            DraftField::PolygonRadius => "polygonRadius",
            DraftField::RadialAngle => "radialAngle",
            DraftField::WaveAmplitude => "waveAmplitude",
            DraftField::WaveFrequency => "waveFrequency",
            DraftField::WavePhase => "wavePhase",
            DraftField::DotSize => "dotSize",
            DraftField::DotSpacing => "dotSpacing",
            DraftField::CheckedSize => "checkedSize",
            DraftField::CheckedSpacing => "checkedSpacing",
            DraftField::CrossSize => "crossSize",
            DraftField::CrossWeight => "crossWeight",
            DraftField::TriangleSize => "triangleSize",
            DraftField::TriangleSpacing => "triangleSpacing",
            DraftField::NoiseScale => "noiseScale",
            DraftField::ZigzagVertices => "zigzagVertices",
            DraftField::ZigzagDepth => "zigzagDepth",
        }
    }

    pub const fn value_kind(self) -> ValueKind {
        match self {
            DraftField::Is3d | DraftField::UsePattern => ValueKind::Bool,
            DraftField::Columns
            | DraftField::Rows
            | DraftField::DetailX
            | DraftField::DetailY
            | DraftField::PolygonSides
            | DraftField::ZigzagVertices => ValueKind::Int,
            DraftField::ShapeColor
            | DraftField::StrokeColor
            | DraftField::PatternColorA
            | DraftField::PatternColorB => ValueKind::Color,
            DraftField::ShapeType => ValueKind::Shape,
            DraftField::PatternType => ValueKind::Text,
            DraftField::ShapeSize
            | DraftField::StrokeWeight
            | DraftField::RotationX
            | DraftField::RotationY
            | DraftField::RotationZ
            | DraftField::PatternAngle
            | DraftField::PatternScale
            | DraftField::StripeSize
            | DraftField::StripeCircleSize
            | DraftField::PolygonRadius
            | DraftField::RadialAngle
            | DraftField::WaveAmplitude
            | DraftField::WaveFrequency
            | DraftField::WavePhase
            | DraftField::DotSize
            | DraftField::DotSpacing
            | DraftField::CheckedSize
            | DraftField::CheckedSpacing
            | DraftField::CrossSize
            | DraftField::CrossWeight
            | DraftField::TriangleSize
            | DraftField::TriangleSpacing
            | DraftField::NoiseScale
            | DraftField::ZigzagDepth => ValueKind::Real,
        }
    }

    /// Domain enforced on edit and on commit. `None` for non-numeric fields.
    pub const fn constraint(self) -> Option<Constraint> {
        use Constraint::*;
        Some(match self {
            DraftField::Columns | DraftField::Rows => Closed(1.0, MAX_GRID_AXIS as f64),
            DraftField::ShapeSize => Positive,
            DraftField::StrokeWeight => AtLeast(0.0),
            DraftField::RotationX | DraftField::RotationY | DraftField::RotationZ => {
                Closed(0.0, 360.0)
            }
            DraftField::DetailX | DraftField::DetailY => AtLeast(3.0),
            DraftField::PatternAngle => Closed(0.0, 360.0),
            DraftField::PatternScale => Positive,
            DraftField::PolygonSides | DraftField::ZigzagVertices => AtLeast(3.0),
            // Upper bound is π as stored (f32), so the slider maximum survives narrowing.
            DraftField::RadialAngle => Closed(0.0, PI_F32 as f64),
            DraftField::WavePhase => AtLeast(0.0),
            DraftField::ZigzagDepth => Open(0.0, 100.0),
            DraftField::StripeSize
            | DraftField::StripeCircleSize
            | DraftField::PolygonRadius
            | DraftField::WaveAmplitude
            | DraftField::WaveFrequency
            | DraftField::DotSize
            | DraftField::DotSpacing
            | DraftField::CheckedSize
            | DraftField::CheckedSpacing
            | DraftField::CrossSize
            | DraftField::CrossWeight
            | DraftField::TriangleSize
            | DraftField::TriangleSpacing
            | DraftField::NoiseScale => Positive,
            DraftField::Is3d
            | DraftField::UsePattern
            | DraftField::ShapeType
            | DraftField::PatternType
            | DraftField::ShapeColor
            | DraftField::StrokeColor
            | DraftField::PatternColorA
            | DraftField::PatternColorB => return None,
        })
    }

    /// Slider bounds offered by the control panel. Narrower than
    /// [`constraint`](Self::constraint) for most fields.
    pub fn ui_range(self) -> Option<FieldRange> {
        let r = FieldRange::new;
        Some(match self {
            DraftField::Columns | DraftField::Rows => r(1.0, 10.0, 1.0),
            DraftField::ShapeSize => r(10.0, 200.0, 1.0),
            DraftField::StrokeWeight => r(0.0, 10.0, 1.0),
            DraftField::RotationX | DraftField::RotationY | DraftField::RotationZ => {
                r(0.0, 360.0, 1.0)
            }
            DraftField::DetailX | DraftField::DetailY => r(3.0, 24.0, 1.0),
            DraftField::PatternAngle => r(0.0, 360.0, 1.0),
            DraftField::PatternScale => r(0.1, 4.0, 0.1),
            DraftField::StripeSize | DraftField::StripeCircleSize => r(1.0, 100.0, 1.0),
            DraftField::PolygonSides => r(3.0, 10.0, 1.0),
            DraftField::PolygonRadius => r(10.0, 100.0, 1.0),
            DraftField::RadialAngle => r(0.0, PI, PI / 180.0),
            DraftField::WaveAmplitude => r(1.0, 100.0, 1.0),
            DraftField::WaveFrequency => r(1.0, 50.0, 1.0),
            DraftField::WavePhase => r(0.0, 100.0, 1.0),
            DraftField::DotSize | DraftField::CheckedSize | DraftField::CrossSize => {
                r(1.0, 50.0, 1.0)
            }
            DraftField::DotSpacing
            | DraftField::CheckedSpacing
            | DraftField::TriangleSize
            | DraftField::TriangleSpacing => r(1.0, 100.0, 1.0),
            DraftField::CrossWeight => r(1.0, 20.0, 1.0),
            DraftField::NoiseScale => r(0.1, 2.0, 0.1),
            DraftField::ZigzagVertices => r(3.0, 50.0, 1.0),
            DraftField::ZigzagDepth => r(1.0, 50.0, 1.0),
            DraftField::Is3d
            | DraftField::UsePattern
            | DraftField::ShapeType
            | DraftField::PatternType
            | DraftField::ShapeColor
            | DraftField::StrokeColor
            | DraftField::PatternColorA
            | DraftField::PatternColorB => return None,
        })
    }

    /// Checks a numeric value against the field's domain.
    pub(crate) fn check(self, value: f64) -> Result<(), ValidationError> {
        match self.constraint() {
            Some(c) if !c.admits(value) => Err(ValidationError::OutOfRange {
                field: self.name().to_string(),
                value,
                constraint: c.to_string(),
            }),
            _ => Ok(()),
        }
    }

    pub(crate) fn mismatch(self) -> ValidationError {
        ValidationError::TypeMismatch {
            field: self.name().to_string(),
            expected: self.value_kind().describe(),
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DraftField {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DraftField::ALL
            .into_iter()
            .find(|f| f.name() == s)
            .ok_or_else(|| ValidationError::UnknownField(s.to_string()))
    }
}

//! Paint model shared between the render pass and backends.
//!
//! Scope:
//! - color representation (8-bit sRGB, straight alpha)
//! - stroke parameters
//! - fill sources (flat color or a procedural pattern request)
//!
//! Geometry types remain in `geometry`.

pub mod color;

use serde::{Deserialize, Serialize};

pub use color::Color;

use crate::pattern::PatternFillRequest;

/// Outline drawn around every primitive.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub color: Color,
    /// Line weight in logical pixels. `0` disables the outline.
    pub weight: f32,
}

impl Stroke {
    #[inline]
    pub const fn new(color: Color, weight: f32) -> Self {
        Self { color, weight }
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.weight > 0.0 && self.color.a > 0
    }
}

/// Fill source for one primitive.
///
/// `Pattern` keeps the flat color it replaces so the render pass can fall back
/// to it when no pattern backend was injected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum FillSpec {
    Flat { color: Color },
    Pattern { request: PatternFillRequest, fallback: Color },
}

impl FillSpec {
    #[inline]
    pub fn flat(color: Color) -> Self {
        FillSpec::Flat { color }
    }

    /// Color used when the fill is drawn without a pattern backend.
    #[inline]
    pub fn flat_color(&self) -> Color {
        match self {
            FillSpec::Flat { color } => *color,
            FillSpec::Pattern { fallback, .. } => *fallback,
        }
    }

    #[inline]
    pub fn pattern_request(&self) -> Option<&PatternFillRequest> {
        match self {
            FillSpec::Flat { .. } => None,
            FillSpec::Pattern { request, .. } => Some(request),
        }
    }
}

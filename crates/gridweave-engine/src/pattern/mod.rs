//! Pattern dispatch.
//!
//! The engine never computes pattern pixels. It only turns the committed
//! pattern settings into a [`PatternFillRequest`] for the external pattern
//! backend, or a flat fill when no pattern is configured.

mod kind;
mod params;

use serde::{Deserialize, Serialize};

pub use kind::{PatternKind, UnknownPatternKind};
pub use params::PatternParams;

use crate::config::{PatternChoice, PatternSettings, ShapeSettings};
use crate::error::RenderError;
use crate::paint::{Color, FillSpec};

/// Opaque request handed to the pattern backend for one primitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternFillRequest {
    pub kind: PatternKind,
    pub angle_degrees: f32,
    pub palette: [Color; 2],
    pub scale: f32,
    pub params: PatternParams,
}

/// Resolves the fill for every primitive of a frame.
///
/// - no pattern: flat fill with the shape's fill color
/// - recognized kind: pattern request, with the fill color kept as fallback
/// - unrecognized kind: [`RenderError::UnsupportedPatternKind`]; the caller must
///   abandon the frame instead of skipping the cell
pub fn resolve(
    pattern: Option<&PatternSettings>,
    shape: &ShapeSettings,
) -> Result<FillSpec, RenderError> {
    let Some(pattern) = pattern else {
        return Ok(FillSpec::flat(shape.fill_color));
    };

    let params = match &pattern.kind {
        PatternChoice::Known(params) => *params,
        PatternChoice::Unrecognized(name) => {
            log::warn!("unknown pattern type {name:?}; abandoning frame");
            return Err(RenderError::UnsupportedPatternKind(name.clone()));
        }
    };

    Ok(FillSpec::Pattern {
        request: PatternFillRequest {
            kind: params.kind(),
            angle_degrees: pattern.angle_degrees,
            palette: pattern.palette,
            scale: pattern.scale,
            params,
        },
        fallback: shape.fill_color,
    })
}

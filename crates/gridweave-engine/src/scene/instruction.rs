use serde::{Deserialize, Serialize};

use crate::coords::Vec3;
use crate::geometry::Primitive;
use crate::layout::Cell;
use crate::paint::{FillSpec, Stroke};

/// Backend-agnostic instruction for one cell.
///
/// `origin` is where the backend translates to before drawing `geometry`:
/// the cell anchor for solids, `anchor − size/2` for 2D primitives so the
/// local `size × size` box is centered in the cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawInstruction {
    pub cell: Cell,
    pub origin: Vec3,
    pub geometry: Primitive,
    pub fill: FillSpec,
    pub stroke: Stroke,
}

impl DrawInstruction {
    /// Pattern fills apply to flat outlines only.
    #[inline]
    pub fn wants_pattern(&self) -> bool {
        !self.geometry.is_solid() && self.fill.pattern_request().is_some()
    }
}

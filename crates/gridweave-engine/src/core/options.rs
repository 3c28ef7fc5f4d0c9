use serde::{Deserialize, Serialize};

use crate::coords::Viewport;
use crate::error::ValidationError;
use crate::paint::Color;

/// Host-level settings that are not part of the editable configuration.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchOptions {
    pub canvas: Viewport,
    pub background: Color,
}

impl Default for SketchOptions {
    fn default() -> Self {
        Self {
            canvas: Viewport::default(),
            background: Color::gray(240),
        }
    }
}

impl SketchOptions {
    /// Rejects canvases that cannot back a surface.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [("canvas.width", self.canvas.width), ("canvas.height", self.canvas.height)] {
            if !(1.0..=Viewport::MAX_SIDE).contains(&value) {
                return Err(ValidationError::OutOfRange {
                    field: field.to_string(),
                    value: f64::from(value),
                    constraint: format!("[1, {}]", Viewport::MAX_SIDE),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_are_valid() {
        SketchOptions::default().validate().unwrap();
    }

    #[test]
    fn names_the_offending_side() {
        let options = SketchOptions { canvas: Viewport::new(600.0, -100.0), ..SketchOptions::default() };
        assert!(matches!(
            options.validate(),
            Err(ValidationError::OutOfRange { ref field, value, .. })
                if field == "canvas.height" && value == -100.0
        ));
    }
}

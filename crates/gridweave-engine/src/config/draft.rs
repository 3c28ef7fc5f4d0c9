use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

use super::field::{DraftField, FieldValue};
use super::{
    Configuration, GridSettings, Mode, PatternChoice, PatternSettings, Shape3dSettings, ShapeKind,
    ShapeSettings, ZigzagSettings,
};
use crate::error::ValidationError;
use crate::paint::Color;
use crate::pattern::{PatternKind, PatternParams};

/// Editable settings, one value per control.
///
/// A value type: every edit produces a new snapshot through
/// [`with_edit`](Self::with_edit), and a rejected edit leaves the original
/// untouched. Values for hidden controls (3D rotation while in 2D, zigzag depth
/// while drawing circles, ...) are kept so toggling back restores them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DraftSettings {
    pub is_3d: bool,
    pub columns: u32,
    pub rows: u32,
    pub shape_type: ShapeKind,
    pub shape_size: f32,
    pub shape_color: Color,
    pub stroke_color: Color,
    pub stroke_weight: f32,

    pub rotation_x: f32,
    pub rotation_y: f32,
    pub rotation_z: f32,
    pub detail_x: u32,
    pub detail_y: u32,

    pub use_pattern: bool,
    /// Free text; recognized when the frame is resolved.
    pub pattern_type: String,
    pub pattern_palette: [Color; 2],
    pub pattern_angle: f32,
    pub pattern_scale: f32,

    pub stripe_size: f32,
    pub stripe_circle_size: f32,
    pub polygon_sides: u32,
    pub polygon_radius: f32,
    /// Radians.
    pub radial_angle: f32,
    pub wave_amplitude: f32,
    pub wave_frequency: f32,
    pub wave_phase: f32,
    pub dot_size: f32,
    pub dot_spacing: f32,
    pub checked_size: f32,
    pub checked_spacing: f32,
    pub cross_size: f32,
    pub cross_weight: f32,
    pub triangle_size: f32,
    pub triangle_spacing: f32,
    pub noise_scale: f32,

    pub zigzag_vertices: u32,
    pub zigzag_depth: f32,
}

impl Default for DraftSettings {
    fn default() -> Self {
        Self {
            is_3d: false,
            columns: 5,
            rows: 5,
            shape_type: ShapeKind::Circle,
            shape_size: 30.0,
            shape_color: Color::rgb(255, 0, 0),
            stroke_color: Color::BLACK,
            stroke_weight: 1.0,

            rotation_x: 0.0,
            rotation_y: 0.0,
            rotation_z: 0.0,
            detail_x: 24,
            detail_y: 16,

            use_pattern: false,
            pattern_type: PatternKind::Stripe.name().to_string(),
            pattern_palette: [Color::BLACK, Color::rgb(0, 0, 240)],
            pattern_angle: 0.0,
            pattern_scale: 1.0,

            stripe_size: 20.0,
            stripe_circle_size: 20.0,
            polygon_sides: 4,
            polygon_radius: 30.0,
            radial_angle: PI / 15.0,
            wave_amplitude: 50.0,
            wave_frequency: 20.0,
            wave_phase: 40.0,
            dot_size: 10.0,
            dot_spacing: 20.0,
            checked_size: 20.0,
            checked_spacing: 60.0,
            cross_size: 20.0,
            cross_weight: 5.0,
            triangle_size: 40.0,
            triangle_spacing: 20.0,
            noise_scale: 0.5,

            zigzag_vertices: 20,
            zigzag_depth: 10.0,
        }
    }
}

impl DraftSettings {
    /// Returns a copy with `field` set to `value`, or the reason the edit is
    /// rejected.
    pub fn with_edit(&self, field: DraftField, value: FieldValue) -> Result<Self, ValidationError> {
        let mut next = self.clone();
        match next.slot_mut(field) {
            SlotMut::Bool(slot) => *slot = bool_value(field, &value)?,
            SlotMut::Int(slot) => *slot = int_value(field, &value)?,
            SlotMut::Real(slot) => *slot = real_value(field, &value)?,
            SlotMut::Color(slot) => *slot = color_value(field, &value)?,
            SlotMut::Shape(slot) => {
                let FieldValue::Text(name) = &value else {
                    return Err(field.mismatch());
                };
                *slot = name.parse()?;
            }
            SlotMut::Text(slot) => {
                let FieldValue::Text(name) = value else {
                    return Err(field.mismatch());
                };
                *slot = name;
            }
        }
        Ok(next)
    }

    /// Current value of `field` as the input surface would display it.
    pub fn get(&self, field: DraftField) -> FieldValue {
        match self.slot(field) {
            Slot::Bool(v) => FieldValue::Bool(*v),
            Slot::Int(v) => FieldValue::Int(i64::from(*v)),
            Slot::Real(v) => FieldValue::Real(f64::from(*v)),
            Slot::Color(v) => FieldValue::Text(v.to_string()),
            Slot::Shape(v) => FieldValue::Text(v.name().to_string()),
            Slot::Text(v) => FieldValue::Text(v.clone()),
        }
    }

    /// Re-checks every numeric field against its domain. Catches drafts built
    /// by hand or deserialized rather than edited.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for field in DraftField::ALL {
            if let Some(v) = self.get(field).as_f64() {
                field.check(v)?;
            }
        }
        Ok(())
    }

    /// Projects the draft into an immutable [`Configuration`].
    ///
    /// Fails if any field is out of range or the shape does not belong to the
    /// selected mode. An unknown pattern name is not an error here; it is kept
    /// as [`PatternChoice::Unrecognized`] and reported by the render pass.
    pub fn to_configuration(&self) -> Result<Configuration, ValidationError> {
        self.validate()?;

        let mode = Mode::from_is_3d(self.is_3d);
        let config = Configuration {
            mode,
            grid: GridSettings { columns: self.columns, rows: self.rows },
            shape: ShapeSettings {
                kind: self.shape_type,
                size: self.shape_size,
                stroke_color: self.stroke_color,
                fill_color: self.shape_color,
                stroke_weight: self.stroke_weight,
            },
            shape3d: (mode == Mode::ThreeD).then(|| Shape3dSettings {
                rotation_x: self.rotation_x,
                rotation_y: self.rotation_y,
                rotation_z: self.rotation_z,
                detail_x: self.detail_x,
                detail_y: self.detail_y,
            }),
            zigzag: (self.shape_type == ShapeKind::Zigzag).then(|| ZigzagSettings {
                vertices: self.zigzag_vertices,
                depth_percent: self.zigzag_depth,
            }),
            pattern: self.use_pattern.then(|| self.pattern_settings()),
        };

        config.check_invariants()?;
        Ok(config)
    }

    fn pattern_settings(&self) -> PatternSettings {
        let kind = match self.pattern_type.parse::<PatternKind>() {
            Ok(kind) => PatternChoice::Known(self.pattern_params(kind)),
            Err(_) => PatternChoice::Unrecognized(self.pattern_type.clone()),
        };
        PatternSettings {
            kind,
            palette: self.pattern_palette,
            angle_degrees: self.pattern_angle,
            scale: self.pattern_scale,
        }
    }

    /// Selects the parameter bag for `kind` from the flat draft fields.
    pub fn pattern_params(&self, kind: PatternKind) -> PatternParams {
        match kind {
            PatternKind::Stripe => PatternParams::Stripe { stripe_size: self.stripe_size },
            PatternKind::StripeCircle => PatternParams::StripeCircle {
                stripe_circle_size: self.stripe_circle_size,
            },
            PatternKind::StripePolygon => PatternParams::StripePolygon {
                sides: self.polygon_sides,
                stripe_size: self.stripe_size,
                radius: self.polygon_radius,
            },
            PatternKind::StripeRadial => PatternParams::StripeRadial {
                radial_angle: self.radial_angle,
            },
            PatternKind::Wave => PatternParams::Wave {
                amplitude: self.wave_amplitude,
                frequency: self.wave_frequency,
                phase: self.wave_phase,
                stripe_size: self.stripe_size,
            },
            PatternKind::Dot => PatternParams::Dot {
                dot_size: self.dot_size,
                dot_spacing: self.dot_spacing,
            },
            PatternKind::Checked => PatternParams::Checked {
                checked_size: self.checked_size,
                checked_spacing: self.checked_spacing,
            },
            PatternKind::Cross => PatternParams::Cross {
                cross_size: self.cross_size,
                cross_weight: self.cross_weight,
            },
            PatternKind::Triangle => PatternParams::Triangle {
                triangle_size: self.triangle_size,
                triangle_spacing: self.triangle_spacing,
            },
            PatternKind::Noise => PatternParams::Noise { noise_scale: self.noise_scale },
            PatternKind::NoiseGrad => PatternParams::NoiseGrad { noise_scale: self.noise_scale },
        }
    }

    // ── slots ─────────────────────────────────────────────────────────────

    fn slot(&self, field: DraftField) -> Slot<'_> {
        match field {
            DraftField::Is3d => Slot::Bool(&self.is_3d),
            DraftField::Columns => Slot::Int(&self.columns),
            DraftField::Rows => Slot::Int(&self.rows),
            DraftField::ShapeType => Slot::Shape(&self.shape_type),
            DraftField::ShapeSize => Slot::Real(&self.shape_size),
            DraftField::ShapeColor => Slot::Color(&self.shape_color),
            DraftField::StrokeColor => Slot::Color(&self.stroke_color),
            DraftField::StrokeWeight => Slot::Real(&self.stroke_weight),
            DraftField::RotationX => Slot::Real(&self.rotation_x),
            DraftField::RotationY => Slot::Real(&self.rotation_y),
            DraftField::RotationZ => Slot::Real(&self.rotation_z),
            DraftField::DetailX => Slot::Int(&self.detail_x),
            DraftField::DetailY => Slot::Int(&self.detail_y),
            DraftField::UsePattern => Slot::Bool(&self.use_pattern),
            DraftField::PatternType => Slot::Text(&self.pattern_type),
            DraftField::PatternColorA => Slot::Color(&self.pattern_palette[0]),
            DraftField::PatternColorB => Slot::Color(&self.pattern_palette[1]),
            DraftField::PatternAngle => Slot::Real(&self.pattern_angle),
            DraftField::PatternScale => Slot::Real(&self.pattern_scale),
            DraftField::StripeSize => Slot::Real(&self.stripe_size),
            DraftField::StripeCircleSize => Slot::Real(&self.stripe_circle_size),
            DraftField::PolygonSides => Slot::Int(&self.polygon_sides),
            DraftField::PolygonRadius => Slot::Real(&self.polygon_radius),
            DraftField::RadialAngle => Slot::Real(&self.radial_angle),
            DraftField::WaveAmplitude => Slot::Real(&self.wave_amplitude),
            DraftField::WaveFrequency => Slot::Real(&self.wave_frequency),
            DraftField::WavePhase => Slot::Real(&self.wave_phase),
            DraftField::DotSize => Slot::Real(&self.dot_size),
            DraftField::DotSpacing => Slot::Real(&self.dot_spacing),
            DraftField::CheckedSize => Slot::Real(&self.checked_size),
            DraftField::CheckedSpacing => Slot::Real(&self.checked_spacing),
            DraftField::CrossSize => Slot::Real(&self.cross_size),
            DraftField::CrossWeight => Slot::Real(&self.cross_weight),
            DraftField::TriangleSize => Slot::Real(&self.triangle_size),
            DraftField::TriangleSpacing => Slot::Real(&self.triangle_spacing),
            DraftField::NoiseScale => Slot::Real(&self.noise_scale),
            DraftField::ZigzagVertices => Slot::Int(&self.zigzag_vertices),
            DraftField::ZigzagDepth => Slot::Real(&self.zigzag_depth),
        }
    }

    fn slot_mut(&mut self, field: DraftField) -> SlotMut<'_> {
        match field {
            DraftField::Is3d => SlotMut::Bool(&mut self.is_3d),
            DraftField::Columns => SlotMut::Int(&mut self.columns),
            DraftField::Rows => SlotMut::Int(&mut self.rows),
            DraftField::ShapeType => SlotMut::Shape(&mut self.shape_type),
            DraftField::ShapeSize => SlotMut::Real(&mut self.shape_size),
            DraftField::ShapeColor => SlotMut::Color(&mut self.shape_color),
            DraftField::StrokeColor => SlotMut::Color(&mut self.stroke_color),
            DraftField::StrokeWeight => SlotMut::Real(&mut self.stroke_weight),
            DraftField::RotationX => SlotMut::Real(&mut self.rotation_x),
            DraftField::RotationY => SlotMut::Real(&mut self.rotation_y),
            DraftField::RotationZ => SlotMut::Real(&mut self.rotation_z),
            DraftField::DetailX => SlotMut::Int(&mut self.detail_x),
            DraftField::DetailY => SlotMut::Int(&mut self.detail_y),
            DraftField::UsePattern => SlotMut::Bool(&mut self.use_pattern),
            DraftField::PatternType => SlotMut::Text(&mut self.pattern_type),
            DraftField::PatternColorA => SlotMut::Color(&mut self.pattern_palette[0]),
            DraftField::PatternColorB => SlotMut::Color(&mut self.pattern_palette[1]),
            DraftField::PatternAngle => SlotMut::Real(&mut self.pattern_angle),
            DraftField::PatternScale => SlotMut::Real(&mut self.pattern_scale),
            DraftField::StripeSize => SlotMut::Real(&mut self.stripe_size),
            DraftField::StripeCircleSize => SlotMut::Real(&mut self.stripe_circle_size),
            DraftField::PolygonSides => SlotMut::Int(&mut self.polygon_sides),
            DraftField::PolygonRadius => SlotMut::Real(&mut self.polygon_radius),
            DraftField::RadialAngle => SlotMut::Real(&mut self.radial_angle),
            DraftField::WaveAmplitude => SlotMut::Real(&mut self.wave_amplitude),
            DraftField::WaveFrequency => SlotMut::Real(&mut self.wave_frequency),
            DraftField::WavePhase => SlotMut::Real(&mut self.wave_phase),
            DraftField::DotSize => SlotMut::Real(&mut self.dot_size),
            DraftField::DotSpacing => SlotMut::Real(&mut self.dot_spacing),
            DraftField::CheckedSize => SlotMut::Real(&mut self.checked_size),
            DraftField::CheckedSpacing => SlotMut::Real(&mut self.checked_spacing),
            DraftField::CrossSize => SlotMut::Real(&mut self.cross_size),
            DraftField::CrossWeight => SlotMut::Real(&mut self.cross_weight),
            DraftField::TriangleSize => SlotMut::Real(&mut self.triangle_size),
            DraftField::TriangleSpacing => SlotMut::Real(&mut self.triangle_spacing),
            DraftField::NoiseScale => SlotMut::Real(&mut self.noise_scale),
            DraftField::ZigzagVertices => SlotMut::Int(&mut self.zigzag_vertices),
            DraftField::ZigzagDepth => SlotMut::Real(&mut self.zigzag_depth),
        }
    }
}

/// Storage of one field, typed by value kind.
enum Slot<'a> {
    Bool(&'a bool),
    Int(&'a u32),
    Real(&'a f32),
    Color(&'a Color),
    Shape(&'a ShapeKind),
    Text(&'a String),
}

enum SlotMut<'a> {
    Bool(&'a mut bool),
    Int(&'a mut u32),
    Real(&'a mut f32),
    Color(&'a mut Color),
    Shape(&'a mut ShapeKind),
    Text(&'a mut String),
}

// ── value coercion ────────────────────────────────────────────────────────

fn bool_value(field: DraftField, value: &FieldValue) -> Result<bool, ValidationError> {
    match value {
        FieldValue::Bool(v) => Ok(*v),
        _ => Err(field.mismatch()),
    }
}

fn int_value(field: DraftField, value: &FieldValue) -> Result<u32, ValidationError> {
    let v = match value {
        FieldValue::Int(v) => *v as f64,
        // Sliders report whole numbers as reals.
        FieldValue::Real(v) if v.fract() == 0.0 => *v,
        _ => return Err(field.mismatch()),
    };
    field.check(v)?;
    if v > u32::MAX as f64 {
        return Err(ValidationError::OutOfRange {
            field: field.name().to_string(),
            value: v,
            constraint: format!("<= {}", u32::MAX),
        });
    }
    Ok(v as u32)
}

fn real_value(field: DraftField, value: &FieldValue) -> Result<f32, ValidationError> {
    let v = value.as_f64().ok_or_else(|| field.mismatch())?;
    // Checked after narrowing: the stored f32 is what has to be in range.
    let narrowed = v as f32;
    field.check(f64::from(narrowed))?;
    Ok(narrowed)
}

fn color_value(field: DraftField, value: &FieldValue) -> Result<Color, ValidationError> {
    match value {
        FieldValue::Text(s) => Color::from_hex(s),
        _ => Err(field.mismatch()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ValueKind;

    fn edit(draft: &DraftSettings, field: &str, value: impl Into<FieldValue>) -> DraftSettings {
        draft.with_edit(field.parse().unwrap(), value.into()).unwrap()
    }

    // ── edits ─────────────────────────────────────────────────────────────

    #[test]
    fn edit_returns_new_snapshot() {
        let draft = DraftSettings::default();
        let next = edit(&draft, "columns", 8_i64);
        assert_eq!(next.columns, 8);
        assert_eq!(draft.columns, 5);
    }

    #[test]
    fn integral_reals_are_accepted_for_integer_fields() {
        let next = edit(&DraftSettings::default(), "rows", 3.0_f64);
        assert_eq!(next.rows, 3);
        let err = DraftSettings::default()
            .with_edit(DraftField::Rows, FieldValue::Real(2.5))
            .unwrap_err();
        assert!(matches!(err, ValidationError::TypeMismatch { .. }));
    }

    #[test]
    fn zero_columns_is_rejected() {
        let err = DraftSettings::default()
            .with_edit(DraftField::Columns, FieldValue::Int(0))
            .unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { ref field, .. } if field == "columns"));
    }

    #[test]
    fn grid_axes_are_bounded() {
        let draft = DraftSettings::default();
        let err = draft.with_edit(DraftField::Columns, FieldValue::Int(i64::from(u32::MAX))).unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { ref field, .. } if field == "columns"));
        assert!(draft.with_edit(DraftField::Rows, FieldValue::Int(1001)).is_err());
        assert_eq!(edit(&draft, "rows", 1000_i64).rows, 1000);
    }

    #[test]
    fn oversized_grid_fails_projection() {
        let draft = edit(&DraftSettings::default(), "columns", 1000_i64);
        let draft = edit(&draft, "rows", 1000_i64);
        assert!(matches!(
            draft.to_configuration(),
            Err(ValidationError::OutOfRange { ref field, .. }) if field == "columns × rows"
        ));
    }

    #[test]
    fn reals_are_checked_as_stored() {
        let draft = DraftSettings::default();
        // Underflows to 0.0 as f32.
        let err = draft.with_edit(DraftField::ShapeSize, FieldValue::Real(1e-60)).unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { value, .. } if value == 0.0));
        // Overflows to infinity as f32.
        assert!(draft.with_edit(DraftField::ShapeSize, FieldValue::Real(1e60)).is_err());
        // Rounds up to 100.0 as f32.
        assert!(draft.with_edit(DraftField::ZigzagDepth, FieldValue::Real(99.999_999_999)).is_err());
    }

    #[test]
    fn radial_angle_accepts_pi() {
        let next = edit(&DraftSettings::default(), "radialAngle", std::f64::consts::PI);
        assert_eq!(next.radial_angle, PI);
    }

    #[test]
    fn every_field_is_stored_by_its_value_kind() {
        let draft = DraftSettings::default();
        for field in DraftField::ALL {
            let stored = match draft.slot(field) {
                Slot::Bool(_) => ValueKind::Bool,
                Slot::Int(_) => ValueKind::Int,
                Slot::Real(_) => ValueKind::Real,
                Slot::Color(_) => ValueKind::Color,
                Slot::Shape(_) => ValueKind::Shape,
                Slot::Text(_) => ValueKind::Text,
            };
            assert_eq!(stored, field.value_kind(), "{field}");
            assert_eq!(draft.with_edit(field, draft.get(field)).unwrap(), draft, "{field}");
        }
    }

    #[test]
    fn zigzag_depth_bounds_are_exclusive() {
        let draft = DraftSettings::default();
        assert!(draft.with_edit(DraftField::ZigzagDepth, FieldValue::Real(0.0)).is_err());
        assert!(draft.with_edit(DraftField::ZigzagDepth, FieldValue::Real(100.0)).is_err());
        assert_eq!(edit(&draft, "zigzagDepth", 99.5_f64).zigzag_depth, 99.5);
    }

    #[test]
    fn colors_parse_from_text() {
        let next = edit(&DraftSettings::default(), "patternColorB", "#00FF00");
        assert_eq!(next.pattern_palette[1], Color::rgb(0, 255, 0));
        let err = DraftSettings::default()
            .with_edit(DraftField::ShapeColor, FieldValue::Text("red".into()))
            .unwrap_err();
        assert_eq!(err, ValidationError::InvalidColor("red".into()));
    }

    #[test]
    fn unknown_shape_is_rejected_on_edit() {
        let err = DraftSettings::default()
            .with_edit(DraftField::ShapeType, FieldValue::Text("hexagon".into()))
            .unwrap_err();
        assert_eq!(err, ValidationError::UnknownShapeKind("hexagon".into()));
    }

    #[test]
    fn any_pattern_name_is_accepted_on_edit() {
        let next = edit(&DraftSettings::default(), "patternType", "unknownXYZ");
        assert_eq!(next.pattern_type, "unknownXYZ");
    }

    #[test]
    fn wrong_value_kind_is_rejected() {
        let err = DraftSettings::default()
            .with_edit(DraftField::Is3d, FieldValue::Int(1))
            .unwrap_err();
        assert!(matches!(err, ValidationError::TypeMismatch { .. }));
    }

    #[test]
    fn get_reads_back_every_edit() {
        let draft = DraftSettings::default();
        for field in DraftField::ALL {
            let value = draft.get(field);
            let again = draft.with_edit(field, value.clone()).unwrap();
            assert_eq!(again.get(field), value, "{field}");
        }
    }

    // ── projection ────────────────────────────────────────────────────────

    #[test]
    fn default_draft_projects_to_default_configuration() {
        let config = DraftSettings::default().to_configuration().unwrap();
        assert_eq!(config, Configuration::default());
    }

    #[test]
    fn three_d_requires_a_solid() {
        let draft = edit(&DraftSettings::default(), "is3D", true);
        assert!(matches!(
            draft.to_configuration(),
            Err(ValidationError::ShapeModeMismatch { .. })
        ));

        let draft = edit(&draft, "shapeType", "torus");
        let config = draft.to_configuration().unwrap();
        assert_eq!(config.mode, Mode::ThreeD);
        let solid = config.shape3d.unwrap();
        assert_eq!((solid.detail_x, solid.detail_y), (24, 16));
        assert!(config.zigzag.is_none());
    }

    #[test]
    fn zigzag_section_follows_shape() {
        let draft = edit(&DraftSettings::default(), "shapeType", "zigzag");
        let config = draft.to_configuration().unwrap();
        assert_eq!(config.zigzag, Some(ZigzagSettings { vertices: 20, depth_percent: 10.0 }));
        assert!(config.shape3d.is_none());
    }

    #[test]
    fn pattern_bag_follows_pattern_type() {
        let draft = edit(&DraftSettings::default(), "usePattern", true);
        let draft = edit(&draft, "patternType", "stripePolygon");
        let draft = edit(&draft, "polygonSides", 4_i64);
        let draft = edit(&draft, "stripeSize", 20_i64);
        let draft = edit(&draft, "polygonRadius", 30_i64);

        let pattern = draft.to_configuration().unwrap().pattern.unwrap();
        assert_eq!(
            pattern.kind,
            PatternChoice::Known(PatternParams::StripePolygon {
                sides: 4,
                stripe_size: 20.0,
                radius: 30.0,
            })
        );
    }

    #[test]
    fn unknown_pattern_survives_projection() {
        let draft = edit(&DraftSettings::default(), "usePattern", true);
        let draft = edit(&draft, "patternType", "unknownXYZ");
        let pattern = draft.to_configuration().unwrap().pattern.unwrap();
        assert_eq!(pattern.kind, PatternChoice::Unrecognized("unknownXYZ".into()));
    }

    #[test]
    fn hand_built_draft_is_revalidated() {
        let draft = DraftSettings { rows: 0, ..DraftSettings::default() };
        assert!(matches!(draft.to_configuration(), Err(ValidationError::OutOfRange { .. })));
    }

    #[test]
    fn partial_draft_deserializes_over_defaults() {
        let draft: DraftSettings =
            serde_json::from_str(r##"{"columns": 2, "shapeColor": "#00ff00"}"##).unwrap();
        assert_eq!(draft.columns, 2);
        assert_eq!(draft.shape_color, Color::rgb(0, 255, 0));
        assert_eq!(draft.rows, 5);
    }
}

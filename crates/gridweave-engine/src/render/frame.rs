use serde::Serialize;

use super::SurfaceSpec;
use crate::config::{Configuration, Mode};
use crate::coords::{Vec3, Viewport};
use crate::error::{RenderError, ValidationError};
use crate::geometry;
use crate::layout::layout;
use crate::paint::{Color, FillSpec, Stroke};
use crate::pattern;
use crate::scene::{DrawInstruction, DrawList};

/// A fully resolved frame, ready to issue.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub surface: SurfaceSpec,
    pub background: Color,
    /// Frame-wide rotation in radians (x, y, z), applied once in 3D mode.
    pub rotation: Option<Vec3>,
    pub instructions: DrawList,
}

/// Computes every instruction of a frame without side effects.
///
/// Pattern resolution runs before any instruction is built, so an
/// unrecognized pattern kind fails the whole frame in either mode.
pub fn build_frame(
    config: &Configuration,
    canvas: Viewport,
    background: Color,
) -> Result<Frame, RenderError> {
    config.check_invariants().map_err(RenderError::InvalidConfiguration)?;
    if !canvas.is_valid() {
        return Err(RenderError::InvalidConfiguration(ValidationError::OutOfRange {
            field: "canvas".to_string(),
            value: f64::from(canvas.width.min(canvas.height)),
            constraint: format!("[1, {}] per side", Viewport::MAX_SIDE),
        }));
    }
    let resolved = pattern::resolve(config.pattern.as_ref(), &config.shape)?;

    let primitive = geometry::geometry(&config.shape, config.zigzag.as_ref(), config.shape3d.as_ref());
    let fill = if primitive.is_solid() {
        FillSpec::flat(resolved.flat_color())
    } else {
        resolved
    };
    let stroke = Stroke::new(config.shape.stroke_color, config.shape.stroke_weight);

    let half = config.shape.size / 2.0;
    let cells = layout(config.mode, config.grid.columns, config.grid.rows, canvas);

    let mut instructions = DrawList::with_capacity(cells.len());
    for cell in cells {
        let origin = match config.mode {
            Mode::TwoD => cell.anchor - Vec3::new(half, half, 0.0),
            Mode::ThreeD => cell.anchor,
        };
        instructions.push(DrawInstruction {
            cell,
            origin,
            geometry: primitive.clone(),
            fill: fill.clone(),
            stroke,
        });
    }

    let rotation = match (config.mode, config.shape3d.as_ref()) {
        (Mode::ThreeD, Some(s)) => Some(Vec3::new(
            s.rotation_x.to_radians(),
            s.rotation_y.to_radians(),
            s.rotation_z.to_radians(),
        )),
        _ => None,
    };

    log::debug!(
        "built {} frame: {} cells, {}",
        config.mode,
        instructions.len(),
        if fill.pattern_request().is_some() { "pattern fill" } else { "flat fill" }
    );

    Ok(Frame {
        surface: SurfaceSpec::new(canvas, config.mode),
        background,
        rotation,
        instructions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DraftField, DraftSettings, FieldValue, PatternChoice, PatternSettings};
    use crate::geometry::Primitive;
    use crate::pattern::{PatternKind, PatternParams};
    use proptest::prelude::*;

    fn config_from(edits: &[(DraftField, FieldValue)]) -> Configuration {
        edits
            .iter()
            .try_fold(DraftSettings::default(), |d, (f, v)| d.with_edit(*f, v.clone()))
            .unwrap()
            .to_configuration()
            .unwrap()
    }

    fn background() -> Color {
        Color::gray(240)
    }

    // ── 2D ────────────────────────────────────────────────────────────────

    #[test]
    fn single_circle_cell() {
        let config = config_from(&[
            (DraftField::Columns, 1u32.into()),
            (DraftField::Rows, 1u32.into()),
            (DraftField::ShapeSize, 30.0f32.into()),
        ]);
        let frame = build_frame(&config, Viewport::new(600.0, 600.0), background()).unwrap();

        assert_eq!(frame.instructions.len(), 1);
        let only = &frame.instructions.items()[0];
        assert_eq!(only.cell.anchor, Vec3::new(300.0, 300.0, 0.0));
        assert_eq!(only.origin, Vec3::new(285.0, 285.0, 0.0));
        assert_eq!(only.geometry, Primitive::Ellipse { diameter: 30.0 });
        assert_eq!(only.fill, FillSpec::flat(Color::rgb(255, 0, 0)));
        assert!(frame.rotation.is_none());
        assert_eq!(frame.surface, SurfaceSpec { width: 600, height: 600, mode: Mode::TwoD });
    }

    #[test]
    fn instructions_follow_column_major_cells() {
        let config = config_from(&[
            (DraftField::Columns, 2u32.into()),
            (DraftField::Rows, 3u32.into()),
        ]);
        let frame = build_frame(&config, Viewport::new(200.0, 300.0), background()).unwrap();
        let order: Vec<(u32, u32)> =
            frame.instructions.iter().map(|i| (i.cell.column, i.cell.row)).collect();
        assert_eq!(order, [(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
    }

    #[test]
    fn pattern_fill_keeps_flat_fallback() {
        let config = config_from(&[
            (DraftField::UsePattern, true.into()),
            (DraftField::PatternType, "dot".into()),
        ]);
        let frame = build_frame(&config, Viewport::default(), background()).unwrap();
        let fill = &frame.instructions.items()[0].fill;
        let request = fill.pattern_request().unwrap();
        assert_eq!(request.kind, PatternKind::Dot);
        assert_eq!(request.params, PatternParams::Dot { dot_size: 10.0, dot_spacing: 20.0 });
        assert_eq!(fill.flat_color(), Color::rgb(255, 0, 0));
        assert!(frame.instructions.items()[0].wants_pattern());
    }

    #[test]
    fn unknown_pattern_fails_whole_frame() {
        let mut config = Configuration::default();
        config.pattern = Some(PatternSettings {
            kind: PatternChoice::Unrecognized("unknownXYZ".into()),
            palette: [Color::BLACK, Color::rgb(0, 0, 240)],
            angle_degrees: 0.0,
            scale: 1.0,
        });
        assert_eq!(
            build_frame(&config, Viewport::default(), background()).unwrap_err(),
            RenderError::UnsupportedPatternKind("unknownXYZ".into())
        );
    }

    #[test]
    fn oversized_hand_built_grid_is_rejected() {
        let mut config = Configuration::default();
        config.grid.columns = u32::MAX;
        config.grid.rows = u32::MAX;
        assert!(matches!(
            build_frame(&config, Viewport::default(), background()),
            Err(RenderError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn degenerate_canvas_is_rejected() {
        let config = Configuration::default();
        for canvas in [Viewport::new(-100.0, 600.0), Viewport::new(600.0, 0.0)] {
            assert!(matches!(
                build_frame(&config, canvas, background()),
                Err(RenderError::InvalidConfiguration(ValidationError::OutOfRange { .. }))
            ));
        }
    }

    // ── 3D ────────────────────────────────────────────────────────────────

    #[test]
    fn solids_get_flat_fill_and_frame_rotation() {
        let config = config_from(&[
            (DraftField::Is3d, true.into()),
            (DraftField::ShapeType, "torus".into()),
            (DraftField::RotationY, 90.0f32.into()),
            (DraftField::UsePattern, true.into()),
        ]);
        let frame = build_frame(&config, Viewport::default(), background()).unwrap();

        let rotation = frame.rotation.unwrap();
        assert_eq!(rotation.x, 0.0);
        assert!((rotation.y - std::f32::consts::FRAC_PI_2).abs() < 1e-6);

        let first = &frame.instructions.items()[0];
        assert!(first.geometry.is_solid());
        assert_eq!(first.origin, first.cell.anchor);
        assert_eq!(first.fill, FillSpec::flat(Color::rgb(255, 0, 0)));
        assert!(!first.wants_pattern());
    }

    #[test]
    fn unknown_pattern_fails_3d_frame_too() {
        let config = config_from(&[
            (DraftField::Is3d, true.into()),
            (DraftField::ShapeType, "box".into()),
            (DraftField::UsePattern, true.into()),
            (DraftField::PatternType, "unknownXYZ".into()),
        ]);
        assert!(matches!(
            build_frame(&config, Viewport::default(), background()),
            Err(RenderError::UnsupportedPatternKind(_))
        ));
    }

    // ── determinism ───────────────────────────────────────────────────────

    proptest! {
        #[test]
        fn identical_config_gives_identical_bytes(
            columns in 1u32..10,
            rows in 1u32..10,
            size in 10.0f32..200.0,
            is_3d in any::<bool>(),
            width in 50.0f32..1200.0,
        ) {
            let shape = if is_3d { "sphere" } else { "zigzag" };
            let config = config_from(&[
                (DraftField::Is3d, is_3d.into()),
                (DraftField::ShapeType, shape.into()),
                (DraftField::Columns, columns.into()),
                (DraftField::Rows, rows.into()),
                (DraftField::ShapeSize, size.into()),
            ]);
            let canvas = Viewport::new(width, 600.0);
            let a = build_frame(&config, canvas, background()).unwrap();
            let b = build_frame(&config, canvas, background()).unwrap();
            prop_assert_eq!(
                a.instructions.to_json_bytes().unwrap(),
                b.instructions.to_json_bytes().unwrap()
            );
            prop_assert_eq!(a.instructions.len(), (columns * rows) as usize);
        }
    }
}

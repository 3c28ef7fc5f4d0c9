//! Raster drawing backend.
//!
//! Responsibilities:
//! - own one `tiny_skia::Pixmap` per surface
//! - keep the transform stack as `glam::Mat4` so 2D and 3D share one path
//! - project solids orthographically around the canvas center (+Y down,
//!   +Z toward the viewer)

mod solid;

use std::path::Path;

use anyhow::Context;
use glam::{Mat4, Vec3 as GVec3};
use tiny_skia::{FillRule, Paint, Path as SkPath, PathBuilder, Pixmap, Rect, Transform};

use gridweave_engine::config::Mode;
use gridweave_engine::coords::Vec3;
use gridweave_engine::error::BackendError;
use gridweave_engine::geometry::Primitive;
use gridweave_engine::paint::{Color, Stroke};
use gridweave_engine::render::{DrawingBackend, SurfaceHandle, SurfaceSpec};

struct Surface {
    handle: SurfaceHandle,
    spec: SurfaceSpec,
    pixmap: Pixmap,
}

/// [`DrawingBackend`] rasterizing into an in-memory pixmap.
pub struct RasterBackend {
    surface: Option<Surface>,
    next_handle: u64,
    stack: Vec<Mat4>,
    stroke: Stroke,
    fill: Option<Color>,
}

impl Default for RasterBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl RasterBackend {
    pub fn new() -> Self {
        Self {
            surface: None,
            next_handle: 1,
            stack: vec![Mat4::IDENTITY],
            stroke: Stroke::new(Color::BLACK, 1.0),
            fill: Some(Color::WHITE),
        }
    }

    /// Pixels of the active surface.
    pub fn pixmap(&self) -> Option<&Pixmap> {
        self.surface.as_ref().map(|s| &s.pixmap)
    }

    pub fn save_png(&self, path: &Path) -> anyhow::Result<()> {
        let pixmap = self.pixmap().context("nothing has been drawn yet")?;
        pixmap
            .save_png(path)
            .with_context(|| format!("failed to write {}", path.display()))
    }

    fn current(&self) -> Mat4 {
        self.stack.last().copied().unwrap_or(Mat4::IDENTITY)
    }

    fn current_mut(&mut self) -> &mut Mat4 {
        if self.stack.is_empty() {
            self.stack.push(Mat4::IDENTITY);
        }
        let last = self.stack.len() - 1;
        &mut self.stack[last]
    }

    /// Base transform for a surface: 3D origin sits at the canvas center.
    fn base(spec: &SurfaceSpec) -> Mat4 {
        match spec.mode {
            Mode::TwoD => Mat4::IDENTITY,
            Mode::ThreeD => Mat4::from_translation(GVec3::new(
                spec.width as f32 / 2.0,
                spec.height as f32 / 2.0,
                0.0,
            )),
        }
    }

    fn paints(&self) -> (Option<Paint<'static>>, Option<(Paint<'static>, tiny_skia::Stroke)>) {
        let fill = self.fill.map(paint);
        let stroke = self.stroke.is_visible().then(|| {
            (
                paint(self.stroke.color),
                tiny_skia::Stroke { width: self.stroke.weight, ..Default::default() },
            )
        });
        (fill, stroke)
    }

    fn fill_and_stroke(&mut self, path: &SkPath, transform: Transform) -> Result<(), BackendError> {
        let (fill, stroke) = self.paints();
        let pixmap = &mut self.surface.as_mut().ok_or(BackendError::InvalidSurface)?.pixmap;
        if let Some(fill) = fill {
            pixmap.fill_path(path, &fill, FillRule::Winding, transform, None);
        }
        if let Some((paint, stroke)) = stroke {
            pixmap.stroke_path(path, &paint, &stroke, transform, None);
        }
        Ok(())
    }

    fn draw_flat(&mut self, primitive: &Primitive) -> Result<(), BackendError> {
        let path = match primitive {
            Primitive::Ellipse { diameter } => {
                let r = diameter / 2.0;
                PathBuilder::from_circle(r, r, r)
            }
            Primitive::Rect { width, height } => {
                Rect::from_xywh(0.0, 0.0, *width, *height).map(PathBuilder::from_rect)
            }
            Primitive::Polygon { vertices } => polygon(vertices.iter().map(|v| (v.x, v.y))),
            Primitive::Solid(_) => None,
        };
        match path {
            Some(path) => self.fill_and_stroke(&path, to_skia(self.current())),
            // Degenerate outlines draw nothing.
            None => Ok(()),
        }
    }
}

impl DrawingBackend for RasterBackend {
    fn create_surface(&mut self, spec: SurfaceSpec) -> Result<SurfaceHandle, BackendError> {
        let pixmap = Pixmap::new(spec.width, spec.height).ok_or_else(|| {
            BackendError::SurfaceCreation(format!("cannot allocate {}x{} pixmap", spec.width, spec.height))
        })?;
        let handle = SurfaceHandle::new(self.next_handle);
        self.next_handle += 1;
        self.stack = vec![Self::base(&spec)];
        self.surface = Some(Surface { handle, spec, pixmap });
        log::debug!("raster surface {}: {}x{} {}", handle.id(), spec.width, spec.height, spec.mode);
        Ok(handle)
    }

    fn dispose(&mut self, surface: SurfaceHandle) {
        if self.surface.as_ref().is_some_and(|s| s.handle == surface) {
            self.surface = None;
        }
    }

    fn clear(&mut self, color: Color) -> Result<(), BackendError> {
        let surface = self.surface.as_mut().ok_or(BackendError::InvalidSurface)?;
        surface.pixmap.fill(skia_color(color));
        self.stack = vec![Self::base(&surface.spec)];
        Ok(())
    }

    fn push(&mut self) {
        let top = self.current();
        self.stack.push(top);
    }

    fn pop(&mut self) {
        if self.stack.len() > 1 {
            self.stack.pop();
        }
    }

    fn translate(&mut self, offset: Vec3) {
        let m = self.current_mut();
        *m *= Mat4::from_translation(GVec3::new(offset.x, offset.y, offset.z));
    }

    fn rotate_x(&mut self, radians: f32) {
        *self.current_mut() *= Mat4::from_rotation_x(radians);
    }

    fn rotate_y(&mut self, radians: f32) {
        *self.current_mut() *= Mat4::from_rotation_y(radians);
    }

    fn rotate_z(&mut self, radians: f32) {
        *self.current_mut() *= Mat4::from_rotation_z(radians);
    }

    fn set_stroke(&mut self, stroke: Stroke) {
        self.stroke = stroke;
    }

    fn set_fill(&mut self, color: Option<Color>) {
        self.fill = color;
    }

    fn draw(&mut self, primitive: &Primitive) -> Result<(), BackendError> {
        if self.surface.is_none() {
            return Err(BackendError::InvalidSurface);
        }
        match primitive {
            Primitive::Solid(s) => {
                let model = self.current();
                for face in solid::project(s, model) {
                    if let Some(path) = face.path() {
                        self.fill_and_stroke(&path, Transform::identity())?;
                    }
                }
                Ok(())
            }
            flat => self.draw_flat(flat),
        }
    }
}

fn skia_color(c: Color) -> tiny_skia::Color {
    tiny_skia::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn paint(c: Color) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(skia_color(c));
    paint.anti_alias = true;
    paint
}

/// 2D affine part of `m` (x/y rows, translation column).
fn to_skia(m: Mat4) -> Transform {
    Transform::from_row(m.x_axis.x, m.x_axis.y, m.y_axis.x, m.y_axis.y, m.w_axis.x, m.w_axis.y)
}

fn polygon(points: impl IntoIterator<Item = (f32, f32)>) -> Option<SkPath> {
    let mut pb = PathBuilder::new();
    let mut points = points.into_iter();
    let (x, y) = points.next()?;
    pb.move_to(x, y);
    for (x, y) in points {
        pb.line_to(x, y);
    }
    pb.close();
    pb.finish()
}

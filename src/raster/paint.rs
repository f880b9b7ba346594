use crate::foundation::core::{Affine, BezPath, Rgba8};
use crate::foundation::error::{ChromeError, ChromeResult};
use crate::raster::buffer::RasterBuffer;

/// Vector-to-raster bridge over `vello_cpu`.
///
/// Paths are accumulated into one render context and resolved by [`Painter::finish`] into a
/// fresh straight-alpha buffer.
pub struct Painter {
    ctx: vello_cpu::RenderContext,
    width: u16,
    height: u16,
}

/// Checked conversion of buffer dimensions into the rasterizer's `u16` range.
pub fn raster_dims(width: u32, height: u32) -> ChromeResult<(u16, u16)> {
    let w = u16::try_from(width).ok().filter(|&v| v > 0);
    let h = u16::try_from(height).ok().filter(|&v| v > 0);
    match (w, h) {
        (Some(w), Some(h)) => Ok((w, h)),
        _ => Err(ChromeError::validation(format!(
            "raster size {width}x{height} must be within 1..=65535 per side"
        ))),
    }
}

impl Painter {
    /// Empty (transparent) `width x height` painter.
    pub fn new(width: u32, height: u32) -> ChromeResult<Self> {
        let (w, h) = raster_dims(width, height)?;
        let mut ctx = vello_cpu::RenderContext::new(w, h);
        ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        Ok(Self {
            ctx,
            width: w,
            height: h,
        })
    }

    /// Fill `path` (nonzero winding) after mapping it through `transform`.
    pub fn fill_path(&mut self, path: &BezPath, transform: Affine, color: Rgba8) {
        self.ctx.set_transform(affine_to_cpu(transform));
        self.ctx.set_paint(paint_color(color));
        self.ctx.fill_path(&bezpath_to_cpu(path));
    }

    /// Stroke `path` with round joins; `width` is in the path's local units.
    pub fn stroke_path(&mut self, path: &BezPath, transform: Affine, width: f64, color: Rgba8) {
        if width <= 0.0 {
            return;
        }
        let stroke = vello_cpu::kurbo::Stroke::new(width)
            .with_join(vello_cpu::kurbo::Join::Round)
            .with_caps(vello_cpu::kurbo::Cap::Round);
        self.ctx.set_transform(affine_to_cpu(transform));
        self.ctx.set_paint(paint_color(color));
        self.ctx.set_stroke(stroke);
        self.ctx.stroke_path(&bezpath_to_cpu(path));
    }

    /// Resolve everything drawn so far.
    pub fn finish(mut self) -> ChromeResult<RasterBuffer> {
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);
        RasterBuffer::from_premul_rgba8(
            u32::from(self.width),
            u32::from(self.height),
            pixmap.data_as_u8_slice(),
        )
    }
}

fn paint_color(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;
    let pt = |p: kurbo::Point| vello_cpu::kurbo::Point::new(p.x, p.y);

    let mut out = vello_cpu::kurbo::BezPath::new();
    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) => out.move_to(pt(p)),
            PathEl::LineTo(p) => out.line_to(pt(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(pt(p1), pt(p2)),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(pt(p1), pt(p2), pt(p3)),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/raster/paint.rs"]
mod tests;

use kurbo::Shape as _;

use crate::foundation::core::{Affine, Canvas, Rect, Rgba8, Vec2};
use crate::foundation::error::{ChromeError, ChromeResult};
use crate::gradient::spec::GradientSpec;
use crate::raster::blend::BlendMode;
use crate::raster::blur::{gaussian_blur, sigma_for_radius};
use crate::raster::buffer::RasterBuffer;
use crate::raster::mask::masked_fill_layer;
use crate::raster::paint::Painter;
use crate::style::glyph::{GlyphRun, PlacedGlyph};

/// Gray of the face before the gradient is multiplied in.
pub const FACE_SHADE: Rgba8 = Rgba8::opaque(236, 236, 236);
/// Extrude gray right behind the face.
pub const EXTRUDE_NEAR: Rgba8 = Rgba8::opaque(150, 150, 150);
/// Extrude gray at full depth.
pub const EXTRUDE_FAR: Rgba8 = Rgba8::opaque(64, 64, 64);
/// Gray of the lower-right bevel rim.
pub const BEVEL_DARK: Rgba8 = Rgba8::opaque(96, 96, 96);

const BEVEL_LIGHT_OPACITY: f32 = 0.85;
const BEVEL_DARK_OPACITY: f32 = 0.6;
const INNER_LINE_RATIO: f64 = 0.35;
const INNER_LINE_SHADE: f32 = 0.25;

/// Pixel-unit styling parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlyphStyle {
    /// Extrude depth toward the lower right.
    pub extrude_depth: f64,
    /// Outline width outside the face.
    pub stroke_width: f64,
    /// Glow blur radius (0 disables the glow).
    pub glow_radius: f64,
    /// Bevel rim width.
    pub bevel_width: f64,
}

impl Default for GlyphStyle {
    fn default() -> Self {
        Self {
            extrude_depth: 6.0,
            stroke_width: 3.0,
            glow_radius: 8.0,
            bevel_width: 2.0,
        }
    }
}

impl GlyphStyle {
    /// Every length multiplied by `k` (supersampling).
    pub fn scaled(self, k: f64) -> Self {
        Self {
            extrude_depth: self.extrude_depth * k,
            stroke_width: self.stroke_width * k,
            glow_radius: self.glow_radius * k,
            bevel_width: self.bevel_width * k,
        }
    }

    /// Space needed around the ink box so no effect gets clipped.
    pub fn margin(&self) -> f64 {
        (self.extrude_depth + self.stroke_width + 2.0 * self.glow_radius + 2.0).ceil()
    }

    /// Integer glow radius fed to the blur.
    pub fn glow_px(&self) -> u32 {
        self.glow_radius.max(0.0).round() as u32
    }
}

/// Colors of one render.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    /// Vertical face ramp.
    pub gradient: GradientSpec,
    /// Outline stroke color.
    pub outline: Rgba8,
    /// Glow color.
    pub glow: Rgba8,
    /// Optional opaque backdrop of the final canvas.
    pub background: Option<Rgba8>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            gradient: GradientSpec::three_stop(
                Rgba8::opaque(0xf5, 0xf7, 0xfa),
                Rgba8::opaque(0x9a, 0xa4, 0xb1),
                Rgba8::opaque(0x3b, 0x42, 0x4d),
            ),
            outline: Rgba8::opaque(0x11, 0x14, 0x18),
            glow: Rgba8::new(0x7f, 0xd4, 0xff, 0xcc),
            background: None,
        }
    }
}

/// The two raster layers the warp pipeline consumes.
#[derive(Clone, Debug)]
pub struct StyledLayers {
    /// Grayscale shading: extrude, face and bevel. Tinted by the gradient after warping.
    pub body: RasterBuffer,
    /// Outline strokes and glow. Never tinted.
    pub fx: RasterBuffer,
    /// Run pen origin inside both layers.
    pub origin: Vec2,
}

/// Offset of extrude step `depth` (in pixels) from the face.
pub fn extrude_offset(depth: f64) -> Vec2 {
    Vec2::new(depth * 0.5, depth)
}

fn local(p: &PlacedGlyph<'_>, offset: Vec2) -> Affine {
    p.transform * Affine::translate(offset)
}

/// Stacked extrude passes, far passes first and darker.
pub fn extrude_layer(
    canvas: Canvas,
    placed: &[PlacedGlyph<'_>],
    style: &GlyphStyle,
) -> ChromeResult<RasterBuffer> {
    let mut painter = Painter::new(canvas.width, canvas.height)?;
    let depth = style.extrude_depth.max(0.0);
    let steps = depth.ceil() as u32;
    for step in (1..=steps).rev() {
        let t = f64::from(step) / f64::from(steps);
        let shade = EXTRUDE_NEAR.lerp(EXTRUDE_FAR, t as f32);
        for p in placed {
            painter.fill_path(p.outline, local(p, extrude_offset(depth * t)), shade);
        }
    }
    painter.finish()
}

/// Face silhouettes filled with `color`, shifted by `offset` in glyph-local space.
pub fn face_layer(
    canvas: Canvas,
    placed: &[PlacedGlyph<'_>],
    offset: Vec2,
    color: Rgba8,
) -> ChromeResult<RasterBuffer> {
    let mut painter = Painter::new(canvas.width, canvas.height)?;
    for p in placed {
        painter.fill_path(p.outline, local(p, offset), color);
    }
    painter.finish()
}

/// Light upper-left and dark lower-right rims, both inside `face`.
pub fn bevel_rims(
    canvas: Canvas,
    placed: &[PlacedGlyph<'_>],
    face: &RasterBuffer,
    width: f64,
) -> ChromeResult<(RasterBuffer, RasterBuffer)> {
    let d = Vec2::new(width, width);
    let mut light = face.clone();
    light.erase_with(&face_layer(canvas, placed, d, Rgba8::WHITE)?);
    let mut dark = face.clone();
    dark.erase_with(&face_layer(canvas, placed, -d, Rgba8::WHITE)?);
    Ok((
        masked_fill_layer(&light, &Rgba8::WHITE),
        masked_fill_layer(&dark, &BEVEL_DARK),
    ))
}

/// Draw both rims of [`bevel_rims`] onto `target`.
pub fn draw_bevel(
    target: &mut RasterBuffer,
    canvas: Canvas,
    placed: &[PlacedGlyph<'_>],
    face: &RasterBuffer,
    width: f64,
) -> ChromeResult<()> {
    if width <= 0.0 {
        return Ok(());
    }
    let (light, dark) = bevel_rims(canvas, placed, face, width)?;
    target.draw(&light, 0, 0, BlendMode::Normal, BEVEL_LIGHT_OPACITY);
    target.draw(&dark, 0, 0, BlendMode::Normal, BEVEL_DARK_OPACITY);
    Ok(())
}

/// Wide outline stroke; half of it lies outside the face.
pub fn outer_stroke_layer(
    canvas: Canvas,
    placed: &[PlacedGlyph<'_>],
    style: &GlyphStyle,
    color: Rgba8,
) -> ChromeResult<RasterBuffer> {
    let mut painter = Painter::new(canvas.width, canvas.height)?;
    for p in placed {
        painter.stroke_path(p.outline, p.transform, style.stroke_width * 2.0, color);
    }
    painter.finish()
}

/// Narrow dark line running along the outline.
pub fn inner_line_layer(
    canvas: Canvas,
    placed: &[PlacedGlyph<'_>],
    style: &GlyphStyle,
    outline: Rgba8,
) -> ChromeResult<RasterBuffer> {
    let mut painter = Painter::new(canvas.width, canvas.height)?;
    let width = style.stroke_width * INNER_LINE_RATIO;
    let color = outline.scale_rgb(INNER_LINE_SHADE);
    for p in placed {
        painter.stroke_path(p.outline, p.transform, width, color);
    }
    painter.finish()
}

/// White silhouettes grown by the stroke, the shape the glow is blurred from.
pub fn glow_silhouette(
    canvas: Canvas,
    placed: &[PlacedGlyph<'_>],
    style: &GlyphStyle,
) -> ChromeResult<RasterBuffer> {
    let mut painter = Painter::new(canvas.width, canvas.height)?;
    for p in placed {
        painter.fill_path(p.outline, p.transform, Rgba8::WHITE);
        painter.stroke_path(p.outline, p.transform, style.stroke_width * 2.0, Rgba8::WHITE);
    }
    painter.finish()
}

/// Blur a silhouette and tint it with `color`.
pub fn glow_from_silhouette(
    silhouette: &RasterBuffer,
    radius: u32,
    color: Rgba8,
) -> ChromeResult<RasterBuffer> {
    let blurred = gaussian_blur(silhouette, radius, sigma_for_radius(radius))?;
    Ok(masked_fill_layer(&blurred, &color))
}

/// Layer size and pen origin fitting `run` plus every effect.
pub fn layer_frame(run: &GlyphRun, style: &GlyphStyle) -> ChromeResult<(Canvas, Vec2)> {
    let ink = run
        .ink_bounds()
        .ok_or_else(|| ChromeError::validation("glyph run has no outlines"))?;
    frame_around(ink, style.margin())
}

/// Canvas covering `ink` grown by `margin` on every side, with the offset mapping ink space into it.
pub fn frame_around(ink: Rect, margin: f64) -> ChromeResult<(Canvas, Vec2)> {
    if !(ink.area().is_finite() && margin.is_finite()) {
        return Err(ChromeError::validation("non-finite glyph geometry"));
    }
    let width = (ink.width() + 2.0 * margin).ceil().max(1.0);
    let height = (ink.height() + 2.0 * margin).ceil().max(1.0);
    if width > f64::from(u16::MAX) || height > f64::from(u16::MAX) {
        return Err(ChromeError::validation(format!(
            "styled text needs {width}x{height} px, above the 65535 px rasterizer limit"
        )));
    }
    let origin = Vec2::new(margin - ink.x0, margin - ink.y0);
    Ok((
        Canvas {
            width: width as u32,
            height: height as u32,
        },
        origin,
    ))
}

/// Build the body and fx layers of an already placed set of glyphs.
pub fn compose_placed(
    canvas: Canvas,
    placed: &[PlacedGlyph<'_>],
    style: &GlyphStyle,
    palette: &Palette,
) -> ChromeResult<(RasterBuffer, RasterBuffer)> {
    let mut body = extrude_layer(canvas, placed, style)?;
    let face = face_layer(canvas, placed, Vec2::ZERO, FACE_SHADE)?;
    body.draw_over(&face);
    draw_bevel(&mut body, canvas, placed, &face, style.bevel_width)?;

    let mut fx = if style.glow_px() > 0 {
        let sil = glow_silhouette(canvas, placed, style)?;
        let mut glow = glow_from_silhouette(&sil, style.glow_px(), palette.glow)?;
        glow.erase_with(&body);
        glow
    } else {
        RasterBuffer::new(canvas.width, canvas.height)?
    };
    if style.stroke_width > 0.0 {
        fx.draw_over(&outer_stroke_layer(canvas, placed, style, palette.outline)?);
        fx.draw_over(&inner_line_layer(canvas, placed, style, palette.outline)?);
    }
    Ok((body, fx))
}

/// Lay `run` out on a straight baseline and build its [`StyledLayers`].
#[tracing::instrument(skip(run, style, palette), fields(glyphs = run.glyphs().len()))]
pub fn compose_layers(
    run: &GlyphRun,
    style: &GlyphStyle,
    palette: &Palette,
) -> ChromeResult<StyledLayers> {
    let (canvas, origin) = layer_frame(run, style)?;
    tracing::debug!(width = canvas.width, height = canvas.height, "layer canvas");
    let placed = run.place_flat(origin);
    let (body, fx) = compose_placed(canvas, &placed, style, palette)?;
    Ok(StyledLayers { body, fx, origin })
}

/// Bounding box of the placed outlines in canvas space.
pub fn placed_ink_bounds(placed: &[PlacedGlyph<'_>]) -> Option<Rect> {
    placed
        .iter()
        .filter(|p| !p.outline.elements().is_empty())
        .map(|p| (p.transform * p.outline.clone()).bounding_box())
        .reduce(|a, b| a.union(b))
}

#[cfg(test)]
#[path = "../../tests/unit/style/layers.rs"]
mod tests;

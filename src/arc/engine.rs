use crate::arc::layout::ArcLayout;
use crate::foundation::core::{Point, Rgba8, Vec2};
use crate::foundation::error::{ChromeError, ChromeResult};
use crate::foundation::math::smoothstep;
use crate::gradient::spec::VerticalGradient;
use crate::raster::blend::BlendMode;
use crate::raster::bounds::{BoundsMode, detect_bounds};
use crate::raster::buffer::RasterBuffer;
use crate::raster::mask::{apply_masked_fill, masked_fill_layer};
use crate::style::glyph::GlyphRun;
use crate::style::layers::{
    GlyphStyle, Palette, draw_bevel, extrude_layer, face_layer, frame_around,
    glow_from_silhouette, glow_silhouette, inner_line_layer, outer_stroke_layer,
    placed_ink_bounds,
};

/// Relative height (from the top of the word) where the highlight has faded out.
pub const HIGHLIGHT_END: f32 = 0.45;
/// Relative height where the bottom shade starts.
pub const SHADE_START: f32 = 0.55;
/// Opacity of the top highlight.
pub const HIGHLIGHT_OPACITY: f32 = 0.5;
/// Opacity of the bottom shade.
pub const SHADE_OPACITY: f32 = 0.45;
/// Color multiplied into the bottom of the word.
pub const SHADE_COLOR: Rgba8 = Rgba8::opaque(48, 48, 56);

/// Draw `run` along an arc, glyph by glyph, and return the finished art.
///
/// No pixels are remapped: every glyph gets extrude, outer stroke, gradient face, inner line and
/// bevel rims in its own rotated frame. The glow of the whole word is blurred once underneath.
/// Afterwards one silhouette mask in world space drives a top highlight and a bottom shade so all
/// glyphs are lit alike regardless of their tilt.
#[tracing::instrument(skip(run, style, palette), fields(glyphs = run.glyphs().len()))]
pub fn render_arc(
    run: &GlyphRun,
    style: &GlyphStyle,
    palette: &Palette,
    curve: f64,
    rotate_factor: f64,
) -> ChromeResult<RasterBuffer> {
    let local_ink = run
        .ink_bounds()
        .ok_or_else(|| ChromeError::validation("glyph run has no outlines"))?;
    let layout = ArcLayout::new(run.total_advance(), curve);
    let rotate_factor = if rotate_factor.is_finite() {
        rotate_factor
    } else {
        1.0
    };

    let apex = layout.place_run(run, rotate_factor, Vec2::ZERO);
    let world_ink = placed_ink_bounds(&apex)
        .ok_or_else(|| ChromeError::validation("glyph run has no outlines"))?;
    let (canvas, origin) = frame_around(world_ink, style.margin())?;
    tracing::debug!(
        radius = ?layout.radius(),
        width = canvas.width,
        height = canvas.height,
        "arc canvas"
    );
    let placed = layout.place_run(run, rotate_factor, origin);

    let mut out = if style.glow_px() > 0 {
        let sil = glow_silhouette(canvas, &placed, style)?;
        glow_from_silhouette(&sil, style.glow_px(), palette.glow)?
    } else {
        RasterBuffer::new(canvas.width, canvas.height)?
    };
    let mut mask = RasterBuffer::new(canvas.width, canvas.height)?;
    let ramp = VerticalGradient::new(&palette.gradient, local_ink.y0, local_ink.y1);

    for p in &placed {
        let one = std::slice::from_ref(p);
        out.draw_over(&extrude_layer(canvas, one, style)?);
        if style.stroke_width > 0.0 {
            out.draw_over(&outer_stroke_layer(canvas, one, style, palette.outline)?);
        }

        let face = face_layer(canvas, one, Vec2::ZERO, Rgba8::WHITE)?;
        let to_local = p.transform.inverse();
        let fill = |x: u32, y: u32| {
            let q = to_local * Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5);
            ramp.color_at(q.y)
        };
        out.draw_over(&masked_fill_layer(&face, &fill));

        if style.stroke_width > 0.0 {
            out.draw_over(&inner_line_layer(canvas, one, style, palette.outline)?);
        }
        draw_bevel(&mut out, canvas, one, &face, style.bevel_width)?;
        mask.draw_over(&face);
    }

    apply_world_shading(&mut out, &mask);
    Ok(out)
}

/// Top highlight (overlay) and bottom shade (multiply) across the extent of `mask`, clipped to it.
pub fn apply_world_shading(target: &mut RasterBuffer, mask: &RasterBuffer) {
    let b = detect_bounds(mask, BoundsMode::Alpha);
    let top = b.min_y as f32;
    let span = b.height().max(1) as f32;
    let rel = move |y: u32| (y as f32 + 0.5 - top) / span;
    let ramp_alpha = |k: f32| (k * 255.0).round().clamp(0.0, 255.0) as u8;

    let highlight = |_x: u32, y: u32| {
        Rgba8::WHITE.with_alpha(ramp_alpha(1.0 - smoothstep(0.0, HIGHLIGHT_END, rel(y))))
    };
    apply_masked_fill(target, mask, &highlight, BlendMode::Overlay, HIGHLIGHT_OPACITY);

    let shade =
        |_x: u32, y: u32| SHADE_COLOR.with_alpha(ramp_alpha(smoothstep(SHADE_START, 1.0, rel(y))));
    apply_masked_fill(target, mask, &shade, BlendMode::Multiply, SHADE_OPACITY);
}

#[cfg(test)]
#[path = "../../tests/unit/arc/engine.rs"]
mod tests;

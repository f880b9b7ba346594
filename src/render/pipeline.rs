use crate::arc::engine::render_arc;
use crate::config::{CurveStrategy, RenderJob, ResolvedConfig};
use crate::foundation::core::{Bounds, Rgba8};
use crate::foundation::error::ChromeResult;
use crate::gradient::reproject::reproject_gradient;
use crate::raster::blend::BlendMode;
use crate::raster::bounds::{BoundsMode, detect_bounds};
use crate::raster::buffer::RasterBuffer;
use crate::style::glyph::GlyphRun;
use crate::style::layers::compose_layers;
use crate::warp::geometry::{WarpFill, WarpGeometry};
use crate::warp::params::WarpParams;

/// Render styled, optionally bent text onto the configured canvas.
///
/// `run` is in output pixels (glyph size already applied). Pipeline:
/// 1. scale the run and every pixel-unit parameter by the supersample factor
/// 2. build the body and fx layers (or place glyphs on an arc, which skips 3 and 4)
/// 3. warp both layers with one geometry derived from the body's alpha bounds
/// 4. re-synthesize the gradient over the warped body, then put the fx layer on top
/// 5. center the art on the enlarged canvas and downsample it to the output size
#[tracing::instrument(skip(config, run), fields(glyphs = run.glyphs().len()))]
pub fn render_text(config: &ResolvedConfig, run: &GlyphRun) -> ChromeResult<RasterBuffer> {
    let ss = config.supersampler;
    let k = f64::from(ss.factor());
    let run = run
        .clone()
        .with_letter_spacing(config.letter_spacing)
        .scaled(k);
    let style = config.style.scaled(k);

    let art = match config.curve {
        CurveStrategy::Arc {
            curve,
            rotate_factor,
        } => render_arc(&run, &style, &config.palette, curve, rotate_factor)?,
        CurveStrategy::Flat => {
            let layers = compose_layers(&run, &style, &config.palette)?;
            finish_layers(layers.body, &layers.fx, config)
        }
        CurveStrategy::Warp(params) => {
            let layers = compose_layers(&run, &style, &config.palette)?;
            let reference = detect_bounds(&layers.body, BoundsMode::Alpha);
            let params = WarpParams {
                bend: params.bend * k,
                ..params
            }
            .fold_safe(reference);
            if params.is_identity() {
                finish_layers(layers.body, &layers.fx, config)
            } else {
                let (body, fx) = warp_layers(&layers.body, &layers.fx, &params, reference)?;
                finish_layers(body, &fx, config)
            }
        }
    };

    place_on_canvas(&art, config)
}

/// Warp body and fx with a single geometry so they stay registered.
pub fn warp_layers(
    body: &RasterBuffer,
    fx: &RasterBuffer,
    params: &WarpParams,
    reference: Bounds,
) -> ChromeResult<(RasterBuffer, RasterBuffer)> {
    let geometry = WarpGeometry::new(body.width(), body.height(), params, reference);
    Ok((
        geometry.apply(body, WarpFill::Transparent)?,
        geometry.apply(fx, WarpFill::Transparent)?,
    ))
}

fn finish_layers(body: RasterBuffer, fx: &RasterBuffer, config: &ResolvedConfig) -> RasterBuffer {
    let mut art = reproject_gradient(&body, &config.palette.gradient);
    art.draw_over(fx);
    art
}

/// Center `art` on the supersampled canvas and reduce it to the output size.
pub fn place_on_canvas(art: &RasterBuffer, config: &ResolvedConfig) -> ChromeResult<RasterBuffer> {
    let ss = config.supersampler;
    let (w, h) = (config.canvas.width, config.canvas.height);
    let (sw, sh) = (ss.scale_u32(w)?, ss.scale_u32(h)?);
    let backdrop = config.palette.background.unwrap_or(Rgba8::TRANSPARENT);
    let mut big = RasterBuffer::filled(sw, sh, backdrop)?;
    let dx = (i64::from(sw) - i64::from(art.width())) / 2;
    let dy = (i64::from(sh) - i64::from(art.height())) / 2;
    if dx < 0 || dy < 0 {
        tracing::warn!(
            art_width = art.width(),
            art_height = art.height(),
            "art larger than canvas, edges are clipped"
        );
    }
    big.draw(art, dx, dy, BlendMode::Normal, 1.0);
    ss.downsample(&big, w, h)
}

/// Resolve a job's configuration and render its glyphs.
pub fn render_job(job: &RenderJob) -> ChromeResult<RasterBuffer> {
    let config = job.config.resolve();
    let run = job.glyph_run(config.size)?;
    render_text(&config, &run)
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;

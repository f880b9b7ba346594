use crate::gradient::spec::{GradientSpec, VerticalGradient};
use crate::raster::blend::BlendMode;
use crate::raster::bounds::{BoundsMode, detect_bounds};
use crate::raster::buffer::RasterBuffer;
use crate::raster::mask::apply_masked_fill;

/// Tint a grayscale shading layer with a freshly synthesized gradient.
///
/// The ramp spans exactly the current alpha bounds of `body`. Run this after every warp so the
/// color bands follow the warped extent.
///
/// The gradient is multiplied onto every pixel of `body` with any coverage, so white shading
/// shows the pure gradient color, darker bevel/extrude shading darkens it, and antialiased edges
/// get the same tint as the interior. Alpha is untouched.
#[tracing::instrument(skip(body, spec), fields(width = body.width(), height = body.height()))]
pub fn reproject_gradient(body: &RasterBuffer, spec: &GradientSpec) -> RasterBuffer {
    let bounds = detect_bounds(body, BoundsMode::Alpha);
    tracing::debug!(?bounds, "gradient bounds");
    let fill = VerticalGradient::new(spec, f64::from(bounds.min_y), f64::from(bounds.max_y));
    let mut out = body.clone();
    apply_masked_fill(&mut out, &body.coverage(), &fill, BlendMode::Multiply, 1.0);
    out
}

#[cfg(test)]
#[path = "../../tests/unit/gradient/reproject.rs"]
mod tests;

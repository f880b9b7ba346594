//! Raster warp engine.
//!
//! Every mode is expressed as a per-column forward map from source row to destination row. The
//! map is forced strictly increasing and then inverted with a forward-only scan pointer, so each
//! column costs `O(height)` and pixels are bilinearly resampled between neighbouring source rows.

pub(crate) mod geometry;
pub(crate) mod params;
pub(crate) mod profile;
pub(crate) mod resample;

use crate::foundation::core::Bounds;
use crate::foundation::error::ChromeResult;
use crate::raster::bounds::{BoundsMode, detect_bounds, opaque_background};
use crate::raster::buffer::RasterBuffer;
use geometry::{WarpFill, WarpGeometry};
use params::WarpParams;

/// Warp `buffer` with geometry derived from `reference` (the glyph box of the canonical layer).
///
/// Returns a new buffer; the input is never modified.
#[tracing::instrument(skip(buffer), fields(width = buffer.width(), height = buffer.height()))]
pub fn warp(
    buffer: &RasterBuffer,
    params: &WarpParams,
    reference: Bounds,
) -> ChromeResult<RasterBuffer> {
    WarpGeometry::new(buffer.width(), buffer.height(), params, reference)
        .apply(buffer, WarpFill::Transparent)
}

/// Warp an already-flattened opaque image.
///
/// The glyph box is found by color distance from the corner-estimated background (`tolerance`
/// is the RGB distance threshold), bend is limited to the fold-safe range, and uncovered rows are
/// filled with the background color. Images with a transparent backdrop fall back to alpha
/// detection and transparent fill.
#[tracing::instrument(skip(buffer), fields(width = buffer.width(), height = buffer.height()))]
pub fn warp_flattened(
    buffer: &RasterBuffer,
    params: &WarpParams,
    tolerance: f32,
) -> ChromeResult<RasterBuffer> {
    let reference = detect_bounds(buffer, BoundsMode::Background { tolerance });
    let fill = match opaque_background(buffer) {
        Some(bg) => WarpFill::Color(bg),
        None => WarpFill::Transparent,
    };
    let glyph_height = f64::from(reference.height());
    let params = params.clamped(glyph_height).fold_safe(reference);
    WarpGeometry::new(buffer.width(), buffer.height(), &params, reference).apply(buffer, fill)
}

#[cfg(test)]
#[path = "../../tests/unit/warp/mod.rs"]
mod tests;

//! Tight content bounds of a raster buffer.
//!
//! Two detection modes:
//!
//! - [`BoundsMode::Alpha`]: for layers drawn on a transparent background. A pixel is content
//!   when its alpha exceeds [`ALPHA_EPSILON`].
//! - [`BoundsMode::Background`]: for already-flattened opaque images where alpha is uniformly
//!   255. The background color is estimated from the four corners and a pixel is content when its
//!   squared RGB distance from it exceeds `tolerance²`.
//!
//! When nothing qualifies, [`detect_bounds`] degrades to the full buffer so that downstream math
//! dividing by a range never sees zero.

use crate::foundation::core::{Bounds, Rgba8};
use crate::raster::buffer::RasterBuffer;

/// Alpha values at or below this count as empty (≈ 2/255).
pub const ALPHA_EPSILON: u8 = 2;

/// Corner-background alpha at or above this counts as an opaque backdrop.
pub const OPAQUE_BACKGROUND_ALPHA: u8 = 250;

/// How content pixels are told apart from background.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BoundsMode {
    /// `alpha > ALPHA_EPSILON`.
    Alpha,
    /// RGB distance from the corner-estimated background greater than `tolerance`.
    Background {
        /// Euclidean RGB distance threshold in 0..=441.
        tolerance: f32,
    },
}

/// Average of the four corner pixels.
pub fn estimate_background(buf: &RasterBuffer) -> Rgba8 {
    let (w, h) = (buf.width() - 1, buf.height() - 1);
    let corners = [
        buf.pixel(0, 0),
        buf.pixel(w, 0),
        buf.pixel(0, h),
        buf.pixel(w, h),
    ];
    let avg = |f: fn(&Rgba8) -> u8| -> u8 {
        let sum: u32 = corners.iter().map(|c| u32::from(f(c))).sum();
        ((sum + 2) / 4) as u8
    };
    Rgba8::new(avg(|c| c.r), avg(|c| c.g), avg(|c| c.b), avg(|c| c.a))
}

/// The estimated background when it is opaque enough to be treated as a flattened backdrop.
pub fn opaque_background(buf: &RasterBuffer) -> Option<Rgba8> {
    let bg = estimate_background(buf);
    (bg.a >= OPAQUE_BACKGROUND_ALPHA).then_some(bg)
}

/// Tight bounds of content pixels, or `None` when there are none.
///
/// Background mode with a non-opaque backdrop falls back to alpha thresholding, since color
/// distance carries no signal against transparency.
pub fn content_bounds(buf: &RasterBuffer, mode: BoundsMode) -> Option<Bounds> {
    let is_content: Box<dyn Fn(Rgba8) -> bool> = match mode {
        BoundsMode::Alpha => Box::new(|px: Rgba8| px.a > ALPHA_EPSILON),
        BoundsMode::Background { tolerance } => match opaque_background(buf) {
            Some(bg) => {
                let tol = tolerance.max(0.0);
                let tol2 = tol * tol;
                Box::new(move |px: Rgba8| {
                    let dr = f32::from(px.r) - f32::from(bg.r);
                    let dg = f32::from(px.g) - f32::from(bg.g);
                    let db = f32::from(px.b) - f32::from(bg.b);
                    dr * dr + dg * dg + db * db > tol2
                })
            }
            None => Box::new(|px: Rgba8| px.a > ALPHA_EPSILON),
        },
    };

    let mut found: Option<Bounds> = None;
    for y in 0..buf.height() {
        for x in 0..buf.width() {
            if !is_content(buf.pixel(x, y)) {
                continue;
            }
            found = Some(match found {
                None => Bounds {
                    min_x: x,
                    min_y: y,
                    max_x: x,
                    max_y: y,
                },
                Some(b) => Bounds {
                    min_x: b.min_x.min(x),
                    min_y: b.min_y.min(y),
                    max_x: b.max_x.max(x),
                    max_y: b.max_y.max(y),
                },
            });
        }
    }
    found
}

/// [`content_bounds`], falling back to the full buffer when no content is found.
pub fn detect_bounds(buf: &RasterBuffer, mode: BoundsMode) -> Bounds {
    content_bounds(buf, mode).unwrap_or_else(|| {
        tracing::debug!(
            width = buf.width(),
            height = buf.height(),
            "no content pixels; using full-buffer bounds"
        );
        Bounds::full(buf.width(), buf.height())
    })
}

#[cfg(test)]
#[path = "../../tests/unit/raster/bounds.rs"]
mod tests;

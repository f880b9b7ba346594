use crate::foundation::core::{Bounds, Rgba8};
use crate::foundation::error::{ChromeError, ChromeResult};
use crate::raster::buffer::RasterBuffer;
use crate::warp::params::{WarpDirection, WarpMode, WarpParams, start_row, warp_range};
use crate::warp::profile::{column_curve, onset, peak_column_curve};
use crate::warp::resample::{enforce_monotonic, resample_column};

/// What output rows not covered by any source row receive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WarpFill {
    /// Transparent pixels (layers on a transparent background).
    #[default]
    Transparent,
    /// A solid backdrop color (flattened opaque images).
    Color(Rgba8),
}

impl WarpFill {
    fn color(self) -> Rgba8 {
        match self {
            WarpFill::Transparent => Rgba8::TRANSPARENT,
            WarpFill::Color(c) => c,
        }
    }
}

/// Resolved warp geometry for one `width x height` source size.
///
/// Derived once from a reference glyph box, then applied to any number of same-sized layers so
/// they all bend identically.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WarpGeometry {
    params: WarpParams,
    width: u32,
    height: u32,
    start_row: f64,
    warp_range: f64,
    top_padding: u32,
    out_height: u32,
}

impl WarpGeometry {
    /// Plan a warp of a `width x height` buffer whose glyph occupies `reference`.
    pub fn new(width: u32, height: u32, params: &WarpParams, reference: Bounds) -> Self {
        let start = start_row(reference, params.start_ratio);
        let range = warp_range(reference, start);
        let mut geom = Self {
            params: *params,
            width,
            height,
            start_row: start,
            warp_range: range,
            top_padding: 0,
            out_height: height,
        };

        let (top, bottom) = match params.mode {
            WarpMode::BottomWeighted => {
                let pad = params.bend.max(0.0).ceil() as u32;
                match params.direction {
                    WarpDirection::Down => (0, pad),
                    WarpDirection::Up => (pad, 0),
                }
            }
            WarpMode::FullParabolic | WarpMode::BottomOnlyParabolic => {
                let (min_shift, max_shift) = geom.shift_extent();
                ((-min_shift).max(0.0).ceil() as u32, max_shift.max(0.0).ceil() as u32)
            }
        };
        geom.top_padding = top;
        geom.out_height = height + top + bottom;

        tracing::debug!(
            mode = ?params.mode,
            bend = params.bend,
            start_row = geom.start_row,
            warp_range = geom.warp_range,
            top_padding = geom.top_padding,
            out_height = geom.out_height,
            "warp geometry"
        );
        geom
    }

    /// First row that bends (rows at or above stay rigid).
    pub fn start_row(&self) -> f64 {
        self.start_row
    }

    /// Rows between [`Self::start_row`] and the glyph bottom (at least 1).
    pub fn warp_range(&self) -> f64 {
        self.warp_range
    }

    /// Blank rows added above the source.
    pub fn top_padding(&self) -> u32 {
        self.top_padding
    }

    /// Output height including padding.
    pub fn out_height(&self) -> u32 {
        self.out_height
    }

    /// Vertical displacement of source pixel `(x, y)`, before padding.
    ///
    /// The onset is capped at `1` below the glyph bottom, so rows there move with the bottom edge
    /// instead of following the power curve past it.
    pub fn shift(&self, x: u32, y: f64) -> f64 {
        let p = &self.params;
        let column = p.direction.sign() * p.bend * column_curve(x, self.width);
        match p.mode {
            WarpMode::FullParabolic => column,
            WarpMode::BottomWeighted | WarpMode::BottomOnlyParabolic => {
                column * onset(y, self.start_row, self.warp_range, p.power)
            }
        }
    }

    /// Smallest and largest displacement any source pixel receives.
    fn shift_extent(&self) -> (f64, f64) {
        let p = &self.params;
        let peak = p.direction.sign() * p.bend * peak_column_curve(self.width);
        let reach = match p.mode {
            WarpMode::FullParabolic => 1.0,
            WarpMode::BottomWeighted | WarpMode::BottomOnlyParabolic => onset(
                f64::from(self.height.saturating_sub(1)),
                self.start_row,
                self.warp_range,
                p.power,
            ),
        };
        let extreme = peak * reach;
        (extreme.min(0.0), extreme.max(0.0))
    }

    /// Strictly increasing destination row for every source row of column `x`.
    pub fn forward_map(&self, x: u32) -> Vec<f64> {
        let pad = f64::from(self.top_padding);
        let mut fwd: Vec<f64> = (0..self.height)
            .map(|y| {
                let yf = f64::from(y);
                yf + pad + self.shift(x, yf)
            })
            .collect();
        enforce_monotonic(&mut fwd);
        fwd
    }

    /// Warp `src` (which must have the planned size) into a new buffer.
    pub fn apply(&self, src: &RasterBuffer, fill: WarpFill) -> ChromeResult<RasterBuffer> {
        if src.width() != self.width || src.height() != self.height {
            return Err(ChromeError::validation(format!(
                "warp planned for {}x{}, got {}x{}",
                self.width,
                self.height,
                src.width(),
                src.height()
            )));
        }
        let fill = fill.color();
        let mut out = RasterBuffer::filled(self.width, self.out_height, fill)?;
        for x in 0..self.width {
            let fwd = self.forward_map(x);
            resample_column(src, x, &fwd, &mut out, fill);
        }
        Ok(out)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/warp/geometry.rs"]
mod tests;

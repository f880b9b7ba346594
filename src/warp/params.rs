use serde::{Deserialize, Serialize};

use crate::foundation::core::Bounds;
use crate::foundation::math::clamp_or;

/// Accepted range of the warp start ratio.
pub const START_RATIO_RANGE: (f64, f64) = (0.2, 0.9);
/// Accepted range of the onset power.
pub const POWER_RANGE: (f64, f64) = (0.5, 3.0);
/// Largest bend as a fraction of the glyph size.
pub const MAX_BEND_FRACTION: f64 = 0.9;
/// Fraction of the available warp range a bottom warp may bend before folding.
///
/// Upward bends are further divided by the steepest onset step (see [`WarpParams::fold_safe`]).
/// The forward map is still forced monotone, so exceeding it compresses rows instead of
/// folding them.
pub const FOLD_SAFETY: f64 = 0.88;

/// Default start ratio / power for the bottom-weighted warp.
pub const BOTTOM_WEIGHTED_DEFAULTS: (f64, f64) = (0.45, 1.6);
/// Default start ratio / power for the bottom-only parabolic arc (tighter onset).
pub const BOTTOM_ARC_DEFAULTS: (f64, f64) = (0.6, 2.2);

/// Vertical direction of the displacement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WarpDirection {
    /// Positive y (bottom bulges downward).
    #[default]
    Down,
    /// Negative y.
    Up,
}

impl WarpDirection {
    /// `+1.0` for down, `-1.0` for up.
    pub fn sign(self) -> f64 {
        match self {
            WarpDirection::Down => 1.0,
            WarpDirection::Up => -1.0,
        }
    }
}

/// Deformation strategy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WarpMode {
    /// Top rigid, bottom bends with a power-curve onset; fixed padding of `ceil(bend)`.
    #[default]
    BottomWeighted,
    /// Whole column shifted by the parabola.
    FullParabolic,
    /// Parabola with the bottom-weighted onset; padding derived from the actual shifts.
    BottomOnlyParabolic,
}

/// Parameters of one warp.
///
/// The engine assumes these are already inside their documented ranges; use
/// [`WarpParams::clamped`] and [`WarpParams::fold_safe`] on the caller side.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WarpParams {
    /// Peak displacement in pixels (`0..=size*0.9`).
    pub bend: f64,
    /// Fraction of the glyph height where bending starts (`0.2..=0.9`).
    pub start_ratio: f64,
    /// Exponent of the onset curve (`0.5..=3.0`).
    pub power: f64,
    /// Sign of the displacement.
    pub direction: WarpDirection,
    /// Strategy.
    pub mode: WarpMode,
}

impl Default for WarpParams {
    fn default() -> Self {
        Self::bottom_weighted(0.0, WarpDirection::Down)
    }
}

impl WarpParams {
    /// Bottom-weighted warp with default onset.
    pub fn bottom_weighted(bend: f64, direction: WarpDirection) -> Self {
        let (start_ratio, power) = BOTTOM_WEIGHTED_DEFAULTS;
        Self {
            bend,
            start_ratio,
            power,
            direction,
            mode: WarpMode::BottomWeighted,
        }
    }

    /// Full parabolic arc. Positive `arc_px` lifts the center (shift `-arc_px * curve(x)`).
    pub fn full_arc(arc_px: f64) -> Self {
        Self {
            bend: arc_px.abs(),
            mode: WarpMode::FullParabolic,
            direction: arc_direction(arc_px),
            ..Self::default()
        }
    }

    /// Bottom-only parabolic arc with its tighter default onset.
    pub fn bottom_arc(arc_px: f64) -> Self {
        let (start_ratio, power) = BOTTOM_ARC_DEFAULTS;
        Self {
            bend: arc_px.abs(),
            start_ratio,
            power,
            direction: arc_direction(arc_px),
            mode: WarpMode::BottomOnlyParabolic,
        }
    }

    /// Same params with explicit onset settings.
    pub fn with_onset(mut self, start_ratio: f64, power: f64) -> Self {
        self.start_ratio = start_ratio;
        self.power = power;
        self
    }

    /// Clamp every field into its documented range; non-finite values take the mode default.
    pub fn clamped(self, glyph_size: f64) -> Self {
        let (default_start, default_power) = match self.mode {
            WarpMode::BottomOnlyParabolic => BOTTOM_ARC_DEFAULTS,
            _ => BOTTOM_WEIGHTED_DEFAULTS,
        };
        let max_bend = (glyph_size.max(0.0) * MAX_BEND_FRACTION).max(0.0);
        Self {
            bend: clamp_or(self.bend, 0.0, max_bend, 0.0),
            start_ratio: clamp_or(
                self.start_ratio,
                START_RATIO_RANGE.0,
                START_RATIO_RANGE.1,
                default_start,
            ),
            power: clamp_or(self.power, POWER_RANGE.0, POWER_RANGE.1, default_power),
            ..self
        }
    }

    /// Limit `bend` to `FOLD_SAFETY` of the warp range measured on `reference`.
    ///
    /// An upward bend pulls each row toward the one above it, by at most `bend` times the largest
    /// onset increase between neighbouring rows. That product is kept under `FOLD_SAFETY`, so
    /// every forward-map step stays at least `1 - FOLD_SAFETY`. Full parabolic arcs translate
    /// whole columns and cannot fold, so they are left alone.
    pub fn fold_safe(self, reference: Bounds) -> Self {
        if self.mode == WarpMode::FullParabolic {
            return self;
        }
        let start = start_row(reference, self.start_ratio);
        let range = warp_range(reference, start);
        let limit = match self.direction {
            WarpDirection::Down => range * FOLD_SAFETY,
            WarpDirection::Up => {
                (range * FOLD_SAFETY).min(FOLD_SAFETY / max_onset_step(range, self.power))
            }
        };
        Self {
            bend: self.bend.min(limit),
            ..self
        }
    }

    /// Whether this warp leaves every pixel in place.
    pub fn is_identity(&self) -> bool {
        self.bend == 0.0
    }
}

fn arc_direction(arc_px: f64) -> WarpDirection {
    if arc_px > 0.0 {
        WarpDirection::Up
    } else {
        WarpDirection::Down
    }
}

/// Upper bound on how much the onset grows from one row to the next.
///
/// Convex onsets (`power >= 1`) grow fastest at the glyph bottom, by at most `power / range`.
/// Concave ones grow fastest on the first row past the start, by at most `range^-power`.
fn max_onset_step(range: f64, power: f64) -> f64 {
    (power / range).max(range.powf(-power))
}

/// `glyphTop + (glyphBottom - glyphTop) * start_ratio`.
pub fn start_row(bounds: Bounds, start_ratio: f64) -> f64 {
    let top = f64::from(bounds.min_y);
    let bottom = f64::from(bounds.max_y);
    top + (bottom - top) * start_ratio
}

/// `max(1, glyphBottom - start_row)`.
pub fn warp_range(bounds: Bounds, start_row: f64) -> f64 {
    (f64::from(bounds.max_y) - start_row).max(1.0)
}

#[cfg(test)]
#[path = "../../tests/unit/warp/params.rs"]
mod tests;

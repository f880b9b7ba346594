use serde::{Deserialize, Serialize};

use crate::foundation::core::Rgba8;
use crate::foundation::error::{ChromeError, ChromeResult};
use crate::raster::mask::FillGenerator;

/// One color stop of a vertical ramp.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    /// Position in `[0, 1]` (0 = top of the current bounds).
    pub position: f32,
    /// Stop color.
    pub color: Rgba8,
}

/// Ordered color stops sampled per row of the *current* content bounds.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GradientSpec {
    stops: Vec<GradientStop>,
}

impl GradientSpec {
    /// Validate and wrap `stops` (non-empty, positions in `[0, 1]`, non-decreasing).
    pub fn new(stops: Vec<GradientStop>) -> ChromeResult<Self> {
        if stops.is_empty() {
            return Err(ChromeError::validation("gradient needs at least one stop"));
        }
        let mut prev = 0.0f32;
        for s in &stops {
            if !(0.0..=1.0).contains(&s.position) {
                return Err(ChromeError::validation(format!(
                    "gradient stop position {} outside [0, 1]",
                    s.position
                )));
            }
            if s.position < prev {
                return Err(ChromeError::validation(
                    "gradient stop positions must be non-decreasing",
                ));
            }
            prev = s.position;
        }
        Ok(Self { stops })
    }

    /// Top color -> mid highlight -> bottom color.
    pub fn three_stop(top: Rgba8, mid: Rgba8, bottom: Rgba8) -> Self {
        Self {
            stops: vec![
                GradientStop {
                    position: 0.0,
                    color: top,
                },
                GradientStop {
                    position: 0.5,
                    color: mid,
                },
                GradientStop {
                    position: 1.0,
                    color: bottom,
                },
            ],
        }
    }

    /// The stops.
    pub fn stops(&self) -> &[GradientStop] {
        &self.stops
    }

    /// Color at `t` (clamped to `[0, 1]`); flat beyond the first and last stop.
    pub fn sample(&self, t: f32) -> Rgba8 {
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
        let first = self.stops[0];
        if t <= first.position {
            return first.color;
        }
        for pair in self.stops.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if t <= b.position {
                let span = b.position - a.position;
                if span <= f32::EPSILON {
                    return b.color;
                }
                return a.color.lerp(b.color, (t - a.position) / span);
            }
        }
        self.stops[self.stops.len() - 1].color
    }
}

/// A [`GradientSpec`] stretched over rows `top..=bottom` of a buffer.
#[derive(Clone, Copy, Debug)]
pub struct VerticalGradient<'a> {
    spec: &'a GradientSpec,
    top: f64,
    bottom: f64,
}

impl<'a> VerticalGradient<'a> {
    /// Ramp `spec` from row `top` (t = 0) to row `bottom` (t = 1).
    pub fn new(spec: &'a GradientSpec, top: f64, bottom: f64) -> Self {
        Self { spec, top, bottom }
    }

    /// Ramp parameter of row `y`.
    pub fn t_at(&self, y: f64) -> f32 {
        let span = self.bottom - self.top;
        if span.abs() < f64::EPSILON {
            return 0.0;
        }
        ((y - self.top) / span).clamp(0.0, 1.0) as f32
    }

    /// Color of row `y`.
    pub fn color_at(&self, y: f64) -> Rgba8 {
        self.spec.sample(self.t_at(y))
    }
}

impl FillGenerator for VerticalGradient<'_> {
    fn sample(&self, _x: u32, y: u32) -> Rgba8 {
        self.color_at(f64::from(y))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/gradient/spec.rs"]
mod tests;

use std::f64::consts::FRAC_PI_3;

use crate::foundation::core::{Affine, Point, Vec2};
use crate::style::glyph::{GlyphRun, PlacedGlyph};

/// Largest accepted `|curve|`.
pub const MAX_CURVE: f64 = 100.0;

/// Circle that glyph centers are placed on.
///
/// `curve` in `-100..=100` maps linearly to a half-angle of up to 60 degrees spanned by the run.
/// Positive values arch upward (ends drop), negative values sag (ends rise).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcLayout {
    half_angle: f64,
    radius: Option<f64>,
    sign: f64,
}

impl ArcLayout {
    /// Layout for a run `total_width` pixels wide.
    pub fn new(total_width: f64, curve: f64) -> Self {
        let curve = if curve.is_finite() {
            curve.clamp(-MAX_CURVE, MAX_CURVE)
        } else {
            0.0
        };
        let half_angle = curve.abs() / MAX_CURVE * FRAC_PI_3;
        let radius = (half_angle > 0.0 && total_width > 0.0)
            .then(|| (total_width / 2.0) / half_angle);
        Self {
            half_angle,
            radius,
            sign: if curve < 0.0 { -1.0 } else { 1.0 },
        }
    }

    /// Half of the angle spanned by the run, in radians.
    pub fn half_angle(&self) -> f64 {
        self.half_angle
    }

    /// Circle radius, `None` for a straight baseline.
    pub fn radius(&self) -> Option<f64> {
        self.radius
    }

    /// Baseline point and tangent angle for a glyph centered `s` pixels from the run middle.
    ///
    /// The arc length from the apex equals `s`, so spacing along the curve matches the flat run.
    pub fn place(&self, s: f64) -> (Point, f64) {
        match self.radius {
            None => (Point::new(s, 0.0), 0.0),
            Some(r) => {
                let theta = s / r;
                let drop = r * (1.0 - theta.cos());
                (
                    Point::new(r * theta.sin(), self.sign * drop),
                    self.sign * theta,
                )
            }
        }
    }

    /// Local-to-apex transform of every glyph; rotation is the tangent angle times
    /// `rotate_factor`.
    pub fn transforms(&self, run: &GlyphRun, rotate_factor: f64) -> Vec<Affine> {
        let half = run.total_advance() / 2.0;
        run.glyphs()
            .iter()
            .zip(run.pen_positions())
            .map(|(g, pen)| {
                let center = pen + g.advance / 2.0 - half;
                let (p, angle) = self.place(center);
                Affine::translate(p.to_vec2())
                    * Affine::rotate(angle * rotate_factor)
                    * Affine::translate(Vec2::new(-g.advance / 2.0, 0.0))
            })
            .collect()
    }

    /// Glyphs of `run` placed on the arc, then shifted by `origin`.
    pub fn place_run<'r>(
        &self,
        run: &'r GlyphRun,
        rotate_factor: f64,
        origin: Vec2,
    ) -> Vec<PlacedGlyph<'r>> {
        run.glyphs()
            .iter()
            .zip(self.transforms(run, rotate_factor))
            .map(|(g, t)| PlacedGlyph {
                outline: &g.outline,
                transform: Affine::translate(origin) * t,
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/arc/layout.rs"]
mod tests;

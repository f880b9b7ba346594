use kurbo::Shape as _;

use crate::foundation::core::{Affine, BezPath, Rect, Vec2};
use crate::foundation::error::{ChromeError, ChromeResult};

/// One glyph outline in pixel units at the render size, baseline at `y = 0`, pen at `x = 0`.
#[derive(Clone, Debug, PartialEq)]
pub struct Glyph {
    /// Filled outline (nonzero winding).
    pub outline: BezPath,
    /// Horizontal pen advance in pixels.
    pub advance: f64,
}

impl Glyph {
    /// Parse SVG path data into a glyph.
    pub fn from_svg(d: &str, advance: f64) -> ChromeResult<Self> {
        let outline = BezPath::from_svg(d.trim())
            .map_err(|e| ChromeError::validation(format!("invalid glyph path data: {e}")))?;
        if !advance.is_finite() || advance < 0.0 {
            return Err(ChromeError::validation("glyph advance must be finite and >= 0"));
        }
        Ok(Self { outline, advance })
    }
}

/// A glyph outline with its placement on a canvas.
#[derive(Clone, Copy, Debug)]
pub struct PlacedGlyph<'a> {
    /// Outline in glyph-local pixels.
    pub outline: &'a BezPath,
    /// Local -> canvas transform.
    pub transform: Affine,
}

/// A horizontal run of glyphs, as produced by the external font/shaping collaborator.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GlyphRun {
    glyphs: Vec<Glyph>,
    letter_spacing: f64,
}

impl GlyphRun {
    /// Run with no extra tracking.
    pub fn new(glyphs: Vec<Glyph>) -> Self {
        Self {
            glyphs,
            letter_spacing: 0.0,
        }
    }

    /// Build from `(svg path data, advance)` pairs.
    pub fn from_svg_paths<'s>(
        items: impl IntoIterator<Item = (&'s str, f64)>,
    ) -> ChromeResult<Self> {
        let glyphs = items
            .into_iter()
            .map(|(d, adv)| Glyph::from_svg(d, adv))
            .collect::<ChromeResult<Vec<_>>>()?;
        Ok(Self::new(glyphs))
    }

    /// Extra pixels inserted between consecutive glyphs.
    pub fn with_letter_spacing(mut self, px: f64) -> Self {
        self.letter_spacing = if px.is_finite() { px } else { 0.0 };
        self
    }

    /// The glyphs in order.
    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    /// Pen x of every glyph relative to the run start.
    pub fn pen_positions(&self) -> Vec<f64> {
        let mut x = 0.0;
        let mut out = Vec::with_capacity(self.glyphs.len());
        for g in &self.glyphs {
            out.push(x);
            x += g.advance + self.letter_spacing;
        }
        out
    }

    /// Advance of the whole run (no trailing spacing).
    pub fn total_advance(&self) -> f64 {
        let sum: f64 = self.glyphs.iter().map(|g| g.advance).sum();
        let gaps = self.glyphs.len().saturating_sub(1) as f64;
        (sum + gaps * self.letter_spacing).max(0.0)
    }

    /// Union of the outline boxes with every glyph at its pen position.
    pub fn ink_bounds(&self) -> Option<Rect> {
        self.glyphs
            .iter()
            .zip(self.pen_positions())
            .filter(|(g, _)| !g.outline.elements().is_empty())
            .map(|(g, x)| (Affine::translate((x, 0.0)) * g.outline.clone()).bounding_box())
            .reduce(|a, b| a.union(b))
    }

    /// Uniformly scaled copy (outlines, advances and spacing).
    pub fn scaled(&self, k: f64) -> Self {
        Self {
            glyphs: self
                .glyphs
                .iter()
                .map(|g| Glyph {
                    outline: Affine::scale(k) * g.outline.clone(),
                    advance: g.advance * k,
                })
                .collect(),
            letter_spacing: self.letter_spacing * k,
        }
    }

    /// Straight-line placement with the run's pen origin at `origin`.
    pub fn place_flat(&self, origin: Vec2) -> Vec<PlacedGlyph<'_>> {
        self.glyphs
            .iter()
            .zip(self.pen_positions())
            .map(|(g, x)| PlacedGlyph {
                outline: &g.outline,
                transform: Affine::translate(origin + Vec2::new(x, 0.0)),
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/glyph.rs"]
mod tests;

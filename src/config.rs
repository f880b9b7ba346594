//! JSON render configuration and its clamped, ready-to-render form.

use serde::{Deserialize, Serialize};

use crate::foundation::core::{Canvas, Rgba8};
use crate::foundation::error::{ChromeError, ChromeResult};
use crate::foundation::math::clamp_or;
use crate::gradient::spec::GradientSpec;
use crate::raster::supersample::Supersampler;
use crate::style::glyph::{Glyph, GlyphRun};
use crate::style::layers::{GlyphStyle, Palette};
use crate::warp::params::{
    BOTTOM_ARC_DEFAULTS, BOTTOM_WEIGHTED_DEFAULTS, WarpDirection, WarpParams,
};

/// Largest output canvas side.
pub const MAX_CANVAS: u32 = 8192;
/// Glyph size range in pixels.
pub const SIZE_RANGE: (f64, f64) = (8.0, 1024.0);
/// Peak arc displacement at `curve = ±100`, as a fraction of the glyph size.
pub const ARC_CURVE_SCALE: f64 = 0.5;

/// How the text is bent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CurveMode {
    /// Straight baseline.
    #[default]
    Flat,
    /// Per-glyph placement on a circle.
    Arc,
    /// Parabolic raster arc driven by `curve`.
    ArcCurve,
    /// Bottom-weighted raster warp driven by `bend`.
    BottomWarp,
}

/// Which part of the glyph height an `arcCurve` bends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CurveScope {
    /// Whole columns move.
    #[default]
    Full,
    /// Only the lower part bends.
    BottomOnly,
}

/// Hex color strings; invalid entries fall back to the defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColorConfig {
    /// Gradient color at the top of the text.
    pub top: String,
    /// Gradient color halfway down.
    pub mid: String,
    /// Gradient color at the bottom.
    pub bottom: String,
    /// Outline stroke.
    pub outline: String,
    /// Glow tint (alpha respected).
    pub glow: String,
    /// Opaque canvas backdrop; transparent when absent.
    pub background: Option<String>,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            top: "#f5f7fa".to_owned(),
            mid: "#9aa4b1".to_owned(),
            bottom: "#3b424d".to_owned(),
            outline: "#111418".to_owned(),
            glow: "#7fd4ffcc".to_owned(),
            background: None,
        }
    }
}

/// Render configuration as received from the outside.
///
/// Every field is optional in JSON. Nothing is validated here; see [`RenderConfig::resolve`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderConfig {
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Glyph size (em) in pixels.
    pub size: f64,
    /// Bending strategy.
    pub curve_mode: CurveMode,
    /// Bottom-warp displacement in pixels.
    pub bend: f64,
    /// Arc strength, `-100..=100`.
    pub curve: f64,
    /// Onset start; the mode's default when absent.
    pub warp_start_ratio: Option<f64>,
    /// Onset exponent; the mode's default when absent.
    pub warp_power: Option<f64>,
    /// Bottom-warp direction.
    pub warp_direction: WarpDirection,
    /// Part of the glyph an `arcCurve` bends.
    pub curve_scope: CurveScope,
    /// Palette as hex strings.
    pub colors: ColorConfig,
    /// Extrude depth in pixels.
    pub extrude_depth: f64,
    /// Outline width in pixels.
    pub stroke_width: f64,
    /// Glow blur radius in pixels.
    pub glow_radius: f64,
    /// Bevel rim width in pixels.
    pub bevel_width: f64,
    /// Extra tracking between glyphs in pixels.
    pub letter_spacing: f64,
    /// How much of the tangent angle each arc glyph is rotated by.
    pub arc_rotate_factor: f64,
    /// Internal render scale (`1..=4`).
    pub supersample: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        let style = GlyphStyle::default();
        Self {
            width: 1200,
            height: 400,
            size: 160.0,
            curve_mode: CurveMode::Flat,
            bend: 0.0,
            curve: 0.0,
            warp_start_ratio: None,
            warp_power: None,
            warp_direction: WarpDirection::Down,
            curve_scope: CurveScope::Full,
            colors: ColorConfig::default(),
            extrude_depth: style.extrude_depth,
            stroke_width: style.stroke_width,
            glow_radius: style.glow_radius,
            bevel_width: style.bevel_width,
            letter_spacing: 0.0,
            arc_rotate_factor: 1.0,
            supersample: Supersampler::default().factor(),
        }
    }
}

/// Bending strategy after resolution.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CurveStrategy {
    /// No bending.
    Flat,
    /// Raster warp of the styled layers (output-pixel units).
    Warp(WarpParams),
    /// Per-glyph arc placement.
    Arc {
        /// `-100..=100`.
        curve: f64,
        /// Tangent rotation multiplier.
        rotate_factor: f64,
    },
}

/// Clamped configuration in output-pixel units.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedConfig {
    /// Output canvas.
    pub canvas: Canvas,
    /// Glyph size in pixels.
    pub size: f64,
    /// Extra tracking in pixels.
    pub letter_spacing: f64,
    /// Bending strategy.
    pub curve: CurveStrategy,
    /// Effect sizes.
    pub style: GlyphStyle,
    /// Colors.
    pub palette: Palette,
    /// Internal render scale.
    pub supersampler: Supersampler,
}

impl RenderConfig {
    /// Parse a JSON record.
    pub fn from_json_str(s: &str) -> ChromeResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Clamp every field into range and build the render-ready form. Never fails.
    pub fn resolve(&self) -> ResolvedConfig {
        let d = Self::default();
        let size = clamp_or(self.size, SIZE_RANGE.0, SIZE_RANGE.1, d.size);
        let curve = clamp_or(self.curve, -100.0, 100.0, 0.0);

        let strategy = match self.curve_mode {
            CurveMode::Flat => CurveStrategy::Flat,
            CurveMode::Arc => CurveStrategy::Arc {
                curve,
                rotate_factor: clamp_or(self.arc_rotate_factor, 0.0, 2.0, d.arc_rotate_factor),
            },
            CurveMode::BottomWarp => {
                let p = WarpParams::bottom_weighted(self.bend, self.warp_direction);
                CurveStrategy::Warp(self.with_onset(p, BOTTOM_WEIGHTED_DEFAULTS).clamped(size))
            }
            CurveMode::ArcCurve => {
                let arc_px = curve / 100.0 * size * ARC_CURVE_SCALE;
                let p = match self.curve_scope {
                    CurveScope::Full => WarpParams::full_arc(arc_px),
                    CurveScope::BottomOnly => {
                        self.with_onset(WarpParams::bottom_arc(arc_px), BOTTOM_ARC_DEFAULTS)
                    }
                };
                CurveStrategy::Warp(p.clamped(size))
            }
        };

        let style = GlyphStyle {
            extrude_depth: clamp_or(self.extrude_depth, 0.0, size * 0.5, d.extrude_depth),
            stroke_width: clamp_or(self.stroke_width, 0.0, size * 0.25, d.stroke_width),
            glow_radius: clamp_or(self.glow_radius, 0.0, size * 0.5, d.glow_radius),
            bevel_width: clamp_or(self.bevel_width, 0.0, size * 0.1, d.bevel_width),
        };

        ResolvedConfig {
            canvas: Canvas {
                width: self.width.clamp(1, MAX_CANVAS),
                height: self.height.clamp(1, MAX_CANVAS),
            },
            size,
            letter_spacing: clamp_or(self.letter_spacing, -size * 0.5, size, 0.0),
            curve: strategy,
            style,
            palette: self.colors.resolve(),
            supersampler: Supersampler::new(self.supersample),
        }
    }

    fn with_onset(&self, p: WarpParams, defaults: (f64, f64)) -> WarpParams {
        p.with_onset(
            self.warp_start_ratio.unwrap_or(defaults.0),
            self.warp_power.unwrap_or(defaults.1),
        )
    }
}

impl ColorConfig {
    /// Parsed palette; each invalid color is replaced by its default with a warning.
    pub fn resolve(&self) -> Palette {
        let d = Self::default();
        let top = color_or(&self.top, &d.top, "top");
        let mid = color_or(&self.mid, &d.mid, "mid");
        let bottom = color_or(&self.bottom, &d.bottom, "bottom");
        Palette {
            gradient: GradientSpec::three_stop(top, mid, bottom),
            outline: color_or(&self.outline, &d.outline, "outline"),
            glow: color_or(&self.glow, &d.glow, "glow"),
            background: self.background.as_deref().and_then(|s| {
                Rgba8::from_hex(s)
                    .inspect_err(|e| tracing::warn!(field = "background", %e, "ignoring color"))
                    .ok()
            }),
        }
    }
}

fn color_or(value: &str, default: &str, field: &'static str) -> Rgba8 {
    match Rgba8::from_hex(value) {
        Ok(c) => c,
        Err(e) => {
            tracing::warn!(field, value, %e, "invalid color, using default");
            Rgba8::from_hex(default).unwrap_or(Rgba8::WHITE)
        }
    }
}

/// One glyph of a [`RenderJob`]: SVG path data in font units (y down, baseline at 0).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlyphData {
    /// SVG path data.
    pub path: String,
    /// Pen advance in font units.
    pub advance: f64,
}

/// A complete render request: configuration plus the shaped glyphs of the text.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderJob {
    /// Render settings.
    #[serde(default)]
    pub config: RenderConfig,
    /// Font units per em of the glyph data.
    #[serde(default = "default_units_per_em")]
    pub units_per_em: f64,
    /// Glyphs in visual order.
    pub glyphs: Vec<GlyphData>,
}

fn default_units_per_em() -> f64 {
    1000.0
}

impl RenderJob {
    /// Parse a JSON job.
    pub fn from_json_str(s: &str) -> ChromeResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Glyph run scaled from font units to `size` pixels per em.
    pub fn glyph_run(&self, size: f64) -> ChromeResult<GlyphRun> {
        if !(self.units_per_em.is_finite() && self.units_per_em > 0.0) {
            return Err(ChromeError::validation("unitsPerEm must be > 0"));
        }
        let glyphs = self
            .glyphs
            .iter()
            .map(|g| Glyph::from_svg(&g.path, g.advance))
            .collect::<ChromeResult<Vec<_>>>()?;
        Ok(GlyphRun::new(glyphs).scaled(size / self.units_per_em))
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;

use serde::{Deserialize, Serialize};

use crate::foundation::core::Rgba8;

/// Separable blend modes used by the compositor (W3C compositing semantics, straight alpha).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlendMode {
    /// Plain source-over.
    #[default]
    Normal,
    /// `src * dst`; darkens.
    Multiply,
    /// `1 - (1 - src)(1 - dst)`; lightens.
    Screen,
    /// Multiply or screen depending on the backdrop.
    Overlay,
}

impl BlendMode {
    fn mix(self, cb: f32, cs: f32) -> f32 {
        match self {
            BlendMode::Normal => cs,
            BlendMode::Multiply => cb * cs,
            BlendMode::Screen => cb + cs - cb * cs,
            BlendMode::Overlay => {
                if cb <= 0.5 {
                    2.0 * cb * cs
                } else {
                    1.0 - 2.0 * (1.0 - cb) * (1.0 - cs)
                }
            }
        }
    }
}

/// Composite `src` onto `dst` with `mode`, scaling source alpha by `opacity`.
pub fn blend(dst: Rgba8, src: Rgba8, mode: BlendMode, opacity: f32) -> Rgba8 {
    let opacity = opacity.clamp(0.0, 1.0);
    if opacity <= 0.0 || src.a == 0 {
        return dst;
    }
    let sa = f32::from(src.a) / 255.0 * opacity;
    let da = f32::from(dst.a) / 255.0;
    let out_a = sa + da * (1.0 - sa);
    if out_a <= 0.0 {
        return Rgba8::TRANSPARENT;
    }

    let channel = |cb: u8, cs: u8| -> u8 {
        let cb = f32::from(cb) / 255.0;
        let cs = f32::from(cs) / 255.0;
        let mixed = (1.0 - da) * cs + da * mode.mix(cb, cs);
        let c = (sa * mixed + da * (1.0 - sa) * cb) / out_a;
        (c * 255.0).round().clamp(0.0, 255.0) as u8
    };

    Rgba8::new(
        channel(dst.r, src.r),
        channel(dst.g, src.g),
        channel(dst.b, src.b),
        (out_a * 255.0).round().clamp(0.0, 255.0) as u8,
    )
}

/// Source-atop: blend `src` into `dst`'s color while keeping `dst`'s alpha.
///
/// Used for tints and shading overlays, which must never grow or shrink a silhouette.
pub fn blend_atop(dst: Rgba8, src: Rgba8, mode: BlendMode, opacity: f32) -> Rgba8 {
    let sa = f32::from(src.a) / 255.0 * opacity.clamp(0.0, 1.0);
    if sa <= 0.0 || dst.a == 0 {
        return dst;
    }
    let channel = |cb: u8, cs: u8| -> u8 {
        let cb = f32::from(cb) / 255.0;
        let cs = f32::from(cs) / 255.0;
        let c = cb + (mode.mix(cb, cs) - cb) * sa;
        (c * 255.0).round().clamp(0.0, 255.0) as u8
    };
    Rgba8::new(
        channel(dst.r, src.r),
        channel(dst.g, src.g),
        channel(dst.b, src.b),
        dst.a,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/raster/blend.rs"]
mod tests;

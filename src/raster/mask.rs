use crate::foundation::core::Rgba8;
use crate::raster::blend::{BlendMode, blend_atop};
use crate::raster::buffer::RasterBuffer;

/// Procedural per-pixel color source.
pub trait FillGenerator {
    /// Color at pixel `(x, y)` of the target buffer.
    fn sample(&self, x: u32, y: u32) -> Rgba8;
}

impl FillGenerator for Rgba8 {
    fn sample(&self, _x: u32, _y: u32) -> Rgba8 {
        *self
    }
}

impl<F> FillGenerator for F
where
    F: Fn(u32, u32) -> Rgba8,
{
    fn sample(&self, x: u32, y: u32) -> Rgba8 {
        self(x, y)
    }
}

/// Stencil-then-fill: generate `fill` everywhere, keep it only where `stencil` has coverage
/// (destination-in, scaled by stencil alpha) and blend the result atop `target`, leaving the
/// target's alpha untouched.
///
/// `stencil` is read at the same pixel coordinates as `target`; stencil pixels outside its
/// extent count as empty.
pub fn apply_masked_fill<G: FillGenerator + ?Sized>(
    target: &mut RasterBuffer,
    stencil: &RasterBuffer,
    fill: &G,
    mode: BlendMode,
    opacity: f32,
) {
    let w = target.width().min(stencil.width());
    let h = target.height().min(stencil.height());
    for y in 0..h {
        for x in 0..w {
            let sa = stencil.alpha(x, y);
            if sa == 0 {
                continue;
            }
            let c = fill.sample(x, y);
            let a = ((u32::from(c.a) * u32::from(sa) + 127) / 255) as u8;
            if a == 0 {
                continue;
            }
            let out = blend_atop(target.pixel(x, y), c.with_alpha(a), mode, opacity);
            target.set_pixel(x, y, out);
        }
    }
}

/// Fresh buffer holding `fill` clipped to `stencil`.
pub fn masked_fill_layer<G: FillGenerator + ?Sized>(
    stencil: &RasterBuffer,
    fill: &G,
) -> RasterBuffer {
    let mut out = stencil.clone();
    for y in 0..out.height() {
        for x in 0..out.width() {
            let sa = stencil.alpha(x, y);
            let px = if sa == 0 {
                Rgba8::TRANSPARENT
            } else {
                let c = fill.sample(x, y);
                c.with_alpha(((u32::from(c.a) * u32::from(sa) + 127) / 255) as u8)
            };
            out.set_pixel(x, y, px);
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/raster/mask.rs"]
mod tests;

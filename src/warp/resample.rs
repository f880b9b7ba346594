use crate::foundation::core::Rgba8;
use crate::raster::buffer::RasterBuffer;

/// Minimum step between consecutive forward-map entries.
pub const MONOTONIC_EPSILON: f64 = 1e-3;

/// Force `fwd` strictly increasing: any step below [`MONOTONIC_EPSILON`] is raised to it.
pub fn enforce_monotonic(fwd: &mut [f64]) {
    for i in 1..fwd.len() {
        let floor = fwd[i - 1] + MONOTONIC_EPSILON;
        if fwd[i] < floor {
            fwd[i] = floor;
        }
    }
}

/// Resample column `x` of `src` into column `x` of `out` by inverting the forward map `fwd`.
///
/// `fwd[sy]` is the destination row of source row `sy` and must be strictly increasing. The scan
/// pointer only moves forward as the output row grows, so the inversion is linear in the
/// column height. Output rows outside `[fwd[0], fwd[h-1]]` receive `fill`.
pub fn resample_column(src: &RasterBuffer, x: u32, fwd: &[f64], out: &mut RasterBuffer, fill: Rgba8) {
    let h = fwd.len();
    debug_assert_eq!(h, src.height() as usize);
    let (first, last) = (fwd[0], fwd[h - 1]);

    let mut sy = 0usize;
    for oy in 0..out.height() {
        let oyf = f64::from(oy);
        if oyf < first || oyf > last {
            out.set_pixel(x, oy, fill);
            continue;
        }
        if h == 1 {
            out.set_pixel(x, oy, src.pixel(x, 0));
            continue;
        }

        while sy + 2 < h && fwd[sy + 1] <= oyf {
            sy += 1;
        }
        let (lo, hi) = (fwd[sy], fwd[sy + 1]);
        let t = ((oyf - lo) / (hi - lo)).clamp(0.0, 1.0);
        let a = src.pixel(x, sy as u32);
        let b = src.pixel(x, sy as u32 + 1);
        out.set_pixel(x, oy, lerp_premul(a, b, t));
    }
}

/// Interpolate two straight-alpha pixels through premultiplied space. The endpoints are
/// returned untouched.
pub fn lerp_premul(a: Rgba8, b: Rgba8, t: f64) -> Rgba8 {
    if t <= 0.0 {
        return a;
    }
    if t >= 1.0 {
        return b;
    }
    let aa = f64::from(a.a);
    let ba = f64::from(b.a);
    let alpha = aa + (ba - aa) * t;
    if alpha <= 0.0 {
        return Rgba8::TRANSPARENT;
    }
    let channel = |ca: u8, cb: u8| -> u8 {
        let pa = f64::from(ca) * aa;
        let pb = f64::from(cb) * ba;
        ((pa + (pb - pa) * t) / alpha).round().clamp(0.0, 255.0) as u8
    };
    Rgba8::new(
        channel(a.r, b.r),
        channel(a.g, b.g),
        channel(a.b, b.b),
        alpha.round().clamp(0.0, 255.0) as u8,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/warp/resample.rs"]
mod tests;

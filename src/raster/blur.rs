use crate::foundation::error::{ChromeError, ChromeResult};
use crate::raster::buffer::RasterBuffer;

/// Separable gaussian blur of a straight-alpha buffer.
///
/// Blurring happens on premultiplied data so transparent neighbours do not darken edges.
/// `radius == 0` returns an identical copy.
pub fn gaussian_blur(src: &RasterBuffer, radius: u32, sigma: f32) -> ChromeResult<RasterBuffer> {
    if radius == 0 {
        return Ok(src.clone());
    }
    let (width, height) = (src.width(), src.height());
    let premul = src.to_premul_rgba8();
    let kernel = gaussian_kernel_q16(radius, sigma)?;
    let mut tmp = vec![0u8; premul.len()];
    let mut out = vec![0u8; premul.len()];

    blur_pass(&premul, &mut tmp, width, height, &kernel, Axis::Horizontal);
    blur_pass(&tmp, &mut out, width, height, &kernel, Axis::Vertical);
    RasterBuffer::from_premul_rgba8(width, height, &out)
}

/// Sigma matching a blur radius the way CSS-style glow radii are usually specified.
pub fn sigma_for_radius(radius: u32) -> f32 {
    (radius as f32 / 2.0).max(0.5)
}

/// Gaussian taps in q16 fixed point, summing to exactly `1 << 16`.
fn gaussian_kernel_q16(radius: u32, sigma: f32) -> ChromeResult<Vec<u32>> {
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(ChromeError::validation("blur sigma must be > 0"));
    }
    let two_sigma_sq = 2.0 * f64::from(sigma).powi(2);
    let r = i64::from(radius);
    let taps: Vec<f64> = (-r..=r)
        .map(|i| (-((i * i) as f64) / two_sigma_sq).exp())
        .collect();
    let total: f64 = taps.iter().sum();

    let mut kernel: Vec<u32> = taps
        .iter()
        .map(|t| ((t / total) * Q16_ONE as f64).round().clamp(0.0, Q16_ONE as f64) as u32)
        .collect();
    let drift = i64::from(Q16_ONE) - kernel.iter().map(|&q| i64::from(q)).sum::<i64>();
    let mid = kernel.len() / 2;
    kernel[mid] = (i64::from(kernel[mid]) + drift).clamp(0, i64::from(Q16_ONE)) as u32;
    Ok(kernel)
}

const Q16_ONE: u32 = 1 << 16;

#[derive(Clone, Copy)]
enum Axis {
    Horizontal,
    Vertical,
}

/// One 1-D convolution over premultiplied RGBA8. Taps outside the buffer count as transparent.
fn blur_pass(src: &[u8], dst: &mut [u8], width: u32, height: u32, kernel: &[u32], axis: Axis) {
    let (w, h) = (i64::from(width), i64::from(height));
    let radius = (kernel.len() / 2) as i64;
    let (len, step) = match axis {
        Axis::Horizontal => (w, 1),
        Axis::Vertical => (h, w),
    };
    for y in 0..h {
        for x in 0..w {
            let pos = match axis {
                Axis::Horizontal => x,
                Axis::Vertical => y,
            };
            let here = y * w + x;
            let mut acc = [0u64; 4];
            for (ki, &kw) in kernel.iter().enumerate() {
                let offset = ki as i64 - radius;
                if !(0..len).contains(&(pos + offset)) {
                    continue;
                }
                let i = ((here + offset * step) * 4) as usize;
                for (a, &v) in acc.iter_mut().zip(&src[i..i + 4]) {
                    *a += u64::from(kw) * u64::from(v);
                }
            }
            let o = (here * 4) as usize;
            for (d, a) in dst[o..o + 4].iter_mut().zip(acc) {
                *d = ((a + u64::from(Q16_ONE / 2)) >> 16).min(255) as u8;
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/blur.rs"]
mod tests;

use crate::foundation::core::Rgba8;
use crate::foundation::error::{ChromeError, ChromeResult};
use crate::foundation::math::{premultiply, unpremultiply};
use crate::raster::blend::{BlendMode, blend};

/// Owned `width x height` grid of straight-alpha RGBA8 pixels, row-major.
///
/// Operations that change geometry (warps, crops, resampling) never mutate in place: they read
/// from `&self` and return a new buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

fn byte_len(width: u32, height: u32) -> ChromeResult<usize> {
    if width == 0 || height == 0 {
        return Err(ChromeError::validation(format!(
            "raster buffer must be at least 1x1, got {width}x{height}"
        )));
    }
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(4))
        .ok_or_else(|| ChromeError::validation("raster buffer size overflow"))
}

impl RasterBuffer {
    /// Fully transparent buffer.
    pub fn new(width: u32, height: u32) -> ChromeResult<Self> {
        let len = byte_len(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![0; len],
        })
    }

    /// Buffer with every pixel set to `color`.
    pub fn filled(width: u32, height: u32, color: Rgba8) -> ChromeResult<Self> {
        let len = byte_len(width, height)?;
        Ok(Self {
            width,
            height,
            data: color.to_array().repeat(len / 4),
        })
    }

    /// Wrap straight RGBA8 bytes.
    pub fn from_rgba8(width: u32, height: u32, data: Vec<u8>) -> ChromeResult<Self> {
        let len = byte_len(width, height)?;
        if data.len() != len {
            return Err(ChromeError::validation(format!(
                "expected {len} rgba8 bytes for {width}x{height}, got {}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Convert premultiplied RGBA8 bytes (rasterizer output) into a straight-alpha buffer.
    pub fn from_premul_rgba8(width: u32, height: u32, premul: &[u8]) -> ChromeResult<Self> {
        let len = byte_len(width, height)?;
        if premul.len() != len {
            return Err(ChromeError::raster(format!(
                "expected {len} premultiplied bytes for {width}x{height}, got {}",
                premul.len()
            )));
        }
        let mut data = Vec::with_capacity(len);
        for px in premul.chunks_exact(4) {
            data.extend_from_slice(&unpremultiply([px[0], px[1], px[2], px[3]]));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Premultiplied copy of the pixel data.
    pub fn to_premul_rgba8(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.data.len());
        for px in self.data.chunks_exact(4) {
            out.extend_from_slice(&premultiply([px[0], px[1], px[2], px[3]]));
        }
        out
    }

    /// Take ownership of an `image` buffer.
    pub fn from_image(img: image::RgbaImage) -> ChromeResult<Self> {
        let (w, h) = img.dimensions();
        Self::from_rgba8(w, h, img.into_raw())
    }

    /// Hand the pixels to the `image` crate (for encoding by the caller).
    pub fn into_image(self) -> ChromeResult<image::RgbaImage> {
        image::RgbaImage::from_raw(self.width, self.height, self.data)
            .ok_or_else(|| ChromeError::raster("rgba8 length does not match dimensions"))
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw straight RGBA8 bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    fn idx(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.width as usize) + (x as usize)) * 4
    }

    /// Pixel at `(x, y)`; panics when out of range.
    pub fn pixel(&self, x: u32, y: u32) -> Rgba8 {
        assert!(x < self.width && y < self.height, "pixel out of range");
        let i = self.idx(x, y);
        Rgba8::new(
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        )
    }

    /// Alpha at `(x, y)`.
    pub fn alpha(&self, x: u32, y: u32) -> u8 {
        self.data[self.idx(x, y) + 3]
    }

    /// Overwrite the pixel at `(x, y)`; panics when out of range.
    pub fn set_pixel(&mut self, x: u32, y: u32, c: Rgba8) {
        assert!(x < self.width && y < self.height, "pixel out of range");
        let i = self.idx(x, y);
        self.data[i..i + 4].copy_from_slice(&c.to_array());
    }

    /// Blend `src` onto this buffer with its top-left corner at `(dx, dy)`. Pixels falling
    /// outside are dropped.
    pub fn draw(&mut self, src: &RasterBuffer, dx: i64, dy: i64, mode: BlendMode, opacity: f32) {
        for sy in 0..src.height {
            let ty = i64::from(sy) + dy;
            if ty < 0 || ty >= i64::from(self.height) {
                continue;
            }
            for sx in 0..src.width {
                let tx = i64::from(sx) + dx;
                if tx < 0 || tx >= i64::from(self.width) {
                    continue;
                }
                let s = src.pixel(sx, sy);
                if s.a == 0 {
                    continue;
                }
                let (tx, ty) = (tx as u32, ty as u32);
                let out = blend(self.pixel(tx, ty), s, mode, opacity);
                self.set_pixel(tx, ty, out);
            }
        }
    }

    /// Source-over `src` at the origin.
    pub fn draw_over(&mut self, src: &RasterBuffer) {
        self.draw(src, 0, 0, BlendMode::Normal, 1.0);
    }

    /// Destination-out: remove this buffer wherever `stencil` has coverage.
    ///
    /// Pixels outside `stencil` are kept.
    pub fn erase_with(&mut self, stencil: &RasterBuffer) {
        let w = self.width;
        for y in 0..self.height {
            for x in 0..w {
                let sa = if x < stencil.width && y < stencil.height {
                    stencil.alpha(x, y)
                } else {
                    0
                };
                let k = 255 - sa;
                let i = self.idx(x, y) + 3;
                let a = u32::from(self.data[i]);
                self.data[i] = ((a * u32::from(k) + 127) / 255) as u8;
                if self.data[i] == 0 {
                    self.data[i - 3..i].fill(0);
                }
            }
        }
    }

    /// Opaque white wherever this buffer has any alpha, transparent elsewhere.
    pub fn coverage(&self) -> RasterBuffer {
        let mut out = self.clone();
        for px in out.data.chunks_exact_mut(4) {
            let v = if px[3] > 0 { 255 } else { 0 };
            px.fill(v);
        }
        out
    }

    /// Whether every pixel is fully transparent.
    pub fn is_blank(&self) -> bool {
        self.data.chunks_exact(4).all(|px| px[3] == 0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/buffer.rs"]
mod tests;

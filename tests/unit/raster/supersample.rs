use super::*;
use crate::foundation::core::Rgba8;

#[test]
fn factor_is_clamped() {
    assert_eq!(Supersampler::new(0).factor(), 1);
    assert_eq!(Supersampler::new(9).factor(), MAX_SUPERSAMPLE);
    assert_eq!(Supersampler::default().factor(), 3);
}

#[test]
fn scale_helpers_multiply() {
    let s = Supersampler::new(3);
    assert_eq!(s.scale_u32(40).unwrap(), 120);
    assert!(s.scale_u32(u32::MAX).is_err());
}

#[test]
fn downsampled_solid_stays_solid() {
    let s = Supersampler::new(3);
    let src = RasterBuffer::filled(30, 12, Rgba8::opaque(200, 120, 40)).unwrap();
    let out = s.downsample(&src, 10, 4).unwrap();
    assert_eq!((out.width(), out.height()), (10, 4));
    let px = out.pixel(5, 2);
    assert_eq!(px.a, 255);
    assert!((i32::from(px.r) - 200).abs() <= 1);
    assert!((i32::from(px.g) - 120).abs() <= 1);
}

#[test]
fn downsample_does_not_darken_transparent_edges() {
    let s = Supersampler::new(3);
    let mut src = RasterBuffer::new(30, 30).unwrap();
    for y in 0..30 {
        for x in 0..15 {
            src.set_pixel(x, y, Rgba8::WHITE);
        }
    }
    let out = s.downsample(&src, 10, 10).unwrap();
    for x in 0..10 {
        let px = out.pixel(x, 5);
        if px.a > 16 {
            assert!(px.r >= 240, "dark fringe at x={x}: {px:?}");
        }
    }
}

#[test]
fn same_size_is_a_copy() {
    let src = RasterBuffer::filled(4, 4, Rgba8::WHITE).unwrap();
    assert_eq!(Supersampler::new(2).downsample(&src, 4, 4).unwrap(), src);
}

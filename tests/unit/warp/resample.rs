use super::*;

fn gradient_column(h: u32) -> RasterBuffer {
    let mut buf = RasterBuffer::new(1, h).unwrap();
    for y in 0..h {
        buf.set_pixel(0, y, Rgba8::opaque((y * 10) as u8, 0, 0));
    }
    buf
}

#[test]
fn monotonic_fixup_raises_non_increasing_steps() {
    let mut fwd = vec![0.0, 1.0, 0.5, 0.5, 4.0];
    enforce_monotonic(&mut fwd);
    for w in fwd.windows(2) {
        assert!(w[1] > w[0]);
    }
    assert_eq!(fwd[0], 0.0);
    assert_eq!(fwd[4], 4.0);
    assert!((fwd[2] - (1.0 + MONOTONIC_EPSILON)).abs() < 1e-12);
}

#[test]
fn identity_map_copies_rows_exactly() {
    let src = gradient_column(6);
    let fwd: Vec<f64> = (0..6).map(f64::from).collect();
    let mut out = RasterBuffer::new(1, 6).unwrap();
    resample_column(&src, 0, &fwd, &mut out, Rgba8::TRANSPARENT);
    assert_eq!(out, src);
}

#[test]
fn offset_map_fills_outside_range() {
    let src = gradient_column(3);
    let fwd = vec![2.0, 3.0, 4.0];
    let mut out = RasterBuffer::new(1, 6).unwrap();
    let fill = Rgba8::opaque(1, 2, 3);
    resample_column(&src, 0, &fwd, &mut out, fill);
    assert_eq!(out.pixel(0, 0), fill);
    assert_eq!(out.pixel(0, 1), fill);
    assert_eq!(out.pixel(0, 2), src.pixel(0, 0));
    assert_eq!(out.pixel(0, 4), src.pixel(0, 2));
    assert_eq!(out.pixel(0, 5), fill);
}

#[test]
fn stretched_map_interpolates_between_rows() {
    let src = gradient_column(2);
    let fwd = vec![0.0, 4.0];
    let mut out = RasterBuffer::new(1, 5).unwrap();
    resample_column(&src, 0, &fwd, &mut out, Rgba8::TRANSPARENT);
    let reds: Vec<u8> = (0..5).map(|y| out.pixel(0, y).r).collect();
    assert_eq!(reds, vec![0, 3, 5, 8, 10]);
}

#[test]
fn lerp_premul_does_not_bleed_transparent_color() {
    let opaque = Rgba8::opaque(200, 100, 0);
    let clear = Rgba8::new(0, 0, 255, 0);
    let mid = lerp_premul(opaque, clear, 0.5);
    assert_eq!((mid.r, mid.g, mid.b), (200, 100, 0));
    assert!((i32::from(mid.a) - 128).abs() <= 1);
}

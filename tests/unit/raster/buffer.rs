use super::*;

#[test]
fn rejects_zero_and_mismatched_sizes() {
    assert!(RasterBuffer::new(0, 4).is_err());
    assert!(RasterBuffer::from_rgba8(2, 2, vec![0; 15]).is_err());
    assert!(RasterBuffer::from_premul_rgba8(2, 2, &[0; 12]).is_err());
}

#[test]
fn premul_conversion_unpremultiplies() {
    let buf = RasterBuffer::from_premul_rgba8(1, 1, &[64, 32, 0, 128]).unwrap();
    let px = buf.pixel(0, 0);
    assert_eq!(px.a, 128);
    assert!((i32::from(px.r) - 128).abs() <= 1);
    assert!((i32::from(px.g) - 64).abs() <= 1);
}

#[test]
fn draw_clips_to_destination() {
    let mut dst = RasterBuffer::new(4, 4).unwrap();
    let src = RasterBuffer::filled(2, 2, Rgba8::WHITE).unwrap();
    dst.draw(&src, 3, -1, BlendMode::Normal, 1.0);
    assert_eq!(dst.pixel(3, 0), Rgba8::WHITE);
    assert_eq!(dst.alpha(2, 0), 0);
    assert_eq!(dst.alpha(3, 1), 0);
}

#[test]
fn erase_removes_covered_pixels() {
    let mut stencil = RasterBuffer::new(2, 1).unwrap();
    stencil.set_pixel(0, 0, Rgba8::WHITE);

    let mut erased = RasterBuffer::filled(2, 1, Rgba8::opaque(10, 20, 30)).unwrap();
    erased.erase_with(&stencil);
    assert_eq!(erased.pixel(0, 0), Rgba8::TRANSPARENT);
    assert_eq!(erased.alpha(1, 0), 255);
}

#[test]
fn image_roundtrip_keeps_pixels() {
    let buf = RasterBuffer::filled(3, 2, Rgba8::new(1, 2, 3, 4)).unwrap();
    let img = buf.clone().into_image().unwrap();
    assert_eq!(RasterBuffer::from_image(img).unwrap(), buf);
}

#[test]
fn coverage_is_binary() {
    let mut buf = RasterBuffer::new(3, 1).unwrap();
    buf.set_pixel(1, 0, Rgba8::new(10, 20, 30, 1));
    buf.set_pixel(2, 0, Rgba8::new(10, 20, 30, 255));
    let cov = buf.coverage();
    assert_eq!(cov.pixel(0, 0), Rgba8::TRANSPARENT);
    assert_eq!(cov.pixel(1, 0), Rgba8::WHITE);
    assert_eq!(cov.pixel(2, 0), Rgba8::WHITE);
}

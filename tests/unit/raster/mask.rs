use super::*;

fn half_stencil() -> RasterBuffer {
    let mut s = RasterBuffer::new(4, 2).unwrap();
    for y in 0..2 {
        s.set_pixel(0, y, Rgba8::WHITE);
        s.set_pixel(1, y, Rgba8::new(255, 255, 255, 128));
    }
    s
}

#[test]
fn layer_is_clipped_to_stencil_alpha() {
    let layer = masked_fill_layer(&half_stencil(), &Rgba8::opaque(200, 10, 10));
    assert_eq!(layer.pixel(0, 0), Rgba8::opaque(200, 10, 10));
    assert_eq!(layer.pixel(1, 1), Rgba8::new(200, 10, 10, 128));
    assert_eq!(layer.pixel(2, 0), Rgba8::TRANSPARENT);
}

#[test]
fn closures_act_as_generators() {
    let fill = |x: u32, _y: u32| Rgba8::opaque(x as u8 * 10, 0, 0);
    let layer = masked_fill_layer(&half_stencil(), &fill);
    assert_eq!(layer.pixel(1, 0).r, 10);
}

#[test]
fn multiply_fill_tints_only_inside_stencil() {
    let mut target = RasterBuffer::filled(4, 2, Rgba8::WHITE).unwrap();
    apply_masked_fill(
        &mut target,
        &half_stencil(),
        &Rgba8::opaque(100, 50, 0),
        BlendMode::Multiply,
        1.0,
    );
    assert_eq!(target.pixel(0, 0), Rgba8::opaque(100, 50, 0));
    assert_eq!(target.pixel(3, 1), Rgba8::WHITE);
    let partial = target.pixel(1, 0);
    assert!(partial.r > 100 && partial.r < 255);
}

#[test]
fn zero_opacity_leaves_target_untouched() {
    let mut target = RasterBuffer::filled(4, 2, Rgba8::opaque(9, 9, 9)).unwrap();
    let before = target.clone();
    apply_masked_fill(
        &mut target,
        &half_stencil(),
        &Rgba8::WHITE,
        BlendMode::Screen,
        0.0,
    );
    assert_eq!(target, before);
}

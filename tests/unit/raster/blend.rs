use super::*;

#[test]
fn over_opacity_0_is_noop() {
    let dst = Rgba8::new(1, 2, 3, 4);
    let src = Rgba8::new(200, 200, 200, 200);
    assert_eq!(blend(dst, src, BlendMode::Normal, 0.0), dst);
}

#[test]
fn over_src_alpha_0_is_noop() {
    let dst = Rgba8::new(10, 20, 30, 40);
    let src = Rgba8::new(255, 255, 255, 0);
    assert_eq!(blend(dst, src, BlendMode::Normal, 1.0), dst);
}

#[test]
fn over_src_opaque_replaces_dst() {
    let dst = Rgba8::opaque(0, 0, 0);
    let src = Rgba8::opaque(255, 0, 0);
    assert_eq!(blend(dst, src, BlendMode::Normal, 1.0), src);
}

#[test]
fn over_dst_transparent_returns_src() {
    let src = Rgba8::new(100, 110, 120, 200);
    assert_eq!(blend(Rgba8::TRANSPARENT, src, BlendMode::Normal, 1.0), src);
}

#[test]
fn multiply_by_white_is_identity_and_by_black_is_black() {
    let dst = Rgba8::opaque(120, 60, 30);
    assert_eq!(blend(dst, Rgba8::WHITE, BlendMode::Multiply, 1.0), dst);
    assert_eq!(
        blend(dst, Rgba8::BLACK, BlendMode::Multiply, 1.0),
        Rgba8::BLACK
    );
}

#[test]
fn multiply_onto_transparent_behaves_like_over() {
    let src = Rgba8::opaque(120, 60, 30);
    assert_eq!(
        blend(Rgba8::TRANSPARENT, src, BlendMode::Multiply, 1.0),
        src
    );
}

#[test]
fn screen_lightens() {
    let dst = Rgba8::opaque(100, 100, 100);
    let out = blend(dst, Rgba8::opaque(100, 100, 100), BlendMode::Screen, 1.0);
    assert!(out.r > 100);
}

#[test]
fn overlay_keeps_extremes() {
    let src = Rgba8::opaque(128, 128, 128);
    assert_eq!(
        blend(Rgba8::BLACK, src, BlendMode::Overlay, 1.0).r,
        0
    );
    assert_eq!(
        blend(Rgba8::WHITE, src, BlendMode::Overlay, 1.0).r,
        255
    );
}

#[test]
fn atop_keeps_destination_alpha() {
    let dst = Rgba8::new(200, 200, 200, 90);
    let out = blend_atop(dst, Rgba8::opaque(0, 0, 255), BlendMode::Normal, 1.0);
    assert_eq!(out, Rgba8::new(0, 0, 255, 90));

    let half = blend_atop(dst, Rgba8::new(0, 0, 0, 255), BlendMode::Multiply, 0.5);
    assert_eq!(half.a, 90);
    assert_eq!(half.r, 100);
}

#[test]
fn atop_on_transparent_is_noop() {
    assert_eq!(
        blend_atop(Rgba8::TRANSPARENT, Rgba8::WHITE, BlendMode::Screen, 1.0),
        Rgba8::TRANSPARENT
    );
}

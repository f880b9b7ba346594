use super::*;

#[test]
fn parses_short_long_and_alpha_hex() {
    assert_eq!(Rgba8::from_hex("#fff").unwrap(), Rgba8::WHITE);
    assert_eq!(
        Rgba8::from_hex("FF8000").unwrap(),
        Rgba8::opaque(255, 128, 0)
    );
    assert_eq!(
        Rgba8::from_hex("#0000ff80").unwrap(),
        Rgba8::new(0, 0, 255, 128)
    );
}

#[test]
fn rejects_malformed_hex() {
    assert!(Rgba8::from_hex("#12").is_err());
    assert!(Rgba8::from_hex("#gggggg").is_err());
    assert!(Rgba8::from_hex("#ééé").is_err());
}

#[test]
fn lerp_endpoints_and_midpoint() {
    let a = Rgba8::opaque(0, 0, 0);
    let b = Rgba8::opaque(200, 100, 50);
    assert_eq!(a.lerp(b, 0.0), a);
    assert_eq!(a.lerp(b, 1.0), b);
    assert_eq!(a.lerp(b, 0.5), Rgba8::opaque(100, 50, 25));
}

#[test]
fn full_bounds_cover_buffer() {
    let b = Bounds::full(40, 60);
    assert_eq!((b.width(), b.height()), (40, 60));
    assert_eq!((b.min_x, b.min_y, b.max_x, b.max_y), (0, 0, 39, 59));
}

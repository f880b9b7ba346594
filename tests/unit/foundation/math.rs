use super::*;

#[test]
fn mul_div255_variants_align() {
    for x in [0u16, 1, 127, 255] {
        for y in [0u16, 1, 127, 255] {
            assert_eq!(u16::from(mul_div255_u8(x, y)), mul_div255_u16(x, y));
        }
    }
}

#[test]
fn premultiply_then_unpremultiply_is_stable_for_opaque_and_half() {
    let px = [200, 100, 50, 255];
    assert_eq!(unpremultiply(premultiply(px)), px);

    let half = [200, 100, 50, 128];
    let back = unpremultiply(premultiply(half));
    for c in 0..3 {
        assert!((i32::from(back[c]) - i32::from(half[c])).abs() <= 2);
    }
    assert_eq!(back[3], 128);
}

#[test]
fn unpremultiply_transparent_is_zero() {
    assert_eq!(unpremultiply([5, 5, 5, 0]), [0, 0, 0, 0]);
}

#[test]
fn smoothstep_edges() {
    assert_eq!(smoothstep(0.0, 1.0, -1.0), 0.0);
    assert_eq!(smoothstep(0.0, 1.0, 2.0), 1.0);
    assert!((smoothstep(0.0, 1.0, 0.5) - 0.5).abs() < 1e-6);
}

#[test]
fn clamp_or_replaces_non_finite() {
    assert_eq!(clamp_or(f64::NAN, 0.0, 1.0, 0.25), 0.25);
    assert_eq!(clamp_or(f64::INFINITY, 0.0, 1.0, 0.25), 0.25);
    assert_eq!(clamp_or(3.0, 0.0, 1.0, 0.25), 1.0);
}

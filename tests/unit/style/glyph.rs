use super::*;

fn run() -> GlyphRun {
    GlyphRun::from_svg_paths([
        ("M0,-20 L10,-20 L10,0 L0,0 Z", 12.0),
        ("M2,-30 L8,-30 L8,5 L2,5 Z", 10.0),
    ])
    .unwrap()
}

#[test]
fn rejects_bad_path_and_advance() {
    assert!(Glyph::from_svg("M0,0 Lnope", 3.0).is_err());
    assert!(Glyph::from_svg("M0,0 L1,1 Z", f64::NAN).is_err());
}

#[test]
fn pen_positions_include_spacing() {
    let r = run().with_letter_spacing(3.0);
    assert_eq!(r.pen_positions(), vec![0.0, 15.0]);
    assert_eq!(r.total_advance(), 25.0);
}

#[test]
fn ink_bounds_union_placed_outlines() {
    let b = run().ink_bounds().unwrap();
    assert_eq!((b.x0, b.y0, b.x1, b.y1), (0.0, -30.0, 20.0, 5.0));
    assert!(GlyphRun::default().ink_bounds().is_none());
}

#[test]
fn scaled_run_scales_everything() {
    let r = run().with_letter_spacing(2.0).scaled(3.0);
    assert_eq!(r.pen_positions(), vec![0.0, 42.0]);
    let b = r.ink_bounds().unwrap();
    assert_eq!((b.y0, b.y1), (-90.0, 15.0));
}

#[test]
fn flat_placement_translates_by_pen() {
    let r = run();
    let placed = r.place_flat(Vec2::new(5.0, 50.0));
    assert_eq!(placed.len(), 2);
    assert_eq!(
        placed[1].transform,
        Affine::translate(Vec2::new(17.0, 50.0))
    );
}

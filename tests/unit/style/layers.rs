use super::*;

fn square() -> GlyphRun {
    GlyphRun::from_svg_paths([("M0,-20 L20,-20 L20,0 L0,0 Z", 22.0)]).unwrap()
}

fn style(glow: f64) -> GlyphStyle {
    GlyphStyle {
        extrude_depth: 4.0,
        stroke_width: 2.0,
        glow_radius: glow,
        bevel_width: 2.0,
    }
}

#[test]
fn frame_fits_ink_plus_margin() {
    let (canvas, origin) = layer_frame(&square(), &style(0.0)).unwrap();
    assert_eq!((canvas.width, canvas.height), (36, 36));
    assert_eq!(origin, Vec2::new(8.0, 28.0));
}

#[test]
fn empty_run_is_rejected() {
    let err = layer_frame(&GlyphRun::default(), &style(0.0)).unwrap_err();
    assert!(err.to_string().contains("no outlines"));
}

#[test]
fn oversized_frame_is_rejected() {
    let ink = Rect::new(0.0, 0.0, 70_000.0, 10.0);
    assert!(frame_around(ink, 2.0).is_err());
}

#[test]
fn body_has_face_extrude_and_bevel() {
    let layers = compose_layers(&square(), &style(0.0), &Palette::default()).unwrap();
    let body = &layers.body;

    let center = body.pixel(18, 18);
    assert_eq!(center.a, 255);
    assert!((i32::from(center.r) - i32::from(FACE_SHADE.r)).abs() <= 1);

    let extrude = body.pixel(20, 30);
    assert_eq!(extrude.a, 255);
    assert!(extrude.r < FACE_SHADE.r);

    assert!(body.pixel(9, 9).r > center.r);
    assert!(body.pixel(26, 26).r < center.r);
    assert_eq!(body.alpha(2, 2), 0);
}

#[test]
fn fx_holds_strokes_but_not_face() {
    let layers = compose_layers(&square(), &style(0.0), &Palette::default()).unwrap();
    assert!(layers.fx.alpha(7, 18) > 200);
    assert_eq!(layers.fx.alpha(18, 18), 0);
}

#[test]
fn glow_spreads_outside_and_is_erased_under_body() {
    let layers = compose_layers(&square(), &style(3.0), &Palette::default()).unwrap();
    assert_eq!(layers.body.width(), 48);
    assert!(layers.fx.alpha(10, 24) > 0);
    assert_eq!(layers.fx.alpha(24, 24), 0);
}

#[test]
fn no_stroke_no_glow_leaves_fx_blank() {
    let s = GlyphStyle {
        stroke_width: 0.0,
        glow_radius: 0.0,
        ..style(0.0)
    };
    let layers = compose_layers(&square(), &s, &Palette::default()).unwrap();
    assert!(layers.fx.is_blank());
}

#[test]
fn scaled_style_scales_lengths() {
    let s = style(1.0).scaled(3.0);
    assert_eq!(s.extrude_depth, 12.0);
    assert_eq!(s.glow_px(), 3);
    assert_eq!(s.margin(), 26.0);
}

#[test]
fn placed_bounds_follow_transforms() {
    let run = square();
    let placed = run.place_flat(Vec2::new(5.0, 30.0));
    let b = placed_ink_bounds(&placed).unwrap();
    assert_eq!((b.x0, b.y0, b.x1, b.y1), (5.0, 10.0, 25.0, 30.0));
}

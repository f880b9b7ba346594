use super::*;
use crate::warp::params::WarpMode;
use serde_json::json;

fn parse(v: serde_json::Value) -> RenderConfig {
    RenderConfig::from_json_str(&v.to_string()).unwrap()
}

#[test]
fn empty_object_is_default() {
    assert_eq!(parse(json!({})), RenderConfig::default());
}

#[test]
fn camel_case_fields_parse() {
    let c = parse(json!({
        "curveMode": "bottomWarp",
        "bend": 30,
        "warpStartRatio": 0.5,
        "warpPower": 1.0,
        "warpDirection": "up",
        "curveScope": "bottomOnly",
        "colors": { "top": "#fff" },
        "arcRotateFactor": 0.5
    }));
    assert_eq!(c.curve_mode, CurveMode::BottomWarp);
    assert_eq!(c.warp_direction, WarpDirection::Up);
    assert_eq!(c.curve_scope, CurveScope::BottomOnly);
    assert_eq!(c.colors.top, "#fff");
    assert_eq!(c.colors.bottom, ColorConfig::default().bottom);
}

#[test]
fn malformed_json_is_serde_error() {
    let err = RenderConfig::from_json_str("{ \"width\": \"wide\" }").unwrap_err();
    assert!(matches!(err, ChromeError::Serde(_)));
}

#[test]
fn bottom_warp_resolves_with_clamps() {
    let c = parse(json!({
        "size": 100,
        "curveMode": "bottomWarp",
        "bend": 500,
        "warpStartRatio": 0.05,
        "warpPower": 9
    }));
    let CurveStrategy::Warp(p) = c.resolve().curve else {
        panic!("expected warp");
    };
    assert_eq!(p.mode, WarpMode::BottomWeighted);
    assert_eq!(p.bend, 90.0);
    assert_eq!(p.start_ratio, 0.2);
    assert_eq!(p.power, 3.0);
}

#[test]
fn bottom_warp_uses_mode_defaults() {
    let c = parse(json!({ "curveMode": "bottomWarp", "bend": 10 }));
    let CurveStrategy::Warp(p) = c.resolve().curve else {
        panic!("expected warp");
    };
    assert_eq!((p.start_ratio, p.power), BOTTOM_WEIGHTED_DEFAULTS);
}

#[test]
fn arc_curve_maps_curve_to_pixels() {
    let full = parse(json!({ "size": 200, "curveMode": "arcCurve", "curve": 50 }));
    let CurveStrategy::Warp(p) = full.resolve().curve else {
        panic!("expected warp");
    };
    assert_eq!(p.mode, WarpMode::FullParabolic);
    assert_eq!(p.bend, 50.0);
    assert_eq!(p.direction, WarpDirection::Up);

    let bottom = parse(json!({
        "size": 200, "curveMode": "arcCurve", "curve": -100, "curveScope": "bottomOnly"
    }));
    let CurveStrategy::Warp(p) = bottom.resolve().curve else {
        panic!("expected warp");
    };
    assert_eq!(p.mode, WarpMode::BottomOnlyParabolic);
    assert_eq!(p.bend, 100.0);
    assert_eq!(p.direction, WarpDirection::Down);
    assert_eq!((p.start_ratio, p.power), BOTTOM_ARC_DEFAULTS);
}

#[test]
fn arc_mode_clamps_curve_and_rotation() {
    let c = parse(json!({ "curveMode": "arc", "curve": 400, "arcRotateFactor": -1 }));
    assert_eq!(
        c.resolve().curve,
        CurveStrategy::Arc {
            curve: 100.0,
            rotate_factor: 0.0
        }
    );
}

#[test]
fn non_finite_numbers_fall_back_to_defaults() {
    let c = RenderConfig {
        size: f64::NAN,
        glow_radius: f64::INFINITY,
        letter_spacing: f64::NAN,
        ..RenderConfig::default()
    };
    let r = c.resolve();
    assert_eq!(r.size, 160.0);
    assert_eq!(r.style.glow_radius, GlyphStyle::default().glow_radius);
    assert_eq!(r.letter_spacing, 0.0);
}

#[test]
fn canvas_and_supersample_are_clamped() {
    let c = parse(json!({ "width": 0, "height": 100000, "supersample": 9 }));
    let r = c.resolve();
    assert_eq!((r.canvas.width, r.canvas.height), (1, MAX_CANVAS));
    assert_eq!(r.supersampler.factor(), 4);
}

#[test]
fn bad_colors_fall_back() {
    let c = parse(json!({
        "colors": { "top": "not-a-color", "outline": "#ff0000", "background": "#zzz" }
    }));
    let p = c.resolve().palette;
    assert_eq!(p.gradient.sample(0.0), Rgba8::opaque(0xf5, 0xf7, 0xfa));
    assert_eq!(p.outline, Rgba8::opaque(255, 0, 0));
    assert_eq!(p.background, None);
    assert_eq!(p, Palette { outline: Rgba8::opaque(255, 0, 0), ..Palette::default() });
}

#[test]
fn job_scales_glyphs_to_size() {
    let job = RenderJob::from_json_str(
        &json!({
            "unitsPerEm": 100,
            "glyphs": [
                { "path": "M0,-70 L50,-70 L50,0 L0,0 Z", "advance": 60 },
                { "path": "M0,-70 L50,-70 L50,0 L0,0 Z", "advance": 60 }
            ]
        })
        .to_string(),
    )
    .unwrap();
    assert_eq!(job.config, RenderConfig::default());
    let run = job.glyph_run(200.0).unwrap();
    assert_eq!(run.pen_positions(), vec![0.0, 120.0]);
    assert_eq!(run.ink_bounds().unwrap().y0, -140.0);
}

#[test]
fn job_rejects_bad_units() {
    let job = RenderJob {
        config: RenderConfig::default(),
        units_per_em: 0.0,
        glyphs: vec![],
    };
    assert!(job.glyph_run(100.0).is_err());
}

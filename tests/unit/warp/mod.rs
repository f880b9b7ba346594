use super::*;
use crate::foundation::core::Rgba8;
use crate::warp::params::WarpDirection;

fn flattened_card() -> RasterBuffer {
    let bg = Rgba8::opaque(240, 240, 235);
    let mut buf = RasterBuffer::filled(60, 50, bg).unwrap();
    for y in 10..40 {
        for x in 5..55 {
            buf.set_pixel(x, y, Rgba8::opaque(180, 20, 20));
        }
    }
    buf
}

#[test]
fn warp_returns_new_buffer_and_keeps_input() {
    let src = flattened_card();
    let before = src.clone();
    let out = warp(
        &src,
        &WarpParams::bottom_weighted(6.0, WarpDirection::Down),
        Bounds::full(60, 50),
    )
    .unwrap();
    assert_eq!(src, before);
    assert_eq!(out.height(), 56);
}

#[test]
fn flattened_warp_fills_with_background_and_bends_content() {
    let src = flattened_card();
    let out = warp_flattened(
        &src,
        &WarpParams::bottom_weighted(8.0, WarpDirection::Down).with_onset(0.5, 1.0),
        30.0,
    )
    .unwrap();
    assert_eq!(out.height(), 58);
    // Padding rows take the backdrop color rather than transparency.
    assert_eq!(out.pixel(0, 57), Rgba8::opaque(240, 240, 235));
    // Top of the card is rigid.
    assert_eq!(out.pixel(30, 10), Rgba8::opaque(180, 20, 20));
    // The card's bottom edge moved down near the center column.
    assert_eq!(out.pixel(30, 46), Rgba8::opaque(180, 20, 20));
    assert_eq!(out.pixel(30, 48), Rgba8::opaque(240, 240, 235));
    // At the left edge the card bottom stays close to its original row.
    assert_eq!(out.pixel(0, 45), Rgba8::opaque(240, 240, 235));
}

#[test]
fn flattened_warp_limits_bend_to_fold_safe_range() {
    let src = flattened_card();
    let out = warp_flattened(
        &src,
        &WarpParams::bottom_weighted(200.0, WarpDirection::Down).with_onset(0.5, 1.0),
        30.0,
    )
    .unwrap();
    // Card rows 10..=39: start 24.5, range 14.5 -> bend capped at 12.76.
    assert_eq!(out.height(), 50 + 13);
}

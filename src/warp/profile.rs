/// Column parabola `1 - t²` with `t = 2x/(w-1) - 1`: zero at both edges, one at the center.
///
/// A single-column buffer is all center.
pub fn column_curve(x: u32, width: u32) -> f64 {
    if width <= 1 {
        return 1.0;
    }
    let t = 2.0 * f64::from(x) / f64::from(width - 1) - 1.0;
    1.0 - t * t
}

/// Largest [`column_curve`] value over all columns of a `width`-wide buffer.
pub fn peak_column_curve(width: u32) -> f64 {
    if width <= 1 {
        return 1.0;
    }
    // The parabola peaks at the middle; for even widths the two middle columns tie.
    column_curve((width - 1) / 2, width)
}

/// Progressive onset in y: `0` up to `start`, then `((y - start) / range)^power`, held at `1`
/// below the end of the range so rows under the glyph follow its bottom rigidly.
pub fn onset(y: f64, start: f64, range: f64, power: f64) -> f64 {
    if y <= start {
        return 0.0;
    }
    ((y - start) / range).min(1.0).powf(power)
}

#[cfg(test)]
#[path = "../../tests/unit/warp/profile.rs"]
mod tests;

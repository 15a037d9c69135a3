//! Colour scale for heat-map cells.
//!
//! Reversed viridis: level 0 (fast to crack) is bright yellow, level 1
//! (slow to crack) is deep purple.

use plotters::style::RGBColor;

const VIRIDIS: [(f64, u8, u8, u8); 9] = [
    (0.000, 68, 1, 84),
    (0.125, 71, 44, 122),
    (0.250, 59, 81, 139),
    (0.375, 44, 113, 142),
    (0.500, 33, 144, 141),
    (0.625, 39, 173, 129),
    (0.750, 92, 200, 99),
    (0.875, 170, 220, 50),
    (1.000, 253, 231, 37),
];

/// Colour for a normalised level in [0, 1]; out-of-range input is clamped
pub fn heat_color(level: f64) -> RGBColor {
    let level = if level.is_nan() { 0.5 } else { level.clamp(0.0, 1.0) };
    viridis(1.0 - level)
}

fn viridis(t: f64) -> RGBColor {
    for pair in VIRIDIS.windows(2) {
        let (t0, r0, g0, b0) = pair[0];
        let (t1, r1, g1, b1) = pair[1];
        if t <= t1 {
            let f = (t - t0) / (t1 - t0);
            return RGBColor(lerp(r0, r1, f), lerp(g0, g1, f), lerp(b0, b1, f));
        }
    }
    let (_, r, g, b) = VIRIDIS[VIRIDIS.len() - 1];
    RGBColor(r, g, b)
}

fn lerp(a: u8, b: u8, f: f64) -> u8 {
    (a as f64 + (b as f64 - a as f64) * f).round() as u8
}

/// Black or white, whichever reads better on `background`
pub fn text_color(background: RGBColor) -> RGBColor {
    let RGBColor(r, g, b) = background;
    let luminance = 0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64;
    if luminance > 140.0 {
        RGBColor(0, 0, 0)
    } else {
        RGBColor(255, 255, 255)
    }
}

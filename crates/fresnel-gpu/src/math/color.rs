//! RGB ↔ HSV conversion.
//!
//! Hue is expressed in turns: `[0, 1)` covers the full circle, so red sits
//! at 0, green at 1/3, blue at 2/3. Kernel-side grading code uses the same
//! convention; changing it breaks every hue-shift effect.

/// Converts linear RGB to HSV.
///
/// Saturation is 0 when the maximum channel is 0 (pure black), which also
/// pins hue to 0 — achromatic inputs have no meaningful hue, but the
/// output must be deterministic.
pub fn rgb_to_hsv(rgb: [f32; 3]) -> [f32; 3] {
    let [r, g, b] = rgb;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let diff = max - min;

    let s = if max == 0.0 { 0.0 } else { diff / max };
    let v = max;

    let mut h = 0.0;
    if diff != 0.0 {
        if max == r {
            // The add-6 keeps hue positive when the sector wraps below red.
            h = (g - b) / diff + if g < b { 6.0 } else { 0.0 };
        } else if max == g {
            h = (b - r) / diff + 2.0;
        } else {
            h = (r - g) / diff + 4.0;
        }
        h /= 6.0;
    }

    [h, s, v]
}

/// Converts HSV (hue in turns) to linear RGB.
///
/// Uses the standard six-sector decomposition on `h * 6`; each sector
/// boundary belongs to the higher sector, and the result is continuous
/// across boundaries.
pub fn hsv_to_rgb(hsv: [f32; 3]) -> [f32; 3] {
    let [h, s, v] = hsv;
    let h = h * 6.0;

    let c = v * s;
    let x = c * (1.0 - ((h % 2.0) - 1.0).abs());
    let m = v - c;

    let [r, g, b] = if h < 1.0 {
        [c, x, 0.0]
    } else if h < 2.0 {
        [x, c, 0.0]
    } else if h < 3.0 {
        [0.0, c, x]
    } else if h < 4.0 {
        [0.0, x, c]
    } else if h < 5.0 {
        [x, 0.0, c]
    } else {
        [c, 0.0, x]
    };

    [r + m, g + m, b + m]
}

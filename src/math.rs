//! Color math, direct conversions between RGB and the cylindrical models.
//! All functions use normalized f64 in 0.0–1.0 (hue included, as a fraction of a turn).

/// HSV → RGB. All values 0.0–1.0.
pub(crate) fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (v, v, v);
    }
    let h6 = (h * 6.0).rem_euclid(6.0);
    let i = h6.floor() as u32;
    let f = h6 - h6.floor();
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    match i % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

/// RGB → HSV. All values 0.0–1.0.
pub(crate) fn rgb_to_hsv(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let v = max;
    let s = if max == 0.0 { 0.0 } else { delta / max };

    let h = if delta == 0.0 {
        0.0
    } else if max == r {
        ((g - b) / delta).rem_euclid(6.0) / 6.0
    } else if max == g {
        ((b - r) / delta + 2.0) / 6.0
    } else {
        ((r - g) / delta + 4.0) / 6.0
    };

    (h, s, v)
}

/// HSL → HSV. All values 0.0–1.0.
pub(crate) fn hsl_to_hsv(h: f64, s_hsl: f64, l: f64) -> (f64, f64, f64) {
    let v = l + s_hsl * l.min(1.0 - l);
    let s_hsv = if v == 0.0 { 0.0 } else { 2.0 * (1.0 - l / v) };
    (h, s_hsv, v)
}

/// HSV → HSL. All values 0.0–1.0.
pub(crate) fn hsv_to_hsl(h: f64, s_hsv: f64, v: f64) -> (f64, f64, f64) {
    let l = v * (1.0 - s_hsv / 2.0);
    let s_hsl = if l == 0.0 || l == 1.0 {
        0.0
    } else {
        (v - l) / l.min(1.0 - l)
    };
    (h, s_hsl, l)
}

/// HWB → HSV. Whiteness and blackness summing past 1.0 are normalized to a gray.
pub(crate) fn hwb_to_hsv(h: f64, w: f64, b: f64) -> (f64, f64, f64) {
    let (w, b) = if w + b >= 1.0 {
        let sum = w + b;
        (w / sum, b / sum)
    } else {
        (w, b)
    };
    let v = 1.0 - b;
    let s = if v == 0.0 { 0.0 } else { 1.0 - w / v };
    (h, s, v)
}

/// HSV → HWB. All values 0.0–1.0.
pub(crate) fn hsv_to_hwb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    (h, (1.0 - s) * v, 1.0 - v)
}

/// Round half away from zero, the rounding used for every displayed channel.
pub(crate) fn round_part(value: f64) -> f64 {
    value.round()
}

/// Round to `decimals` places.
pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Format a number with at most two decimals and no trailing zeros.
pub(crate) fn fmt_decimal(value: f64) -> String {
    let rounded = round_to(value, 2);
    let text = format!("{rounded:.2}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" { "0".to_string() } else { text.to_string() }
}

/// Clamp to 0.0–1.0, mapping NaN to 0.0.
pub(crate) fn unit(value: f64) -> f64 {
    if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) }
}

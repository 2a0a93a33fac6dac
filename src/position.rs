//! Knob pixel offsets ↔ HSV + alpha.
//!
//! All three knobs live on the same axis length (`offset_length`). The plane
//! knob encodes saturation along x and inverted value along y, the hue knob
//! encodes hue along y, and the alpha knob encodes inverted alpha along y
//! (offset 0 is fully opaque).

use crate::color::Hsva;

/// Pixel offsets of the three knobs. Every coordinate stays in `[0, length]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ControlPositions {
    pub c1x: f64,
    pub c1y: f64,
    pub c2y: f64,
    pub c3y: f64,
}

/// Clamp an offset into `[0, length]`; NaN and negative lengths collapse to 0.
pub fn clamp_offset(offset: f64, length: f64) -> f64 {
    if offset.is_nan() || length <= 0.0 {
        return 0.0;
    }
    offset.clamp(0.0, length)
}

/// Read all four channels from one position set.
pub fn pixel_to_hsv(positions: &ControlPositions, length: f64) -> Hsva {
    if length <= 0.0 {
        return Hsva {
            a: 1.0,
            ..Hsva::default()
        };
    }
    let p = positions.clamped(length);
    Hsva {
        h: p.c2y / length,
        s: p.c1x / length,
        v: 1.0 - p.c1y / length,
        a: 1.0 - p.c3y / length,
    }
}

/// Inverse of [`pixel_to_hsv`].
pub fn hsv_to_pixel(hsva: Hsva, length: f64) -> ControlPositions {
    ControlPositions {
        c1x: hsva.s * length,
        c1y: (1.0 - hsva.v) * length,
        c2y: hsva.h * length,
        c3y: (1.0 - hsva.a) * length,
    }
    .clamped(length)
}

impl ControlPositions {
    pub fn clamped(self, length: f64) -> Self {
        Self {
            c1x: clamp_offset(self.c1x, length),
            c1y: clamp_offset(self.c1y, length),
            c2y: clamp_offset(self.c2y, length),
            c3y: clamp_offset(self.c3y, length),
        }
    }

    /// Move the plane knob, leaving hue and alpha untouched.
    pub fn with_plane(self, x: f64, y: f64, length: f64) -> Self {
        Self {
            c1x: clamp_offset(x, length),
            c1y: clamp_offset(y, length),
            ..self
        }
    }

    pub fn with_hue(self, y: f64, length: f64) -> Self {
        Self {
            c2y: clamp_offset(y, length),
            ..self
        }
    }

    pub fn with_alpha(self, y: f64, length: f64) -> Self {
        Self {
            c3y: clamp_offset(y, length),
            ..self
        }
    }

    /// Scale offsets proportionally to a new axis length.
    pub fn rescale(self, old_length: f64, new_length: f64) -> Self {
        if old_length <= 0.0 {
            return self.clamped(new_length);
        }
        let k = new_length / old_length;
        Self {
            c1x: self.c1x * k,
            c1y: self.c1y * k,
            c2y: self.c2y * k,
            c3y: self.c3y * k,
        }
        .clamped(new_length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEN: f64 = 300.0;

    #[test]
    fn round_trip_over_grid() {
        for x in (0..=300).step_by(15) {
            for y in (0..=300).step_by(20) {
                let p = ControlPositions {
                    c1x: x as f64,
                    c1y: y as f64,
                    c2y: (300 - x) as f64,
                    c3y: (y / 2) as f64,
                };
                let back = hsv_to_pixel(pixel_to_hsv(&p, LEN), LEN);
                assert!((back.c1x - p.c1x).abs() < 0.5, "{p:?} -> {back:?}");
                assert!((back.c1y - p.c1y).abs() < 0.5);
                assert!((back.c2y - p.c2y).abs() < 0.5);
                assert!((back.c3y - p.c3y).abs() < 0.5);
            }
        }
    }

    #[test]
    fn corners() {
        let top_right = ControlPositions {
            c1x: LEN,
            ..Default::default()
        };
        let hsva = pixel_to_hsv(&top_right, LEN);
        assert_eq!((hsva.h, hsva.s, hsva.v, hsva.a), (0.0, 1.0, 1.0, 1.0));

        let bottom = ControlPositions {
            c1y: LEN,
            c3y: LEN,
            ..Default::default()
        };
        let hsva = pixel_to_hsv(&bottom, LEN);
        assert_eq!((hsva.v, hsva.a), (0.0, 0.0));
    }

    #[test]
    fn writes_are_clamped() {
        let p = ControlPositions::default()
            .with_plane(-40.0, 9000.0, LEN)
            .with_hue(f64::NAN, LEN)
            .with_alpha(301.0, LEN);
        assert_eq!(
            p,
            ControlPositions {
                c1x: 0.0,
                c1y: LEN,
                c2y: 0.0,
                c3y: LEN
            }
        );
    }

    #[test]
    fn moving_one_knob_keeps_others() {
        let p = ControlPositions {
            c1x: 10.0,
            c1y: 20.0,
            c2y: 30.0,
            c3y: 40.0,
        };
        let moved = p.with_hue(200.0, LEN);
        let before = pixel_to_hsv(&p, LEN);
        let after = pixel_to_hsv(&moved, LEN);
        assert_eq!((before.s, before.v, before.a), (after.s, after.v, after.a));
        assert_ne!(before.h, after.h);
    }

    #[test]
    fn rescale_keeps_proportions() {
        let p = ControlPositions {
            c1x: 150.0,
            c1y: 300.0,
            c2y: 75.0,
            c3y: 0.0,
        };
        let r = p.rescale(300.0, 230.0);
        assert!((r.c1x - 115.0).abs() < 1e-9);
        assert!((r.c1y - 230.0).abs() < 1e-9);
        assert!((pixel_to_hsv(&r, 230.0).h - pixel_to_hsv(&p, 300.0).h).abs() < 1e-12);
    }
}

//! Sequential red color scale.
//!
//! Piecewise-linear approximation of the familiar sequential "Reds" scale:
//! near-white at 0, saturated red in the middle, dark brick red at 1.

/// An sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Hex form, e.g. `#fff5f0`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

const ANCHORS: [(f64, [f64; 3]); 3] = [
    (0.0, [255.0, 245.0, 240.0]),
    (0.5, [251.0, 106.0, 74.0]),
    (1.0, [103.0, 0.0, 13.0]),
];

/// Color at position `t` on the scale, with `t` clamped to [0, 1].
pub fn reds(t: f64) -> Rgb {
    let t = t.clamp(0.0, 1.0);
    let (lo, hi) = if t <= ANCHORS[1].0 {
        (ANCHORS[0], ANCHORS[1])
    } else {
        (ANCHORS[1], ANCHORS[2])
    };
    let span = hi.0 - lo.0;
    let f = if span == 0.0 { 0.0 } else { (t - lo.0) / span };
    let channel = |i: usize| (lo.1[i] + (hi.1[i] - lo.1[i]) * f).round() as u8;
    Rgb {
        r: channel(0),
        g: channel(1),
        b: channel(2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_match_the_scale() {
        assert_eq!(reds(0.0).to_hex(), "#fff5f0");
        assert_eq!(reds(1.0).to_hex(), "#67000d");
    }

    #[test]
    fn out_of_range_inputs_clamp() {
        assert_eq!(reds(-3.0), reds(0.0));
        assert_eq!(reds(7.0), reds(1.0));
    }

    #[test]
    fn intensity_darkens_monotonically() {
        let mut last = i32::MAX;
        for step in 0..=10 {
            let c = reds(f64::from(step) / 10.0);
            let brightness = i32::from(c.r) + i32::from(c.g) + i32::from(c.b);
            assert!(brightness <= last, "step {step} got brighter");
            last = brightness;
        }
    }
}

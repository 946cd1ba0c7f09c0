//! Color helpers for the procedural item palette.

/// Convert an HSL color to linear-ish RGB in `[0, 1]`.
///
/// `h` is in degrees `[0, 360)`, `s` and `l` in `[0, 1]`.
#[must_use]
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> [f32; 3] {
    let h = h.rem_euclid(360.0) / 360.0;
    let a = s * l.min(1.0 - l);
    let f = |n: f32| {
        let k = (n + h * 12.0) % 12.0;
        l - a * (k - 3.0).min(9.0 - k).clamp(-1.0, 1.0)
    };
    [f(0.0), f(8.0), f(4.0)]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_rgb_close(actual: [f32; 3], expected: [f32; 3]) {
        for (a, e) in actual.iter().zip(expected.iter()) {
            assert!((a - e).abs() < 1e-5, "{actual:?} != {expected:?}");
        }
    }

    #[test]
    fn primary_hues() {
        assert_rgb_close(hsl_to_rgb(0.0, 1.0, 0.5), [1.0, 0.0, 0.0]);
        assert_rgb_close(hsl_to_rgb(120.0, 1.0, 0.5), [0.0, 1.0, 0.0]);
        assert_rgb_close(hsl_to_rgb(240.0, 1.0, 0.5), [0.0, 0.0, 1.0]);
    }

    #[test]
    fn zero_saturation_is_gray() {
        assert_rgb_close(hsl_to_rgb(37.0, 0.0, 0.25), [0.25, 0.25, 0.25]);
    }

    #[test]
    fn hue_wraps() {
        assert_rgb_close(hsl_to_rgb(360.0, 1.0, 0.5), hsl_to_rgb(0.0, 1.0, 0.5));
    }
}
